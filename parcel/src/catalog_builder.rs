use crate::catalog::ParcelCatalog;
use crate::catalog_config::CatalogConfig;
use crate::errors::{ParcelError, ParcelResult};

/// Builder for a [`ParcelCatalog`].
///
/// Setters capture the first configuration error instead of failing
/// immediately; [`CatalogBuilder::open`] reports it.
///
/// # Examples
///
/// ```rust
/// use parcel::ParcelCatalog;
///
/// let catalog = ParcelCatalog::builder()
///     .table_size(31)
///     .max_destination_len(40)
///     .open()?;
/// assert!(catalog.is_empty()?);
///
/// assert!(ParcelCatalog::builder().table_size(0).open().is_err());
/// # Ok::<(), parcel::errors::ParcelError>(())
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    error: Option<ParcelError>,
    config: CatalogConfig,
}

impl CatalogBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        CatalogBuilder {
            error: None,
            config: CatalogConfig::new(),
        }
    }

    /// Number of buckets in the destination index.
    pub fn table_size(mut self, table_size: usize) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_table_size(table_size) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Inclusive weight bounds, in grams.
    pub fn weight_range(mut self, min: u32, max: u32) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_weight_range(min, max) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Inclusive value bounds.
    pub fn value_range(mut self, min: f64, max: f64) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_value_range(min, max) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Maximum destination length in bytes.
    pub fn max_destination_len(mut self, max_len: usize) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_max_destination_len(max_len) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Opens an empty catalog with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns the first error captured by a setter.
    pub fn open(self) -> ParcelResult<ParcelCatalog> {
        if let Some(error) = self.error {
            return Err(error);
        }
        ParcelCatalog::new(self.config)
    }
}
