//! Configuration for a parcel catalog.

use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::errors::{ErrorKind, ParcelError, ParcelResult};
use crate::{
    HASH_TABLE_SIZE, MAX_DESTINATION_LEN, MAX_VALUE, MAX_WEIGHT, MIN_VALUE, MIN_WEIGHT,
};

/// Catalog settings: index table size and record acceptance bounds.
///
/// Cheap to clone; clones share the same settings. Setters validate their
/// input and copy-on-write, so a config handed to a catalog never changes
/// underneath it.
///
/// # Examples
///
/// ```rust
/// use parcel::catalog_config::CatalogConfig;
///
/// let mut config = CatalogConfig::new();
/// config.set_table_size(31)?;
/// assert_eq!(config.table_size(), 31);
/// assert!(config.accepts_weight(100));
/// # Ok::<(), parcel::errors::ParcelError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    inner: Arc<CatalogConfigInner>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogConfig {
    /// Creates a configuration with the standard bounds: 127 buckets, weights
    /// 100..=50000 g, values 10.00..=2000.00, destinations up to 99 bytes.
    pub fn new() -> Self {
        CatalogConfig {
            inner: Arc::new(CatalogConfigInner::new()),
        }
    }

    pub fn table_size(&self) -> usize {
        self.inner.table_size
    }

    pub fn weight_range(&self) -> RangeInclusive<u32> {
        self.inner.weight_range.clone()
    }

    pub fn value_range(&self) -> RangeInclusive<f64> {
        self.inner.value_range.clone()
    }

    pub fn max_destination_len(&self) -> usize {
        self.inner.max_destination_len
    }

    pub fn accepts_weight(&self, weight: u32) -> bool {
        self.inner.weight_range.contains(&weight)
    }

    /// NaN and infinities are never accepted.
    pub fn accepts_value(&self, value: f64) -> bool {
        value.is_finite() && self.inner.value_range.contains(&value)
    }

    /// Sets the number of index buckets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `table_size` is zero.
    pub fn set_table_size(&mut self, table_size: usize) -> ParcelResult<()> {
        if table_size == 0 {
            return Err(invalid("Table size must be greater than zero"));
        }
        Arc::make_mut(&mut self.inner).table_size = table_size;
        Ok(())
    }

    /// Sets the inclusive weight bounds in grams.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `min > max`.
    pub fn set_weight_range(&mut self, min: u32, max: u32) -> ParcelResult<()> {
        if min > max {
            return Err(invalid(&format!(
                "Weight range {}..={} is empty",
                min, max
            )));
        }
        Arc::make_mut(&mut self.inner).weight_range = min..=max;
        Ok(())
    }

    /// Sets the inclusive value bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either bound is not finite or `min > max`.
    pub fn set_value_range(&mut self, min: f64, max: f64) -> ParcelResult<()> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(invalid(&format!(
                "Value range {:.2}..={:.2} is not a valid range",
                min, max
            )));
        }
        Arc::make_mut(&mut self.inner).value_range = min..=max;
        Ok(())
    }

    /// Sets how many bytes of a destination are kept; longer names are cut.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `max_len` is zero.
    pub fn set_max_destination_len(&mut self, max_len: usize) -> ParcelResult<()> {
        if max_len == 0 {
            return Err(invalid("Destination length limit must be greater than zero"));
        }
        Arc::make_mut(&mut self.inner).max_destination_len = max_len;
        Ok(())
    }
}

fn invalid(message: &str) -> ParcelError {
    log::error!("{}", message);
    ParcelError::new(message, ErrorKind::InvalidConfiguration)
}

#[derive(Clone, Debug)]
struct CatalogConfigInner {
    table_size: usize,
    weight_range: RangeInclusive<u32>,
    value_range: RangeInclusive<f64>,
    max_destination_len: usize,
}

impl CatalogConfigInner {
    fn new() -> Self {
        CatalogConfigInner {
            table_size: HASH_TABLE_SIZE,
            weight_range: MIN_WEIGHT..=MAX_WEIGHT,
            value_range: MIN_VALUE..=MAX_VALUE,
            max_destination_len: MAX_DESTINATION_LEN,
        }
    }
}
