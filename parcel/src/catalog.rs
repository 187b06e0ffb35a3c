//! The catalog facade: owns the index, drives loading and answers queries.

use std::fmt::{Debug, Formatter};
use std::io::BufRead;
use std::ops::Deref;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::catalog_builder::CatalogBuilder;
use crate::catalog_config::CatalogConfig;
use crate::common::{atomic, normalize_destination, Atomic, ReadExecutor, WriteExecutor};
use crate::errors::{ErrorKind, ParcelError, ParcelResult};
use crate::index::{DestinationIndex, InsertOutcome, WeightTree};
use crate::loader::{CatalogLoader, LoadReport};
use crate::query::{self, Extremes, Totals, WeightFilter};
use crate::record::Parcel;

/// An in-memory parcel catalog.
///
/// Lifecycle is explicit: [`ParcelCatalog::builder`] opens an empty catalog,
/// [`ParcelCatalog::load_file`] (or [`ParcelCatalog::load_reader`]) fills it,
/// the query methods read it, and [`ParcelCatalog::close`] releases every
/// node. Anything after `close` fails with [`ErrorKind::CatalogClosed`].
///
/// Query methods normalize the destination they are given, so `"Canada"`
/// and `" canada "` find the same parcels.
///
/// Clones share the same underlying catalog.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use parcel::ParcelCatalog;
///
/// let catalog = ParcelCatalog::builder().open()?;
/// catalog.load_reader(Cursor::new("canada, 500, 25.50\ncanada, 200, 12.00\n"))?;
///
/// let weights: Vec<u32> = catalog.list("Canada")?.iter().map(|p| p.weight()).collect();
/// assert_eq!(weights, vec![200, 500]);
///
/// assert_eq!(catalog.close()?, 2);
/// # Ok::<(), parcel::errors::ParcelError>(())
/// ```
#[derive(Clone)]
pub struct ParcelCatalog {
    inner: Arc<ParcelCatalogInner>,
}

impl ParcelCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub(crate) fn new(config: CatalogConfig) -> ParcelResult<Self> {
        Ok(ParcelCatalog {
            inner: Arc::new(ParcelCatalogInner::new(config)?),
        })
    }
}

impl Debug for ParcelCatalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParcelCatalog")
            .field("table_size", &self.config.table_size())
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Deref for ParcelCatalog {
    type Target = Arc<ParcelCatalogInner>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ParcelCatalogInner {
    config: CatalogConfig,
    index: Atomic<DestinationIndex>,
    closed: AtomicBool,
}

impl ParcelCatalogInner {
    fn new(config: CatalogConfig) -> ParcelResult<Self> {
        let index = DestinationIndex::with_table_size(config.table_size())?;
        Ok(ParcelCatalogInner {
            config,
            index: atomic(index),
            closed: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn check_opened(&self) -> ParcelResult<()> {
        if self.is_closed() {
            log::error!("Parcel catalog is already closed");
            return Err(ParcelError::new(
                "Parcel catalog is already closed",
                ErrorKind::CatalogClosed,
            ));
        }
        Ok(())
    }

    /// Loads the parcel file at `path` into the catalog.
    ///
    /// # Errors
    ///
    /// `CatalogClosed` after `close`; an I/O kind when the file cannot be read.
    /// Bad records are not errors; they are listed in the returned report.
    pub fn load_file(&self, path: impl AsRef<Path>) -> ParcelResult<LoadReport> {
        self.check_opened()?;
        self.index
            .write_with(|index| CatalogLoader::new(&self.config, index).load_path(path))
    }

    /// Loads parcel records from any buffered reader.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> ParcelResult<LoadReport> {
        self.check_opened()?;
        self.index
            .write_with(|index| CatalogLoader::new(&self.config, index).load_reader(reader))
    }

    /// Inserts one parcel directly, bypassing the parser's range checks.
    ///
    /// # Errors
    ///
    /// `MalformedRecord` when the parcel has no destination.
    pub fn insert(&self, parcel: Parcel) -> ParcelResult<InsertOutcome> {
        self.check_opened()?;
        if parcel.destination().is_empty() {
            log::error!("Rejected parcel of {} g without a destination", parcel.weight());
            return Err(ParcelError::new(
                "Destination is empty",
                ErrorKind::MalformedRecord,
            ));
        }
        Ok(self.index.write_with(|index| index.insert(parcel)))
    }

    /// Parcels for `destination`, lightest first.
    pub fn list(&self, destination: &str) -> ParcelResult<Vec<Parcel>> {
        self.with_tree(destination, query::list)
    }

    /// Parcels for `destination` strictly heavier or lighter than a threshold.
    pub fn list_filtered(
        &self,
        destination: &str,
        filter: WeightFilter,
    ) -> ParcelResult<Vec<Parcel>> {
        self.with_tree(destination, |tree, key| {
            query::list_filtered(tree, key, filter)
        })
    }

    /// Total weight and value for `destination`.
    pub fn totals(&self, destination: &str) -> ParcelResult<Totals> {
        self.with_tree(destination, query::totals)
    }

    /// Cheapest and most expensive parcel; `None` when there is none.
    pub fn value_extremes(&self, destination: &str) -> ParcelResult<Option<Extremes>> {
        self.with_tree(destination, query::value_extremes)
    }

    /// Lightest and heaviest parcel; `None` when there is none.
    pub fn weight_extremes(&self, destination: &str) -> ParcelResult<Option<Extremes>> {
        self.with_tree(destination, query::weight_extremes)
    }

    /// Number of parcels held.
    pub fn len(&self) -> ParcelResult<usize> {
        self.check_opened()?;
        Ok(self.index.read_with(DestinationIndex::len))
    }

    pub fn is_empty(&self) -> ParcelResult<bool> {
        self.check_opened()?;
        Ok(self.index.read_with(DestinationIndex::is_empty))
    }

    /// Every distinct destination held, sorted.
    pub fn destinations(&self) -> ParcelResult<Vec<String>> {
        self.check_opened()?;
        Ok(self.index.read_with(DestinationIndex::destinations))
    }

    /// Bucket `destination` maps to once normalized.
    pub fn bucket_for(&self, destination: &str) -> ParcelResult<usize> {
        self.check_opened()?;
        let key = normalize_destination(destination);
        Ok(self.index.read_with(|index| index.bucket_for(&key)))
    }

    /// Releases every node and closes the catalog.
    ///
    /// Returns how many parcels were released.
    ///
    /// # Errors
    ///
    /// `CatalogClosed` when called a second time.
    pub fn close(&self) -> ParcelResult<usize> {
        if self.closed.swap(true, Ordering::AcqRel) {
            log::error!("Parcel catalog is already closed");
            return Err(ParcelError::new(
                "Parcel catalog is already closed",
                ErrorKind::CatalogClosed,
            ));
        }
        let released = self.index.write_with(DestinationIndex::release);
        log::info!("Parcel catalog closed, {} parcels released", released);
        Ok(released)
    }

    fn with_tree<R>(
        &self,
        destination: &str,
        run: impl FnOnce(Option<&WeightTree>, &str) -> R,
    ) -> ParcelResult<R> {
        self.check_opened()?;
        let key = normalize_destination(destination);
        Ok(self
            .index
            .read_with(|index| run(index.tree_for(&key), &key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn catalog_with(source: &str) -> ParcelCatalog {
        let catalog = ParcelCatalog::builder().open().unwrap();
        catalog.load_reader(Cursor::new(source.to_string())).unwrap();
        catalog
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = ParcelCatalog::builder().open().unwrap();
        assert!(catalog.is_empty().unwrap());
        assert_eq!(catalog.len().unwrap(), 0);
        assert!(!catalog.is_closed());
    }

    #[test]
    fn test_debug_shows_settings_not_contents() {
        let catalog = catalog_with("canada, 500, 25.50\n");
        let formatted = format!("{:?}", catalog);
        assert!(formatted.contains("table_size: 127"));
        assert!(formatted.contains("closed: false"));
        assert!(!formatted.contains("canada"));
    }

    #[test]
    fn test_queries_normalize_destination() {
        let catalog = catalog_with("Canada, 500, 25.50\n");
        assert_eq!(catalog.list("CANADA").unwrap().len(), 1);
        assert_eq!(catalog.list("  canada ").unwrap().len(), 1);
        assert_eq!(
            catalog.bucket_for("Canada").unwrap(),
            catalog.bucket_for("canada").unwrap()
        );
    }

    #[test]
    fn test_totals_over_three_parcels() {
        let catalog = catalog_with("canada, 300, 30\ncanada, 200, 20\ncanada, 500, 50\n");
        let totals = catalog.totals("canada").unwrap();
        assert_eq!(totals.weight(), 1000);
        assert!((totals.value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_list_filtered_through_catalog() {
        let catalog = catalog_with("canada, 300, 30\ncanada, 200, 20\ncanada, 500, 50\n");
        let heavier = catalog
            .list_filtered("canada", WeightFilter::Heavier(200))
            .unwrap();
        assert_eq!(heavier.iter().map(Parcel::weight).collect::<Vec<_>>(), vec![300, 500]);
    }

    #[test]
    fn test_extremes_through_catalog() {
        let catalog = catalog_with("canada, 300, 80\ncanada, 200, 20\ncanada, 500, 50\n");
        let by_value = catalog.value_extremes("canada").unwrap().unwrap();
        assert_eq!(by_value.lowest().value(), 20.0);
        assert_eq!(by_value.highest().value(), 80.0);
        let by_weight = catalog.weight_extremes("canada").unwrap().unwrap();
        assert_eq!(by_weight.lowest().weight(), 200);
        assert_eq!(by_weight.highest().weight(), 500);
        assert!(catalog.value_extremes("peru").unwrap().is_none());
    }

    #[test]
    fn test_insert_direct() {
        let catalog = ParcelCatalog::builder().open().unwrap();
        assert_eq!(
            catalog.insert(Parcel::new("Peru", 400, 40.0)).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            catalog.insert(Parcel::new("peru", 400, 41.0)).unwrap(),
            InsertOutcome::DuplicateWeight
        );
        assert_eq!(catalog.destinations().unwrap(), vec!["peru"]);
    }

    #[test]
    fn test_insert_rejects_empty_destination() {
        let catalog = ParcelCatalog::builder().open().unwrap();
        let err = catalog.insert(Parcel::new("   ", 400, 40.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        assert!(catalog.is_empty().unwrap());
    }

    #[test]
    fn test_clones_share_state() {
        let catalog = catalog_with("canada, 500, 25.50\n");
        let other = catalog.clone();
        other.insert(Parcel::new("canada", 600, 30.0)).unwrap();
        assert_eq!(catalog.len().unwrap(), 2);
    }

    #[test]
    fn test_close_releases_and_blocks_further_use() {
        let catalog = catalog_with("canada, 300, 30\nmexico, 200, 20\n");
        assert_eq!(catalog.close().unwrap(), 2);
        assert!(catalog.is_closed());
        assert_eq!(catalog.list("canada").unwrap_err().kind(), ErrorKind::CatalogClosed);
        assert_eq!(
            catalog.load_reader(Cursor::new("canada, 300, 30\n")).unwrap_err().kind(),
            ErrorKind::CatalogClosed
        );
        assert_eq!(
            catalog.bucket_for("canada").unwrap_err().kind(),
            ErrorKind::CatalogClosed
        );
        assert_eq!(catalog.close().unwrap_err().kind(), ErrorKind::CatalogClosed);
    }

    #[test]
    fn test_missing_file_leaves_catalog_usable() {
        let catalog = ParcelCatalog::builder().open().unwrap();
        assert!(catalog.load_file("/no/such/dir/parcels.txt").is_err());
        assert!(catalog.is_empty().unwrap());
        assert!(catalog.list("canada").unwrap().is_empty());
        assert!(catalog.weight_extremes("canada").unwrap().is_none());
    }
}
