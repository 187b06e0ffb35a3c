use fake::faker::address::en::CityName;
use fake::Fake;
use parcel::errors::ParcelResult;
use parcel::{LoadReport, ParcelCatalog};
use rand::Rng;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A catalog loaded from a parcel file living in a temporary directory.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    _dir: TempDir,
    path: PathBuf,
    catalog: ParcelCatalog,
    report: LoadReport,
}

impl TestContext {
    pub fn catalog(&self) -> &ParcelCatalog {
        &self.catalog
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes `contents` to `parcels.txt` in a fresh temporary directory.
pub fn write_source(contents: &str) -> ParcelResult<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("parcels.txt");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok((dir, path))
}

/// Opens a default catalog and loads `contents` into it from a real file.
pub fn create_test_context(contents: &str) -> ParcelResult<TestContext> {
    create_test_context_with(contents, ParcelCatalog::builder().open()?)
}

/// Loads `contents` from a real file into an already opened catalog.
pub fn create_test_context_with(
    contents: &str,
    catalog: ParcelCatalog,
) -> ParcelResult<TestContext> {
    let (dir, path) = write_source(contents)?;
    let report = catalog.load_file(&path)?;
    Ok(TestContext {
        _dir: dir,
        path,
        catalog,
        report,
    })
}

/// Closes the catalog, returning the number of parcels released.
pub fn cleanup(ctx: TestContext) -> ParcelResult<usize> {
    ctx.catalog.close()
}

/// A generated record line along with the values written into it.
#[derive(Debug, Clone)]
pub struct GeneratedRecord {
    pub destination: String,
    pub weight: u32,
    pub value: f64,
}

impl GeneratedRecord {
    pub fn line(&self) -> String {
        format!("{}, {}, {:.2}", self.destination, self.weight, self.value)
    }
}

/// Generates `count` valid records spread across `destinations` city names.
///
/// Weights are unique across the whole batch, so no record is lost to a
/// bucket's duplicate-weight rule.
pub fn generate_records(count: usize, destinations: usize) -> Vec<GeneratedRecord> {
    let mut rng = rand::thread_rng();
    let cities = generate_cities(destinations);
    let mut used = HashSet::with_capacity(count);

    let mut records = Vec::with_capacity(count);
    while records.len() < count {
        let weight = rng.gen_range(100..=50_000u32);
        if !used.insert(weight) {
            continue;
        }
        let cents: u32 = rng.gen_range(1_000..=200_000);
        records.push(GeneratedRecord {
            destination: cities[rng.gen_range(0..cities.len())].clone(),
            weight,
            value: f64::from(cents) / 100.0,
        });
    }
    records
}

/// Renders records as file contents, one line each.
pub fn to_source(records: &[GeneratedRecord]) -> String {
    records
        .iter()
        .map(|r| r.line() + "\n")
        .collect()
}

fn generate_cities(count: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(count);
    let mut cities = Vec::with_capacity(count);
    while cities.len() < count {
        let city: String = CityName().fake();
        // stored form is lowercase; keep names distinct after folding
        let city = city.to_ascii_lowercase().replace(',', "");
        if seen.insert(city.clone()) {
            cities.push(city);
        }
    }
    cities
}
