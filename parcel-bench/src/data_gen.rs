//! Data generators for benchmarks

use fake::faker::address::en::CityName;
use fake::Fake;
use parcel::errors::ParcelResult;
use parcel::ParcelCatalog;
use rand::Rng;
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Routes catalog logging through env_logger once per bench binary.
///
/// Defaults to `error` so per-record loader output does not skew timings.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("error");
        let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
    });
}

/// Generate `count` distinct lowercase city names.
pub fn generate_destinations(count: usize) -> Vec<String> {
    let mut destinations: Vec<String> = Vec::with_capacity(count);
    while destinations.len() < count {
        let city: String = CityName().fake();
        let city = city.to_ascii_lowercase().replace(',', "");
        if !destinations.contains(&city) {
            destinations.push(city);
        }
    }
    log::debug!("Generated {} destinations", destinations.len());
    destinations
}

/// Generate parcel file contents with `count` records over `destinations`.
///
/// Weights are random, so a few records may collide and be dropped on load.
pub fn generate_source(count: usize, destinations: &[String]) -> String {
    let mut rng = rand::thread_rng();
    let mut source = String::with_capacity(count * 32);
    for _ in 0..count {
        let destination = &destinations[rng.gen_range(0..destinations.len())];
        let weight: u32 = rng.gen_range(100..=50_000);
        let value: f64 = rng.gen_range(10.0..=2000.0);
        source.push_str(&format!("{}, {}, {:.2}\n", destination, weight, value));
    }
    source
}

/// Open a catalog and load `source` into it.
pub fn loaded_catalog(source: &str) -> ParcelResult<ParcelCatalog> {
    let catalog = ParcelCatalog::builder().open()?;
    let report = catalog.load_reader(source.as_bytes())?;
    log::info!(
        "Bench catalog holds {} parcels ({} duplicate weights dropped)",
        report.inserted(),
        report.duplicates()
    );
    Ok(catalog)
}
