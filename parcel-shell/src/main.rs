mod cli;
mod render;
mod shell;

use clap::Parser;
use cli::Cli;
use log::LevelFilter;
use parcel::ParcelCatalog;
use shell::Shell;
use std::io;

fn init_logging(cli: &Cli) {
    // --quiet → off, --verbose → debug, otherwise RUST_LOG with a warn default
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(LevelFilter::Off);
    } else if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    log::debug!("parcel {}", parcel::PARCEL_VERSION);

    let catalog = ParcelCatalog::builder()
        .table_size(cli.table_size)
        .max_destination_len(cli.max_destination_len)
        .open()?;

    match catalog.load_file(&cli.file) {
        Ok(report) => {
            println!(
                "Loaded {} parcels from {}.",
                report.inserted(),
                cli.file.display()
            );
            for skipped in report.skipped() {
                eprintln!(
                    "Skipped line {}: {}",
                    skipped.line_number(),
                    skipped.message()
                );
            }
        }
        Err(e) => {
            // keep going with an empty catalog
            eprintln!("Error: {}. Continuing with an empty catalog.", e);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(catalog, stdin.lock(), stdout.lock()).run()
}
