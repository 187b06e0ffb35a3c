use clap::Parser;
use parcel::{HASH_TABLE_SIZE, MAX_DESTINATION_LEN};
use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "couriers.txt";

#[derive(Parser, Debug)]
#[command(name = "parcel-shell", about = "Query a parcel catalog from a menu", version)]
pub struct Cli {
    /// Parcel file to load, one `destination, weight, value` record per line
    #[arg(long, short = 'f', default_value = DEFAULT_SOURCE)]
    pub file: PathBuf,

    /// Number of buckets in the destination index
    #[arg(long, default_value_t = HASH_TABLE_SIZE)]
    pub table_size: usize,

    /// Longest destination name kept, in bytes
    #[arg(long, default_value_t = MAX_DESTINATION_LEN)]
    pub max_destination_len: usize,

    /// Log load details to stderr
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["parcel-shell"]);
        assert_eq!(cli.file, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(cli.table_size, 127);
        assert_eq!(cli.max_destination_len, 99);
        assert!(!cli.verbose && !cli.quiet);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["parcel-shell", "-f", "data.txt", "--table-size", "31", "-v"]);
        assert_eq!(cli.file, PathBuf::from("data.txt"));
        assert_eq!(cli.table_size, 31);
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["parcel-shell", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
