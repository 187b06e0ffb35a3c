//! Bulk loading of the flat parcel file into a destination index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::catalog_config::CatalogConfig;
use crate::errors::{ErrorKind, ParcelError, ParcelResult};
use crate::index::{DestinationIndex, InsertOutcome};
use crate::parser::RecordParser;

/// A line the loader refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    line_number: usize,
    kind: ErrorKind,
    message: String,
}

impl SkippedRecord {
    /// One-based line number in the source.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// What a load did with each line of its source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    lines_read: usize,
    inserted: usize,
    duplicates: usize,
    skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Parcels that now live in the index.
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Valid parcels dropped because their bucket already held that weight.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Malformed and out-of-range lines, in source order.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Feeds source lines through a [`RecordParser`] into a [`DestinationIndex`].
///
/// Bad lines never stop a load: each is logged and recorded in the
/// [`LoadReport`], then skipped. Only I/O failures end a load early, and
/// whatever was inserted before the failure stays in the index.
pub struct CatalogLoader<'a> {
    parser: RecordParser,
    index: &'a mut DestinationIndex,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(config: &CatalogConfig, index: &'a mut DestinationIndex) -> Self {
        CatalogLoader {
            parser: RecordParser::new(config.clone()),
            index,
        }
    }

    /// Loads every record of the file at `path`.
    ///
    /// # Errors
    ///
    /// `FileNotFound`, `PermissionDenied` or `IOError` when the file cannot be
    /// opened or read.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> ParcelResult<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            let cause = ParcelError::from(e);
            log::error!("Cannot open parcel file {}: {}", path.display(), cause);
            ParcelError::new_with_cause(
                &format!("Cannot open parcel file {}", path.display()),
                cause.kind(),
                cause,
            )
        })?;
        log::info!("Loading parcels from {}", path.display());
        self.load_reader(BufReader::new(file))
    }

    /// Loads every record readable from `reader`.
    ///
    /// Lines are split on `\n`, a trailing `\r` is ignored and invalid UTF-8 is
    /// replaced rather than rejected, so one damaged line cannot abort a load.
    ///
    /// # Errors
    ///
    /// `IOError` when reading fails.
    pub fn load_reader<R: BufRead>(&mut self, mut reader: R) -> ParcelResult<LoadReport> {
        let mut report = LoadReport::default();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            report.lines_read += 1;
            let line = String::from_utf8_lossy(&buffer);
            self.load_line(report.lines_read, &line, &mut report);
        }

        log::info!(
            "Loaded {} parcels from {} lines ({} duplicate weights dropped, {} lines skipped)",
            report.inserted,
            report.lines_read,
            report.duplicates,
            report.skipped.len()
        );
        Ok(report)
    }

    fn load_line(&mut self, line_number: usize, line: &str, report: &mut LoadReport) {
        if RecordParser::is_skippable(line) {
            return;
        }

        match self.parser.parse(line) {
            Ok(parcel) => {
                let weight = parcel.weight();
                match self.index.insert(parcel) {
                    InsertOutcome::Inserted => report.inserted += 1,
                    InsertOutcome::DuplicateWeight => {
                        log::debug!(
                            "Line {}: bucket already holds a {} g parcel, record dropped",
                            line_number,
                            weight
                        );
                        report.duplicates += 1;
                    }
                }
            }
            Err(e) => {
                log::warn!("Line {}: {} ({}), record skipped", line_number, e, e.kind());
                report.skipped.push(SkippedRecord {
                    line_number,
                    kind: e.kind(),
                    message: e.message().to_string(),
                });
            }
        }
    }
}
