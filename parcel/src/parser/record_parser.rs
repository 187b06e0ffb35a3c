use crate::catalog_config::CatalogConfig;
use crate::common::truncate_destination;
use crate::errors::{ErrorKind, ParcelError, ParcelResult};
use crate::record::Parcel;
use crate::{COMMENT_PREFIX, FIELD_DELIMITER};

/// Turns `destination, weight, value` lines into validated parcels.
///
/// The destination is everything before the first comma, trimmed, cut to the
/// configured byte limit and lowercased. Weight must parse as an unsigned
/// integer and value as a float; a missing field or an unparsable number is a
/// [`ErrorKind::MalformedRecord`]. Numbers outside the configured bounds give
/// [`ErrorKind::OutOfRange`].
#[derive(Clone, Debug, Default)]
pub struct RecordParser {
    config: CatalogConfig,
}

impl RecordParser {
    pub fn new(config: CatalogConfig) -> Self {
        RecordParser { config }
    }

    /// Blank lines and `#` comments carry no record and are not errors.
    pub fn is_skippable(line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
    }

    /// Parses and validates one line.
    ///
    /// # Errors
    ///
    /// `MalformedRecord` for a wrong field count, empty destination or bad
    /// number; `OutOfRange` for a weight or value outside the bounds.
    pub fn parse(&self, line: &str) -> ParcelResult<Parcel> {
        let mut fields = line.splitn(3, FIELD_DELIMITER);
        let (destination, weight, value) = match (fields.next(), fields.next(), fields.next()) {
            (Some(destination), Some(weight), Some(value)) => (destination, weight, value),
            _ => {
                return Err(ParcelError::new(
                    &format!("Expected 3 comma-separated fields in '{}'", line.trim()),
                    ErrorKind::MalformedRecord,
                ))
            }
        };

        let destination =
            truncate_destination(destination.trim(), self.config.max_destination_len());
        if destination.is_empty() {
            return Err(ParcelError::new(
                "Destination is empty",
                ErrorKind::MalformedRecord,
            ));
        }

        let weight: i64 = weight.trim().parse().map_err(|e| {
            ParcelError::new_with_cause(
                &format!("Weight '{}' is not a whole number", weight.trim()),
                ErrorKind::MalformedRecord,
                ParcelError::from(e),
            )
        })?;
        let value: f64 = value.trim().parse().map_err(|e| {
            ParcelError::new_with_cause(
                &format!("Value '{}' is not a number", value.trim()),
                ErrorKind::MalformedRecord,
                ParcelError::from(e),
            )
        })?;

        // negative weights are range errors, not parse errors
        let Some(weight) = u32::try_from(weight)
            .ok()
            .filter(|weight| self.config.accepts_weight(*weight))
        else {
            let range = self.config.weight_range();
            return Err(ParcelError::new(
                &format!(
                    "Weight {} g outside {}..={} g",
                    weight,
                    range.start(),
                    range.end()
                ),
                ErrorKind::OutOfRange,
            ));
        };
        if !self.config.accepts_value(value) {
            let range = self.config.value_range();
            return Err(ParcelError::new(
                &format!(
                    "Value {:.2} outside {:.2}..={:.2}",
                    value,
                    range.start(),
                    range.end()
                ),
                ErrorKind::OutOfRange,
            ));
        }

        Ok(Parcel::new(destination, weight, value))
    }
}
