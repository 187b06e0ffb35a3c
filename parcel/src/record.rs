//! The parcel record stored in the catalog.

use std::fmt::{Display, Formatter};

use crate::common::normalize_destination;
#[cfg(feature = "serde")]
use crate::errors::{ErrorKind, ParcelError};

/// One parcel: where it goes, what it weighs in grams and what it is worth.
///
/// A `Parcel` is immutable once built. Its destination is always held in
/// normalized (trimmed, ASCII-lowercased) form, so equality checks against a
/// normalized query key are exact byte comparisons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ParcelFields")
)]
pub struct Parcel {
    destination: String,
    weight: u32,
    value: f64,
}

impl Parcel {
    /// Builds a parcel, normalizing the destination.
    ///
    /// No range checks happen here; the record parser enforces the configured
    /// bounds before anything reaches the index.
    pub fn new(destination: &str, weight: u32, value: f64) -> Self {
        Parcel {
            destination: normalize_destination(destination),
            weight,
            value,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Drops the owned destination string, leaving an empty one behind.
    pub(crate) fn release_destination(&mut self) {
        self.destination = String::new();
    }
}

// Deserialized form, checked before it becomes a `Parcel`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ParcelFields {
    destination: String,
    weight: u32,
    value: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ParcelFields> for Parcel {
    type Error = ParcelError;

    fn try_from(fields: ParcelFields) -> Result<Self, Self::Error> {
        let parcel = Parcel::new(&fields.destination, fields.weight, fields.value);
        if parcel.destination.is_empty() {
            return Err(ParcelError::new(
                "Destination is empty",
                ErrorKind::MalformedRecord,
            ));
        }
        Ok(parcel)
    }
}

impl Display for Parcel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} g, {:.2}",
            self.destination, self.weight, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_destination() {
        let parcel = Parcel::new(" Canada ", 500, 25.5);
        assert_eq!(parcel.destination(), "canada");
        assert_eq!(parcel.weight(), 500);
        assert_eq!(parcel.value(), 25.5);
    }

    #[test]
    fn test_display() {
        let parcel = Parcel::new("canada", 500, 25.5);
        assert_eq!(parcel.to_string(), "canada, 500 g, 25.50");
    }

    #[test]
    fn test_release_destination_frees_string() {
        let mut parcel = Parcel::new("canada", 500, 25.5);
        parcel.release_destination();
        assert!(parcel.destination().is_empty());
        assert_eq!(parcel.destination.capacity(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let parcel = Parcel::new("canada", 500, 25.5);
        let json = serde_json::to_string(&parcel).unwrap();
        assert_eq!(json, r#"{"destination":"canada","weight":500,"value":25.5}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_normalizes_destination() {
        let json = r#"{"destination":"  CANADA ","weight":500,"value":25.5}"#;
        let parcel: Parcel = serde_json::from_str(json).unwrap();
        assert_eq!(parcel.destination(), "canada");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_empty_destination() {
        let json = r#"{"destination":"   ","weight":500,"value":25.5}"#;
        let err = serde_json::from_str::<Parcel>(json).unwrap_err();
        assert!(err.to_string().contains("Destination is empty"));
    }
}
