use std::fmt::{Display, Formatter};

use crate::record::Parcel;

/// Strict weight threshold for filtered listings.
///
/// There is deliberately no "equal to" variant: a parcel weighing exactly the
/// threshold matches neither direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightFilter {
    /// Keeps parcels with `weight > threshold`.
    Heavier(u32),
    /// Keeps parcels with `weight < threshold`.
    Lighter(u32),
}

impl WeightFilter {
    pub fn matches(&self, weight: u32) -> bool {
        match *self {
            WeightFilter::Heavier(threshold) => weight > threshold,
            WeightFilter::Lighter(threshold) => weight < threshold,
        }
    }

    pub fn threshold(&self) -> u32 {
        match *self {
            WeightFilter::Heavier(threshold) | WeightFilter::Lighter(threshold) => threshold,
        }
    }
}

impl Display for WeightFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightFilter::Heavier(threshold) => write!(f, "heavier than {} g", threshold),
            WeightFilter::Lighter(threshold) => write!(f, "lighter than {} g", threshold),
        }
    }
}

/// Summed load of one destination.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Totals {
    parcels: usize,
    weight: u64,
    value: f64,
}

impl Totals {
    pub(crate) fn add(&mut self, parcel: &Parcel) {
        self.parcels += 1;
        self.weight += u64::from(parcel.weight());
        self.value += parcel.value();
    }

    /// Number of parcels summed.
    pub fn parcels(&self) -> usize {
        self.parcels
    }

    /// Total weight in grams.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Total declared value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.parcels == 0
    }
}

/// The two ends of a destination's parcels along one field.
///
/// Only produced when at least one parcel matched, so both ends are real
/// parcels. With a single match `lowest` and `highest` are the same parcel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extremes {
    lowest: Parcel,
    highest: Parcel,
}

impl Extremes {
    pub(crate) fn new(lowest: Parcel, highest: Parcel) -> Self {
        Extremes { lowest, highest }
    }

    /// Cheapest or lightest parcel, depending on the query.
    pub fn lowest(&self) -> &Parcel {
        &self.lowest
    }

    /// Most expensive or heaviest parcel, depending on the query.
    pub fn highest(&self) -> &Parcel {
        &self.highest
    }
}
