//! Read-only analytics over one destination's parcels.
//!
//! Every query takes the tree of the destination's bucket (absent when the
//! bucket is empty) and a normalized destination. Each walks the whole tree in
//! order and keeps exact destination matches only, since colliding
//! destinations share a tree.
//!
//! - [`list`]: all parcels, ascending weight
//! - [`list_filtered`]: parcels strictly heavier or lighter than a threshold
//! - [`totals`]: summed weight and value
//! - [`value_extremes`]: cheapest and most expensive parcel
//! - [`weight_extremes`]: lightest and heaviest parcel
//!
//! Queries never fail. An empty match set yields an empty list, zero totals,
//! or `None` extremes.

mod engine;
mod results;

pub use engine::*;
pub use results::*;
