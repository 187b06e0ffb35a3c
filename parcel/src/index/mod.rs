//! Destination index: a hash table of weight-ordered trees.
//!
//! Parcels are routed to one of a fixed number of buckets by a djb2 hash of
//! their normalized destination. Each bucket holds a [`WeightTree`], an
//! unbalanced binary search tree keyed by parcel weight. Distinct destinations
//! can collide into one bucket and then share its tree, including its
//! weight-uniqueness rule.
//!
//! ```rust
//! use parcel::index::{DestinationIndex, InsertOutcome};
//! use parcel::Parcel;
//!
//! let mut index = DestinationIndex::new();
//! assert_eq!(index.insert(Parcel::new("canada", 500, 25.5)), InsertOutcome::Inserted);
//! let weights: Vec<u32> = index
//!     .tree_for("canada")
//!     .map(|tree| tree.in_order().map(|p| p.weight()).collect())
//!     .unwrap_or_default();
//! assert_eq!(weights, vec![500]);
//! ```

mod destination_index;
mod weight_tree;

pub use destination_index::*;
pub use weight_tree::{InOrder, InsertOutcome, WeightTree};
