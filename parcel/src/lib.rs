//! # Parcel - In-Memory Parcel Catalog
//!
//! Parcel loads `destination, weight, value` records from a flat file,
//! indexes them by destination and answers a fixed set of analytical queries
//! over one destination at a time.
//!
//! ## Key Features
//!
//! - **Destination index**: a 127-bucket djb2 hash table over normalized
//!   destination names
//! - **Weight-ordered trees**: each bucket holds an unbalanced binary search
//!   tree keyed by parcel weight
//! - **Queries**: list, list by weight threshold, totals, extremes by value
//!   and extremes by weight
//! - **Forgiving loader**: malformed and out-of-range lines are reported and
//!   skipped, never fatal
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use parcel::{ParcelCatalog, WeightFilter};
//!
//! let catalog = ParcelCatalog::builder().open()?;
//! let report = catalog.load_reader(Cursor::new("canada, 500, 25.50\ncanada, 900, 70.00\n"))?;
//! assert_eq!(report.inserted(), 2);
//!
//! let heavy = catalog.list_filtered("Canada", WeightFilter::Heavier(500))?;
//! assert_eq!(heavy.len(), 1);
//!
//! let totals = catalog.totals("canada")?;
//! assert_eq!(totals.weight(), 1400);
//!
//! catalog.close()?;
//! # Ok::<(), parcel::errors::ParcelError>(())
//! ```
//!
//! ## Collisions
//!
//! Destinations that hash to the same bucket share one tree, and a tree holds
//! at most one parcel per weight. A second parcel whose weight is already
//! present in its bucket is dropped, even when its destination differs.
//!
//! ## Module Organization
//!
//! - [`catalog`] - The catalog facade and its lifecycle
//! - [`catalog_builder`] - Builder for opening a catalog
//! - [`catalog_config`] - Table size and record bounds
//! - [`common`] - Constants, lock helpers and destination utilities
//! - [`errors`] - Error types and result definitions
//! - [`index`] - Destination hash table and weight-ordered trees
//! - [`loader`] - Bulk loading and load reports
//! - [`parser`] - Record line parsing and validation
//! - [`query`] - The five read-only queries
//! - [`record`] - The parcel record

pub mod catalog;
pub mod catalog_builder;
pub mod catalog_config;
pub mod common;
pub mod errors;
pub mod index;
pub mod loader;
pub mod parser;
pub mod query;
pub mod record;

pub use catalog::ParcelCatalog;
pub use common::*;
pub use index::InsertOutcome;
pub use loader::LoadReport;
pub use query::{Extremes, Totals, WeightFilter};
pub use record::Parcel;
