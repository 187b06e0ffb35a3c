//! Parcel Benchmark Library
//!
//! Data generation and catalog setup shared by the criterion benches.

pub mod data_gen;
