//! Line-level parsing of the flat parcel file.

mod record_parser;

pub use record_parser::*;
