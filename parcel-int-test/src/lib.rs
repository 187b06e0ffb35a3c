//! Shared fixtures for the parcel integration tests.

pub mod test_util;
