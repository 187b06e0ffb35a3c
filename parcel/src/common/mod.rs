//! Shared constants, lock helpers and string utilities.

mod constants;
mod util;

pub use constants::*;
pub use util::*;
