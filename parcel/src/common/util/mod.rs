mod destination_utils;
mod type_utils;

pub use destination_utils::*;
pub use type_utils::*;
