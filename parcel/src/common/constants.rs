// index constants
pub const HASH_TABLE_SIZE: usize = 127;
pub const DJB2_SEED: u32 = 5381;

// record constants
pub const MIN_WEIGHT: u32 = 100;
pub const MAX_WEIGHT: u32 = 50_000;
pub const MIN_VALUE: f64 = 10.00;
pub const MAX_VALUE: f64 = 2000.00;
pub const MAX_DESTINATION_LEN: usize = 99;
pub const FIELD_DELIMITER: char = ',';
pub const COMMENT_PREFIX: char = '#';

// Compile-time assertion for weight bounds
const _: () = {
    const _: [(); 1] = [(); (MIN_WEIGHT < MAX_WEIGHT) as usize];
};

pub const PARCEL_VERSION: &str = env!("CARGO_PKG_VERSION");
