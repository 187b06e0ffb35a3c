use itertools::Itertools;
use std::mem;

use super::{InsertOutcome, WeightTree};
use crate::{
    errors::{ErrorKind, ParcelError, ParcelResult},
    record::Parcel,
    DJB2_SEED, HASH_TABLE_SIZE,
};

/// djb2 over raw bytes: `hash = hash * 33 + byte`, wrapping at 32 bits.
///
/// Bytes are read as signed chars, so anything above `0x7f` adds a
/// sign-extended value.
#[inline]
pub fn djb2(bytes: &[u8]) -> u32 {
    bytes.iter().fold(DJB2_SEED, |hash, &byte| {
        hash.wrapping_mul(33).wrapping_add(byte as i8 as u32)
    })
}

/// Fixed-size hash table from normalized destination to a [`WeightTree`].
///
/// Destinations that hash to the same bucket share one tree. The index never
/// separates them; queries filter by exact destination instead.
#[derive(Debug, Clone)]
pub struct DestinationIndex {
    buckets: Vec<WeightTree>,
}

impl Default for DestinationIndex {
    fn default() -> Self {
        DestinationIndex {
            buckets: vec![WeightTree::new(); HASH_TABLE_SIZE],
        }
    }
}

impl DestinationIndex {
    /// Creates an index with the default 127 buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an index with `table_size` buckets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `table_size` is zero.
    pub fn with_table_size(table_size: usize) -> ParcelResult<Self> {
        if table_size == 0 {
            log::error!("Destination index needs at least one bucket");
            return Err(ParcelError::new(
                "Table size must be greater than zero",
                ErrorKind::InvalidConfiguration,
            ));
        }
        Ok(DestinationIndex {
            buckets: vec![WeightTree::new(); table_size],
        })
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Maps an already normalized destination to its bucket.
    ///
    /// Pure and deterministic. Case folding is the caller's job, so `"Canada"`
    /// and `"canada"` only share a bucket once both are normalized.
    pub fn bucket_for(&self, name: &str) -> usize {
        djb2(name.as_bytes()) as usize % self.buckets.len()
    }

    /// The tree in `bucket`, or `None` when the bucket is empty or out of range.
    pub fn get(&self, bucket: usize) -> Option<&WeightTree> {
        self.buckets.get(bucket).filter(|tree| !tree.is_empty())
    }

    /// Replaces the tree in `bucket`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when `bucket` is outside the table.
    pub fn set(&mut self, bucket: usize, tree: WeightTree) -> ParcelResult<WeightTree> {
        let table_size = self.buckets.len();
        match self.buckets.get_mut(bucket) {
            Some(slot) => Ok(mem::replace(slot, tree)),
            None => Err(ParcelError::new(
                &format!("Bucket {} outside table of {}", bucket, table_size),
                ErrorKind::InternalError,
            )),
        }
    }

    /// The tree a destination would live in.
    pub fn tree_for(&self, destination: &str) -> Option<&WeightTree> {
        self.get(self.bucket_for(destination))
    }

    /// Routes `parcel` to its bucket's tree.
    pub fn insert(&mut self, parcel: Parcel) -> InsertOutcome {
        let bucket = self.bucket_for(parcel.destination());
        self.buckets[bucket].insert(parcel)
    }

    /// Total parcels across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(WeightTree::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(WeightTree::is_empty)
    }

    /// Parcel count per bucket, in bucket order.
    pub fn bucket_sizes(&self) -> Vec<usize> {
        self.buckets.iter().map(WeightTree::len).collect()
    }

    /// Every distinct destination held, sorted.
    pub fn destinations(&self) -> Vec<String> {
        self.buckets
            .iter()
            .flat_map(|tree| tree.in_order())
            .map(|parcel| parcel.destination())
            .unique()
            .sorted()
            .map(str::to_string)
            .collect()
    }

    /// Releases every bucket's tree; returns the number of nodes released.
    pub fn release(&mut self) -> usize {
        self.buckets.iter_mut().map(WeightTree::release).sum()
    }
}
