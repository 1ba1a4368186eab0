//! Column decoding for persisted job properties.
//!
//! Filters and sorts over many jobs read `ExpandedPriority` and `OrderBy`
//! as raw integer columns. These helpers decode a whole column at once,
//! preserving input order. With the `parallel` feature, columns of at least
//! [`PARALLEL_THRESHOLD`] values are decoded with rayon.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::OrderingError;
use crate::ordering::OrderingKeyList;
use crate::priority::{level_of, JobPriorityLevel};

/// Columns shorter than this are always decoded on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Priority level of each expanded-priority value.
pub fn priority_levels(values: &[i32]) -> Vec<JobPriorityLevel> {
    map_column(values, |&value| level_of(value))
}

/// Decodes each `OrderBy` value; corrupt values yield their error in place.
pub fn decode_order_by(values: &[i32]) -> Vec<Result<OrderingKeyList, OrderingError>> {
    map_column(values, |&value| OrderingKeyList::from_i32(value))
}

/// Number of jobs at each priority level, indexed by level.
pub fn level_histogram(values: &[i32]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for level in priority_levels(values) {
        counts[level as usize] += 1;
    }
    counts
}

#[cfg(feature = "parallel")]
fn map_column<T, F>(values: &[i32], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&i32) -> T + Sync + Send,
{
    if values.len() >= PARALLEL_THRESHOLD {
        values.par_iter().map(f).collect()
    } else {
        values.iter().map(f).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_column<T, F>(values: &[i32], f: F) -> Vec<T>
where
    F: Fn(&i32) -> T,
{
    values.iter().map(f).collect()
}
