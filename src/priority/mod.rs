//! Job priority scale.
//!
//! Jobs carry a coarse [`JobPriorityLevel`] and a fine-grained expanded
//! priority on the integer scale `[0, 4000]`. Each level owns a 1000-wide
//! bucket of that scale, except `Highest`, which is the single value 4000.
//!
//! # Key Components
//!
//! - **Scale functions**: [`level_of`], [`base_value_of`],
//!   [`ceiling_of_bucket`] for level/bucket arithmetic
//! - **Text**: [`format`] and [`try_parse`] for the `Level+N` / `Level-N`
//!   notation used on command lines and in templates
//! - **Values**: [`ExpandedPriority`], an always-in-range wrapper
//! - **Configuration**: [`PriorityBounds`], a template's allowed window
//!
//! # Error handling
//!
//! [`format`] treats an out-of-range value as a caller bug and returns
//! [`PriorityError::OutOfRange`](crate::error::PriorityError::OutOfRange).
//! [`try_parse`] treats its input as untrusted and returns `None` on any
//! failure.

mod config;
mod scale;
mod types;

pub use config::PriorityBounds;
pub use scale::{
    base_value_of, ceiling_of_bucket, format, is_valid, level_of, try_parse, BUCKET_WIDTH,
    MAX_EXPANDED, MIN_EXPANDED,
};
pub use types::{ExpandedPriority, JobPriorityLevel};
