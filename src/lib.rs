//! Job priority and resource-ordering codecs for scheduler store properties.
//!
//! A scheduler's property catalog exposes two job properties as plain
//! integers whose structure only this crate knows:
//!
//! - **`ExpandedPriority`** ([`priority`]): a value in `[0, 4000]` refining
//!   the five coarse priority levels, written as `"Normal+100"`,
//!   `"AboveNormal-900"`, `"322"` or `"Highest"`.
//! - **`OrderBy`** ([`ordering`]): up to four (resource, direction) node
//!   ordering keys packed into one `i32`, written as `"-Memory,Cores"`.
//!
//! Both modules are pure and synchronous, with no dependency on each other.
//! [`batch`] decodes whole property columns, in parallel with the
//! `parallel` feature.
//!
//! # Features
//!
//! - `serde`: serializes values in their persisted integer form
//! - `parallel`: rayon-backed column decoding
//! - `wasm`: `wasm-bindgen` exports for browser front ends
//!
//! # Architecture
//!
//! This crate sits below the scheduler's filter, sort and template layers.
//! It knows nothing about property catalogs, persistence, or transport;
//! those belong to consumers.

pub mod batch;
pub mod error;
pub mod ordering;
pub mod priority;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{OrderingError, ParseError, PriorityError};
pub use ordering::{OrderingKey, OrderingKeyList};
pub use priority::{ExpandedPriority, JobPriorityLevel};
