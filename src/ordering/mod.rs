//! Resource-ordering preferences for node selection.
//!
//! A job can ask the scheduler to prefer nodes by memory or core count, in
//! either direction, with later keys breaking ties left by earlier ones.
//! The preference is persisted as the `OrderBy` job property: a single
//! `i32` holding up to four key bytes.
//!
//! # Encoding
//!
//! ```text
//! key byte:  bit 7 = direction (1 = ascending), bits 0-6 = attribute code
//! list:      key i -> little-endian byte i, unused bytes zero
//!
//! [-Memory, Cores] -> [0x81, 0x02, 0x00, 0x00] -> 641
//! ```
//!
//! # Key Components
//!
//! - [`OrderingKey`]: one (attribute, direction) pair; only four are valid
//! - [`OrderingKeyList`]: the ordered, attribute-unique list and its codecs
//!
//! # Error handling
//!
//! Building keys or lists from bad bytes or in a bad order returns an
//! [`OrderingError`](crate::error::OrderingError).
//! [`OrderingKeyList::try_parse`] treats its input as untrusted and returns
//! `None` on any failure.

mod list;
mod types;

pub use list::{OrderingKeyList, MAX_KEYS};
pub use types::{OrderingAttribute, OrderingKey, SortDirection, ATTRIBUTE_MASK, DIRECTION_MASK};
