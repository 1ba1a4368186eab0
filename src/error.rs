//! Error types for priority and ordering-key operations.
//!
//! Two lanes are kept apart:
//!
//! - **Contract errors** ([`PriorityError`], [`OrderingError`]) come back from
//!   operations whose inputs the caller is expected to have checked
//!   (formatting, key construction, list building).
//! - **Parse failures** on untrusted text are reported as `None` by the
//!   `try_parse` functions. [`ParseError`] exists only so the `FromStr`
//!   impls have an error type to return.

use thiserror::Error;

use crate::ordering::{OrderingAttribute, SortDirection};

/// Errors raised by the expanded-priority scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriorityError {
    #[error("expanded priority {0} is outside [0, 4000]")]
    OutOfRange(i32),

    #[error("expanded priority {value} is outside the allowed window [{min}, {max}]")]
    OutsideBounds { value: i32, min: i32, max: i32 },
}

/// Errors raised while building or decoding ordering keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("byte {0:#04x} is not a valid ordering key")]
    InvalidByte(u8),

    #[error("({attribute:?}, {direction:?}) is not a valid ordering key")]
    InvalidKey {
        attribute: OrderingAttribute,
        direction: SortDirection,
    },

    #[error("ordering key list already holds {} keys", crate::ordering::MAX_KEYS)]
    ListFull,

    #[error("ordering key list already contains {0:?}")]
    DuplicateAttribute(OrderingAttribute),

    #[error("attribute code {0:#04x} does not name an ordering attribute")]
    UnknownAttribute(u8),
}

impl OrderingError {
    /// Whether the error rejects an argument (bad byte or key) rather than
    /// an operation on a list in its current state.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            OrderingError::InvalidByte(_)
                | OrderingError::InvalidKey { .. }
                | OrderingError::UnknownAttribute(_)
        )
    }
}

/// Text could not be parsed into the named type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {input:?} as {target}")]
pub struct ParseError {
    /// Name of the type being parsed.
    pub target: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseError {
    pub(crate) fn new(target: &'static str, input: &str) -> Self {
        Self {
            target,
            input: input.to_owned(),
        }
    }
}
