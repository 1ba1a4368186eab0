//! Ordering attributes, sort directions, and single ordering keys.

use std::fmt;

use crate::error::OrderingError;

/// Mask selecting the attribute code from a key byte.
pub const ATTRIBUTE_MASK: u8 = 0x7f;

/// Mask selecting the direction bit from a key byte.
pub const DIRECTION_MASK: u8 = 0x80;

/// A node resource that job placement can be ordered by.
///
/// `None` is the zero code used for empty byte slots; it never appears in a
/// valid [`OrderingKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OrderingAttribute {
    None = 0,
    Memory = 1,
    Cores = 2,
}

impl OrderingAttribute {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            OrderingAttribute::None => "None",
            OrderingAttribute::Memory => "Memory",
            OrderingAttribute::Cores => "Cores",
        }
    }

    /// Looks up an orderable attribute by name, ignoring ASCII case.
    ///
    /// `"None"` is not orderable and yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        [OrderingAttribute::Memory, OrderingAttribute::Cores]
            .into_iter()
            .find(|attribute| attribute.name().eq_ignore_ascii_case(name))
    }
}

impl TryFrom<u8> for OrderingAttribute {
    type Error = OrderingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OrderingAttribute::None),
            1 => Ok(OrderingAttribute::Memory),
            2 => Ok(OrderingAttribute::Cores),
            other => Err(OrderingError::UnknownAttribute(other)),
        }
    }
}

impl fmt::Display for OrderingAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort direction, stored in the high bit of a key byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SortDirection {
    Descending = 0,
    Ascending = 0x80,
}

impl SortDirection {
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Direction encoded in the high bit of `byte`; other bits are ignored.
    pub fn from_byte(byte: u8) -> Self {
        if byte & DIRECTION_MASK != 0 {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// One (attribute, direction) ordering preference.
///
/// Only four keys are valid, available as the associated constants and
/// through [`OrderingKey::CANONICAL`]. Construction goes through
/// [`OrderingKey::create`] or [`OrderingKey::from_byte`], both of which
/// reject anything else. Equality is structural.
///
/// # Examples
///
/// ```
/// use u_jobprop::ordering::{OrderingAttribute, OrderingKey, SortDirection};
///
/// let key = OrderingKey::create(OrderingAttribute::Memory, SortDirection::Ascending).unwrap();
/// assert_eq!(key, OrderingKey::MEMORY_ASC);
/// assert_eq!(key.to_byte(), 0x81);
/// assert!(OrderingKey::from_byte(0x00).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct OrderingKey {
    attribute: OrderingAttribute,
    direction: SortDirection,
}

static CANONICAL_KEYS: [OrderingKey; 4] = OrderingKey::CANONICAL;

impl OrderingKey {
    pub const MEMORY_ASC: Self = Self::canonical(OrderingAttribute::Memory, SortDirection::Ascending);
    pub const MEMORY_DESC: Self = Self::canonical(OrderingAttribute::Memory, SortDirection::Descending);
    pub const CORES_ASC: Self = Self::canonical(OrderingAttribute::Cores, SortDirection::Ascending);
    pub const CORES_DESC: Self = Self::canonical(OrderingAttribute::Cores, SortDirection::Descending);

    /// Every valid key.
    pub const CANONICAL: [Self; 4] = [
        Self::MEMORY_ASC,
        Self::MEMORY_DESC,
        Self::CORES_ASC,
        Self::CORES_DESC,
    ];

    const fn canonical(attribute: OrderingAttribute, direction: SortDirection) -> Self {
        Self {
            attribute,
            direction,
        }
    }

    /// Returns the canonical key for `(attribute, direction)`.
    ///
    /// # Errors
    /// [`OrderingError::InvalidKey`] for any attribute other than `Memory`
    /// or `Cores`.
    pub fn create(
        attribute: OrderingAttribute,
        direction: SortDirection,
    ) -> Result<Self, OrderingError> {
        CANONICAL_KEYS
            .iter()
            .find(|key| key.attribute == attribute && key.direction == direction)
            .copied()
            .ok_or(OrderingError::InvalidKey {
                attribute,
                direction,
            })
    }

    /// Decodes a key byte.
    ///
    /// # Errors
    /// [`OrderingError::InvalidByte`] unless `byte` is one of `0x01`,
    /// `0x81`, `0x02`, `0x82`.
    pub fn from_byte(byte: u8) -> Result<Self, OrderingError> {
        CANONICAL_KEYS
            .iter()
            .find(|key| key.to_byte() == byte)
            .copied()
            .ok_or(OrderingError::InvalidByte(byte))
    }

    /// Low 7 bits: attribute code; bit 7: direction.
    pub fn to_byte(self) -> u8 {
        self.attribute.code() | self.direction.bit()
    }

    pub fn attribute(self) -> OrderingAttribute {
        self.attribute
    }

    pub fn direction(self) -> SortDirection {
        self.direction
    }

    pub fn is_ascending(self) -> bool {
        self.direction == SortDirection::Ascending
    }
}

impl TryFrom<u8> for OrderingKey {
    type Error = OrderingError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte)
    }
}

impl From<OrderingKey> for u8 {
    fn from(key: OrderingKey) -> Self {
        key.to_byte()
    }
}

/// `-Name` for ascending, `Name` for descending.
impl fmt::Display for OrderingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ascending() {
            f.write_str("-")?;
        }
        f.write_str(self.attribute.name())
    }
}
