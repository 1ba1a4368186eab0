//! Ordered ordering-key lists and their persisted integer form.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::types::{OrderingAttribute, OrderingKey, SortDirection, ATTRIBUTE_MASK};
use crate::error::{OrderingError, ParseError};

/// Maximum number of keys in a list (one per byte of the encoded `i32`).
pub const MAX_KEYS: usize = 4;

/// An ordered list of up to four [`OrderingKey`]s, at most one per attribute.
///
/// This is the typed form of the `OrderBy` job property. The list is built
/// with [`add`](Self::add), which either appends or leaves the list
/// untouched. The persisted form is [`to_i32`](Self::to_i32): key `i` sits
/// in little-endian byte `i`, unused bytes are zero.
///
/// # Examples
///
/// ```
/// use u_jobprop::ordering::{OrderingKey, OrderingKeyList};
///
/// let mut list = OrderingKeyList::new();
/// list.add(OrderingKey::MEMORY_ASC)?.add(OrderingKey::CORES_DESC)?;
///
/// assert_eq!(list.to_i32(), 641);
/// assert_eq!(list.to_string(), "-Memory,Cores");
/// assert_eq!(OrderingKeyList::from_i32(641)?, list);
/// assert_eq!(OrderingKeyList::try_parse("-Memory,Cores"), Some(list));
/// # Ok::<(), u_jobprop::error::OrderingError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct OrderingKeyList {
    keys: Vec<OrderingKey>,
}

impl OrderingKeyList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            keys: Vec::with_capacity(MAX_KEYS),
        }
    }

    /// Builds a list by adding `keys` in order.
    pub fn from_keys(keys: impl IntoIterator<Item = OrderingKey>) -> Result<Self, OrderingError> {
        let mut list = Self::new();
        for key in keys {
            list.add(key)?;
        }
        Ok(list)
    }

    /// Appends `key`, returning the list for chaining.
    ///
    /// # Errors
    /// - [`OrderingError::ListFull`] if the list already holds four keys.
    /// - [`OrderingError::DuplicateAttribute`] if a key for the same
    ///   attribute is already present.
    ///
    /// The list is unchanged on error.
    pub fn add(&mut self, key: OrderingKey) -> Result<&mut Self, OrderingError> {
        if self.is_full() {
            debug!(%key, "ordering key list is full");
            return Err(OrderingError::ListFull);
        }
        if self.contains_attribute(key.attribute()) {
            debug!(%key, "ordering key list already has this attribute");
            return Err(OrderingError::DuplicateAttribute(key.attribute()));
        }
        self.keys.push(key);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.len() >= MAX_KEYS
    }

    pub fn get(&self, index: usize) -> Option<OrderingKey> {
        self.keys.get(index).copied()
    }

    pub fn as_slice(&self) -> &[OrderingKey] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderingKey> {
        self.keys.iter()
    }

    pub fn contains_attribute(&self, attribute: OrderingAttribute) -> bool {
        self.keys.iter().any(|key| key.attribute() == attribute)
    }

    /// Encodes the list as a little-endian `i32`, one key byte per position.
    pub fn to_i32(&self) -> i32 {
        let mut bytes = [0u8; MAX_KEYS];
        for (slot, key) in bytes.iter_mut().zip(&self.keys) {
            *slot = key.to_byte();
        }
        i32::from_le_bytes(bytes)
    }

    /// Decodes a persisted `OrderBy` value.
    ///
    /// Bytes are read from least to most significant. A byte whose attribute
    /// bits are zero is skipped; every other byte must be a valid key, and
    /// the keys must satisfy the same rules as [`add`](Self::add).
    ///
    /// # Errors
    /// [`OrderingError::UnknownAttribute`] or
    /// [`OrderingError::DuplicateAttribute`] when `value` was not produced
    /// by [`to_i32`](Self::to_i32).
    pub fn from_i32(value: i32) -> Result<Self, OrderingError> {
        if value == 0 {
            return Ok(Self::new());
        }
        Self::decode_bytes(value.to_le_bytes())
            .inspect_err(|err| debug!(value, %err, "rejected OrderBy value"))
    }

    fn decode_bytes(bytes: [u8; MAX_KEYS]) -> Result<Self, OrderingError> {
        let mut list = Self::new();
        for byte in bytes {
            let attribute = OrderingAttribute::try_from(byte & ATTRIBUTE_MASK)?;
            if attribute == OrderingAttribute::None {
                continue;
            }
            let key = OrderingKey::create(attribute, SortDirection::from_byte(byte))?;
            list.add(key)?;
        }
        Ok(list)
    }

    /// Parses comma-separated key text such as `"-Memory,Cores"`.
    ///
    /// A leading `-` means ascending; no prefix means descending. Names are
    /// matched ignoring ASCII case, empty tokens are skipped, and whitespace
    /// around each token is trimmed. Returns `None` for an unknown name or a
    /// list that [`add`](Self::add) would reject.
    pub fn try_parse(text: &str) -> Option<Self> {
        let mut list = Self::new();
        for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (direction, name) = match token.strip_prefix('-') {
                Some(name) => (SortDirection::Ascending, name),
                None => (SortDirection::Descending, token),
            };
            let Some(attribute) = OrderingAttribute::from_name(name) else {
                trace!(text, token, "unknown ordering attribute");
                return None;
            };
            let key = OrderingKey::create(attribute, direction).ok()?;
            if let Err(err) = list.add(key) {
                trace!(text, %err, "rejected ordering key text");
                return None;
            }
        }
        Some(list)
    }
}

impl fmt::Display for OrderingKeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl FromStr for OrderingKeyList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| ParseError::new("OrderingKeyList", s))
    }
}

impl TryFrom<i32> for OrderingKeyList {
    type Error = OrderingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_i32(value)
    }
}

impl From<&OrderingKeyList> for i32 {
    fn from(list: &OrderingKeyList) -> Self {
        list.to_i32()
    }
}

impl From<OrderingKeyList> for i32 {
    fn from(list: OrderingKeyList) -> Self {
        list.to_i32()
    }
}

impl<'a> IntoIterator for &'a OrderingKeyList {
    type Item = &'a OrderingKey;
    type IntoIter = std::slice::Iter<'a, OrderingKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Every list the public API can build.
    fn all_valid_lists() -> Vec<OrderingKeyList> {
        let mut lists = vec![OrderingKeyList::new()];
        for first in OrderingKey::CANONICAL {
            lists.push(OrderingKeyList::from_keys([first]).unwrap());
            for second in OrderingKey::CANONICAL {
                if let Ok(list) = OrderingKeyList::from_keys([first, second]) {
                    lists.push(list);
                }
            }
        }
        lists
    }

    #[test]
    fn test_all_valid_lists_count() {
        // 1 empty + 4 singles + 2 orders * 2 memory dirs * 2 cores dirs
        assert_eq!(all_valid_lists().len(), 13);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut list = OrderingKeyList::new();
        list.add(OrderingKey::CORES_ASC)
            .unwrap()
            .add(OrderingKey::MEMORY_DESC)
            .unwrap();
        assert_eq!(
            list.as_slice(),
            &[OrderingKey::CORES_ASC, OrderingKey::MEMORY_DESC]
        );
        assert_eq!(list.get(1), Some(OrderingKey::MEMORY_DESC));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_add_duplicate_attribute_leaves_list_unchanged() {
        let mut list = OrderingKeyList::from_keys([OrderingKey::CORES_DESC]).unwrap();
        let before = list.clone();
        assert_eq!(
            list.add(OrderingKey::CORES_ASC).map(|l| l.len()),
            Err(OrderingError::DuplicateAttribute(OrderingAttribute::Cores))
        );
        assert_eq!(list, before);
        assert!(list.add(OrderingKey::CORES_DESC).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_to_full_list_fails() {
        // Only two attributes exist today, so a full list cannot be built
        // through `add`; fill the slots directly.
        let mut list = OrderingKeyList {
            keys: vec![OrderingKey::MEMORY_ASC; MAX_KEYS],
        };
        assert!(list.is_full());
        assert_eq!(
            list.add(OrderingKey::CORES_DESC).map(|l| l.len()),
            Err(OrderingError::ListFull)
        );
        assert_eq!(list.len(), MAX_KEYS);
    }

    #[test]
    fn test_encode_known_value() {
        let list =
            OrderingKeyList::from_keys([OrderingKey::MEMORY_ASC, OrderingKey::CORES_DESC]).unwrap();
        assert_eq!(list.to_i32().to_le_bytes(), [0x81, 0x02, 0x00, 0x00]);
        assert_eq!(list.to_i32(), 641);
        assert_eq!(i32::from(&list), 641);
    }

    #[test]
    fn test_decode_known_value() {
        let list = OrderingKeyList::from_i32(641).unwrap();
        assert_eq!(
            list.as_slice(),
            &[OrderingKey::MEMORY_ASC, OrderingKey::CORES_DESC]
        );
    }

    #[test]
    fn test_empty_list() {
        let list = OrderingKeyList::new();
        assert_eq!(list.to_i32(), 0);
        assert_eq!(list.to_string(), "");
        assert!(OrderingKeyList::from_i32(0).unwrap().is_empty());
        assert_eq!(OrderingKeyList::try_parse(""), Some(OrderingKeyList::new()));
        assert_eq!(OrderingKeyList::try_parse(",,"), Some(OrderingKeyList::new()));
    }

    #[test]
    fn test_round_trip_every_valid_list() {
        for list in all_valid_lists() {
            assert_eq!(OrderingKeyList::from_i32(list.to_i32()), Ok(list.clone()));
            assert_eq!(OrderingKeyList::try_parse(&list.to_string()), Some(list));
        }
    }

    #[test]
    fn test_decode_skips_empty_slots() {
        // 0x00 and 0x80 both carry the zero attribute.
        let value = i32::from_le_bytes([0x00, 0x82, 0x80, 0x01]);
        let list = OrderingKeyList::from_i32(value).unwrap();
        assert_eq!(
            list.as_slice(),
            &[OrderingKey::CORES_ASC, OrderingKey::MEMORY_DESC]
        );
    }

    #[test]
    fn test_decode_rejects_corrupt_values() {
        assert_eq!(
            OrderingKeyList::from_i32(i32::from_le_bytes([0x03, 0, 0, 0])),
            Err(OrderingError::UnknownAttribute(0x03))
        );
        assert_eq!(
            OrderingKeyList::from_i32(i32::from_le_bytes([0x01, 0x81, 0, 0])),
            Err(OrderingError::DuplicateAttribute(OrderingAttribute::Memory))
        );
        assert!(OrderingKeyList::try_from(-1i32).is_err());
    }

    #[test]
    fn test_parse_text() {
        let list = OrderingKeyList::try_parse("-Memory,Cores").unwrap();
        assert_eq!(
            list.as_slice(),
            &[OrderingKey::MEMORY_ASC, OrderingKey::CORES_DESC]
        );
        let list = OrderingKeyList::try_parse(" cores , -MEMORY ,").unwrap();
        assert_eq!(
            list.as_slice(),
            &[OrderingKey::CORES_DESC, OrderingKey::MEMORY_ASC]
        );
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(OrderingKeyList::try_parse("Cores,-Cores"), None);
        assert_eq!(OrderingKeyList::try_parse("Disk"), None);
        assert_eq!(OrderingKeyList::try_parse("None"), None);
        assert_eq!(OrderingKeyList::try_parse("--Memory"), None);
        assert_eq!(OrderingKeyList::try_parse("-"), None);
        assert!("Memory,Memory".parse::<OrderingKeyList>().is_err());
    }

    #[test]
    fn test_display() {
        let list =
            OrderingKeyList::from_keys([OrderingKey::CORES_ASC, OrderingKey::MEMORY_ASC]).unwrap();
        assert_eq!(list.to_string(), "-Cores,-Memory");
        let names: Vec<String> = list.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["-Cores", "-Memory"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_integer_form() {
        let list =
            OrderingKeyList::from_keys([OrderingKey::MEMORY_ASC, OrderingKey::CORES_DESC]).unwrap();
        assert_eq!(serde_json::to_string(&list).unwrap(), "641");
        let back: OrderingKeyList = serde_json::from_str("641").unwrap();
        assert_eq!(back, list);
        assert!(serde_json::from_str::<OrderingKeyList>("3").is_err());
    }

    proptest! {
        #[test]
        fn prop_decode_never_panics_and_reencodes(value in any::<i32>()) {
            if let Ok(list) = OrderingKeyList::from_i32(value) {
                prop_assert!(list.len() <= MAX_KEYS);
                prop_assert_eq!(OrderingKeyList::from_i32(list.to_i32()), Ok(list));
            }
        }

        #[test]
        fn prop_add_keeps_attributes_unique(bytes in proptest::collection::vec(any::<u8>(), 0..8)) {
            let mut list = OrderingKeyList::new();
            for byte in bytes {
                if let Ok(key) = OrderingKey::from_byte(byte) {
                    let before = list.clone();
                    if list.add(key).is_err() {
                        prop_assert_eq!(&list, &before);
                    }
                }
            }
            let memory = list.iter().filter(|k| k.attribute() == OrderingAttribute::Memory).count();
            let cores = list.iter().filter(|k| k.attribute() == OrderingAttribute::Cores).count();
            prop_assert!(memory <= 1 && cores <= 1);
        }
    }
}
