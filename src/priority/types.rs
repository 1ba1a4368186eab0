//! Priority level and expanded-priority value types.

use std::fmt;
use std::str::FromStr;

use super::scale;
use crate::error::{ParseError, PriorityError};

/// Coarse job priority, ordered from lowest to highest.
///
/// Each level owns one bucket of the expanded scale; see
/// [`level_of`](crate::priority::level_of) for the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum JobPriorityLevel {
    Lowest = 0,
    BelowNormal = 1,
    Normal = 2,
    AboveNormal = 3,
    Highest = 4,
}

impl JobPriorityLevel {
    /// All levels in ascending order.
    pub const ALL: [JobPriorityLevel; 5] = [
        JobPriorityLevel::Lowest,
        JobPriorityLevel::BelowNormal,
        JobPriorityLevel::Normal,
        JobPriorityLevel::AboveNormal,
        JobPriorityLevel::Highest,
    ];

    /// Numeric level (0 for `Lowest` through 4 for `Highest`).
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Level for a numeric index, or `None` outside `0..=4`.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Lower bound of this level's bucket on the expanded scale.
    pub fn base_value(self) -> i32 {
        scale::base_value_of(self.index())
    }

    pub fn name(self) -> &'static str {
        match self {
            JobPriorityLevel::Lowest => "Lowest",
            JobPriorityLevel::BelowNormal => "BelowNormal",
            JobPriorityLevel::Normal => "Normal",
            JobPriorityLevel::AboveNormal => "AboveNormal",
            JobPriorityLevel::Highest => "Highest",
        }
    }

    /// Looks up a level by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for JobPriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JobPriorityLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::new("JobPriorityLevel", s))
    }
}

/// A value on the expanded priority scale, guaranteed to lie in `[0, 4000]`.
///
/// This is the typed form of the `ExpandedPriority` job property. Its text
/// form uses the `Level+N` / `Level-N` notation:
///
/// ```
/// use u_jobprop::priority::{ExpandedPriority, JobPriorityLevel};
///
/// let p: ExpandedPriority = "AboveNormal-900".parse().unwrap();
/// assert_eq!(p.get(), 2100);
/// assert_eq!(p.level(), JobPriorityLevel::Normal);
/// assert_eq!(p.to_string(), "Normal+100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct ExpandedPriority(i32);

impl ExpandedPriority {
    pub const LOWEST: Self = Self(0);
    pub const BELOW_NORMAL: Self = Self(1000);
    pub const NORMAL: Self = Self(2000);
    pub const ABOVE_NORMAL: Self = Self(3000);
    pub const HIGHEST: Self = Self(scale::MAX_EXPANDED);

    /// Wraps a raw value.
    ///
    /// # Errors
    /// [`PriorityError::OutOfRange`] if `value` is outside `[0, 4000]`.
    pub fn new(value: i32) -> Result<Self, PriorityError> {
        if scale::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(PriorityError::OutOfRange(value))
        }
    }

    /// Wraps a raw value, clamping it into `[0, 4000]`.
    pub fn saturating(value: i32) -> Self {
        Self(value.clamp(scale::MIN_EXPANDED, scale::MAX_EXPANDED))
    }

    /// The exact value of a named level.
    pub fn from_level(level: JobPriorityLevel) -> Self {
        Self(level.base_value())
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn level(self) -> JobPriorityLevel {
        scale::level_of(self.0)
    }

    /// Top of the bucket containing this value.
    pub fn ceiling(self) -> Self {
        Self(scale::ceiling_of_bucket(self.0))
    }
}

impl Default for ExpandedPriority {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for ExpandedPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&scale::format_in_range(self.0))
    }
}

impl FromStr for ExpandedPriority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scale::try_parse(s)
            .map(Self)
            .ok_or_else(|| ParseError::new("ExpandedPriority", s))
    }
}

impl TryFrom<i32> for ExpandedPriority {
    type Error = PriorityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExpandedPriority> for i32 {
    fn from(value: ExpandedPriority) -> Self {
        value.0
    }
}

impl From<JobPriorityLevel> for ExpandedPriority {
    fn from(level: JobPriorityLevel) -> Self {
        Self::from_level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(JobPriorityLevel::Lowest < JobPriorityLevel::BelowNormal);
        assert!(JobPriorityLevel::AboveNormal < JobPriorityLevel::Highest);
        let mut sorted = JobPriorityLevel::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, JobPriorityLevel::ALL);
    }

    #[test]
    fn test_level_index_round_trip() {
        for level in JobPriorityLevel::ALL {
            assert_eq!(JobPriorityLevel::from_index(level.index()), Some(level));
        }
        assert_eq!(JobPriorityLevel::from_index(-1), None);
        assert_eq!(JobPriorityLevel::from_index(5), None);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(JobPriorityLevel::AboveNormal.to_string(), "AboveNormal");
        assert_eq!(
            JobPriorityLevel::from_name("belownormal"),
            Some(JobPriorityLevel::BelowNormal)
        );
        assert_eq!(
            "HIGHEST".parse::<JobPriorityLevel>(),
            Ok(JobPriorityLevel::Highest)
        );
        assert!("Urgent".parse::<JobPriorityLevel>().is_err());
        assert_eq!(JobPriorityLevel::from_name(""), None);
    }

    #[test]
    fn test_base_values() {
        assert_eq!(JobPriorityLevel::Lowest.base_value(), 0);
        assert_eq!(JobPriorityLevel::Normal.base_value(), 2000);
        assert_eq!(JobPriorityLevel::Highest.base_value(), 4000);
    }

    #[test]
    fn test_expanded_new() {
        assert_eq!(ExpandedPriority::new(0).unwrap(), ExpandedPriority::LOWEST);
        assert_eq!(ExpandedPriority::new(4000).unwrap(), ExpandedPriority::HIGHEST);
        assert_eq!(
            ExpandedPriority::new(4001),
            Err(PriorityError::OutOfRange(4001))
        );
        assert_eq!(ExpandedPriority::new(-1), Err(PriorityError::OutOfRange(-1)));
        assert_eq!(ExpandedPriority::try_from(1234i32).map(i32::from), Ok(1234));
    }

    #[test]
    fn test_expanded_saturating() {
        assert_eq!(ExpandedPriority::saturating(-50).get(), 0);
        assert_eq!(ExpandedPriority::saturating(9000).get(), 4000);
        assert_eq!(ExpandedPriority::saturating(1500).get(), 1500);
    }

    #[test]
    fn test_expanded_level_and_ceiling() {
        let p = ExpandedPriority::new(3450).unwrap();
        assert_eq!(p.level(), JobPriorityLevel::AboveNormal);
        assert_eq!(p.ceiling().get(), 3999);
        assert_eq!(ExpandedPriority::HIGHEST.ceiling(), ExpandedPriority::HIGHEST);
        assert_eq!(
            ExpandedPriority::from(JobPriorityLevel::BelowNormal),
            ExpandedPriority::BELOW_NORMAL
        );
        assert_eq!(ExpandedPriority::default(), ExpandedPriority::NORMAL);
    }

    #[test]
    fn test_expanded_text() {
        let p: ExpandedPriority = "Normal+100".parse().unwrap();
        assert_eq!(p.get(), 2100);
        assert_eq!(p.to_string(), "Normal+100");
        assert_eq!(ExpandedPriority::HIGHEST.to_string(), "Highest");

        let err = "5000".parse::<ExpandedPriority>().unwrap_err();
        assert_eq!(err.target, "ExpandedPriority");
        assert_eq!(err.input, "5000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_integer_form() {
        let p = ExpandedPriority::new(2100).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "2100");
        let back: ExpandedPriority = serde_json::from_str("2100").unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<ExpandedPriority>("4001").is_err());
        assert_eq!(
            serde_json::to_string(&JobPriorityLevel::BelowNormal).unwrap(),
            "\"BelowNormal\""
        );
    }
}
