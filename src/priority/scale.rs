//! Conversions between priority levels and the expanded 0–4000 scale.
//!
//! The scale is split into five buckets, one per [`JobPriorityLevel`]:
//!
//! | Level         | Values        |
//! |---------------|---------------|
//! | `Lowest`      | 0 – 999       |
//! | `BelowNormal` | 1000 – 1999   |
//! | `Normal`      | 2000 – 2999   |
//! | `AboveNormal` | 3000 – 3999   |
//! | `Highest`     | 4000          |
//!
//! Text notation names the nearest level plus or minus an offset, e.g.
//! `"Normal+100"` (2100) or `"AboveNormal-1"` (2999).

use tracing::trace;

use super::types::JobPriorityLevel;
use crate::error::PriorityError;

/// Smallest valid expanded priority.
pub const MIN_EXPANDED: i32 = 0;

/// Largest valid expanded priority (the single `Highest` value).
pub const MAX_EXPANDED: i32 = 4000;

/// Width of each level's bucket.
pub const BUCKET_WIDTH: i32 = 1000;

/// Offsets up to this value are written relative to the lower level.
const ROUNDING_LIMIT: i32 = 500;

/// Named thresholds, highest first.
const THRESHOLDS: [(i32, JobPriorityLevel); 5] = [
    (4000, JobPriorityLevel::Highest),
    (3000, JobPriorityLevel::AboveNormal),
    (2000, JobPriorityLevel::Normal),
    (1000, JobPriorityLevel::BelowNormal),
    (0, JobPriorityLevel::Lowest),
];

/// Whether `value` lies in `[0, 4000]`.
pub fn is_valid(value: i32) -> bool {
    (MIN_EXPANDED..=MAX_EXPANDED).contains(&value)
}

/// Level whose bucket contains `value`.
///
/// Values below 0 map to `Lowest` and values above 4000 map to `Highest`.
///
/// # Examples
///
/// ```
/// use u_jobprop::priority::{level_of, JobPriorityLevel};
///
/// assert_eq!(level_of(3450), JobPriorityLevel::AboveNormal);
/// assert_eq!(level_of(3999), JobPriorityLevel::AboveNormal);
/// assert_eq!(level_of(4000), JobPriorityLevel::Highest);
/// assert_eq!(level_of(-20), JobPriorityLevel::Lowest);
/// ```
pub fn level_of(value: i32) -> JobPriorityLevel {
    match (value / BUCKET_WIDTH).clamp(0, 4) {
        0 => JobPriorityLevel::Lowest,
        1 => JobPriorityLevel::BelowNormal,
        2 => JobPriorityLevel::Normal,
        3 => JobPriorityLevel::AboveNormal,
        _ => JobPriorityLevel::Highest,
    }
}

/// Lower bound of the bucket for a numeric level (`level * 1000`).
pub fn base_value_of(level: i32) -> i32 {
    level.saturating_mul(BUCKET_WIDTH)
}

/// Top of the bucket containing `value`, after clamping into `[0, 4000]`.
///
/// `ceiling_of_bucket(2100) == 2999`; `4000` is its own ceiling.
pub fn ceiling_of_bucket(value: i32) -> i32 {
    let value = value.clamp(MIN_EXPANDED, MAX_EXPANDED);
    if value == MAX_EXPANDED {
        return MAX_EXPANDED;
    }
    (value / BUCKET_WIDTH + 1) * BUCKET_WIDTH - 1
}

/// Formats an expanded priority in `Level+N` / `Level-N` notation.
///
/// The value is written relative to the nearest named level. An offset of
/// exactly 500 is written from the lower level (`"Normal+500"`, never
/// `"AboveNormal-500"`).
///
/// # Errors
/// [`PriorityError::OutOfRange`] if `value` is outside `[0, 4000]`.
///
/// # Examples
///
/// ```
/// use u_jobprop::priority::format;
///
/// assert_eq!(format(2100).unwrap(), "Normal+100");
/// assert_eq!(format(2999).unwrap(), "AboveNormal-1");
/// assert_eq!(format(4000).unwrap(), "Highest");
/// assert!(format(4001).is_err());
/// ```
pub fn format(value: i32) -> Result<String, PriorityError> {
    if !is_valid(value) {
        return Err(PriorityError::OutOfRange(value));
    }
    Ok(format_in_range(value))
}

/// Formatting body shared with `Display`; `value` must already be in range.
pub(crate) fn format_in_range(value: i32) -> String {
    let mut last_level = JobPriorityLevel::Highest;
    for (threshold, level) in THRESHOLDS {
        if value == threshold {
            return level.name().to_owned();
        }
        if value > threshold {
            let offset = value - threshold;
            return if offset <= ROUNDING_LIMIT {
                format!("{level}+{offset}")
            } else {
                format!("{last_level}-{}", BUCKET_WIDTH - offset)
            };
        }
        last_level = level;
    }
    // Only reachable for negative input, which callers exclude.
    value.to_string()
}

/// Parses expanded-priority text.
///
/// Accepted forms, tried in order:
///
/// 1. `Level+N` → level base value plus `N`
/// 2. `Level-N` → level base value minus `N`
/// 3. `N` → the literal value
/// 4. `Level` → the level base value
///
/// Level names are matched ignoring ASCII case. Returns `None` for
/// malformed text, unknown levels, or a result outside `[0, 4000]`.
///
/// # Examples
///
/// ```
/// use u_jobprop::priority::try_parse;
///
/// assert_eq!(try_parse("Normal+100"), Some(2100));
/// assert_eq!(try_parse("AboveNormal-900"), Some(2100));
/// assert_eq!(try_parse("322"), Some(322));
/// assert_eq!(try_parse("highest"), Some(4000));
/// assert_eq!(try_parse("5000"), None);
/// assert_eq!(try_parse("Bogus"), None);
/// ```
pub fn try_parse(text: &str) -> Option<i32> {
    match parse_unbounded(text) {
        Some(value) if is_valid(value) => Some(value),
        other => {
            trace!(text, parsed = ?other, "rejected expanded priority text");
            None
        }
    }
}

fn parse_unbounded(text: &str) -> Option<i32> {
    if let Some((name, digits)) = split_offset(text, '+') {
        let offset: i32 = digits.parse().ok()?;
        return level_base(name)?.checked_add(offset);
    }
    if let Some((name, digits)) = split_offset(text, '-') {
        let offset: i32 = digits.parse().ok()?;
        return level_base(name)?.checked_sub(offset);
    }
    if is_digits(text) {
        return text.parse().ok();
    }
    level_base(text)
}

/// Splits `Letters<sign>Digits`; anything else yields `None`.
fn split_offset(text: &str, sign: char) -> Option<(&str, &str)> {
    let (name, digits) = text.split_once(sign)?;
    let letters = !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic());
    (letters && is_digits(digits)).then_some((name, digits))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn level_base(name: &str) -> Option<i32> {
    JobPriorityLevel::from_name(name).map(JobPriorityLevel::base_value)
}
