//! Priority window configuration for job templates.

use super::scale::{self, MAX_EXPANDED, MIN_EXPANDED};
use super::types::{ExpandedPriority, JobPriorityLevel};
use crate::error::PriorityError;

/// The expanded-priority window a job template allows, and the value
/// applied when a job does not ask for one.
///
/// # Examples
///
/// ```
/// use u_jobprop::priority::{JobPriorityLevel, PriorityBounds};
///
/// let bounds = PriorityBounds::default()
///     .with_levels(JobPriorityLevel::BelowNormal, JobPriorityLevel::AboveNormal)
///     .with_default(2500);
/// assert!(bounds.validate().is_ok());
/// assert_eq!(bounds.resolve(None).unwrap().get(), 2500);
/// assert!(bounds.resolve(Some(4000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityBounds {
    /// Lowest value a job may request.
    pub min: i32,

    /// Highest value a job may request.
    pub max: i32,

    /// Value used when a job does not request one.
    pub default: i32,
}

impl Default for PriorityBounds {
    fn default() -> Self {
        Self {
            min: MIN_EXPANDED,
            max: MAX_EXPANDED,
            default: JobPriorityLevel::Normal.base_value(),
        }
    }
}

impl PriorityBounds {
    pub fn with_min(mut self, min: i32) -> Self {
        self.min = min;
        self
    }

    pub fn with_max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }

    pub fn with_default(mut self, default: i32) -> Self {
        self.default = default;
        self
    }

    /// Sets the window to span whole buckets, from the base of `lowest` to
    /// the ceiling of `highest`.
    pub fn with_levels(mut self, lowest: JobPriorityLevel, highest: JobPriorityLevel) -> Self {
        self.min = lowest.base_value();
        self.max = scale::ceiling_of_bucket(highest.base_value());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !scale::is_valid(self.min) {
            return Err(format!("min {} is outside [0, 4000]", self.min));
        }
        if !scale::is_valid(self.max) {
            return Err(format!("max {} is outside [0, 4000]", self.max));
        }
        if self.min > self.max {
            return Err(format!("min {} exceeds max {}", self.min, self.max));
        }
        if !self.contains(self.default) {
            return Err(format!(
                "default {} is outside [{}, {}]",
                self.default, self.min, self.max
            ));
        }
        Ok(())
    }

    /// Whether `value` lies inside the window.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Resolves a job's requested priority against this window.
    ///
    /// `None` resolves to the default.
    ///
    /// # Errors
    /// - [`PriorityError::OutOfRange`] if the value is not on the scale at all.
    /// - [`PriorityError::OutsideBounds`] if it is on the scale but outside
    ///   the window.
    pub fn resolve(&self, requested: Option<i32>) -> Result<ExpandedPriority, PriorityError> {
        let value = requested.unwrap_or(self.default);
        let priority = ExpandedPriority::new(value)?;
        if !self.contains(value) {
            return Err(PriorityError::OutsideBounds {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(priority)
    }

    /// Pulls `value` into the window, then onto the scale.
    pub fn clamp(&self, value: i32) -> ExpandedPriority {
        ExpandedPriority::saturating(value.max(self.min).min(self.max))
    }
}
