//! Zone ranking and delivery estimate types

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// Priority
// =============================================================================

/// Rank of a zone; higher means more specific / preferred
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::Priority;
///
/// assert!(Priority::new(20) > Priority::new(10));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(i32);

impl Priority {
    /// Creates a `Priority` from a 64-bit value read from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the value does not fit in an `i32`.
    pub fn create(field_name: &str, value: i64) -> Result<Self, ValidationError> {
        constrained_type::create_bounded(field_name, Self, value)
    }

    /// Creates a `Priority`
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the inner value
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

// =============================================================================
// DeliveryEstimate
// =============================================================================

/// Estimated delivery window in days, `min_days <= max_days`
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::DeliveryEstimate;
///
/// let estimate = DeliveryEstimate::create(3, 7).unwrap();
/// assert_eq!(estimate.min_days(), 3);
/// assert_eq!(estimate.max_days(), 7);
///
/// assert!(DeliveryEstimate::create(7, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeliveryEstimate {
    min_days: u32,
    max_days: u32,
}

impl DeliveryEstimate {
    /// Creates a `DeliveryEstimate`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when either bound is negative or does not
    /// fit in a `u32`, or when `min_days > max_days`.
    pub fn create(min_days: i64, max_days: i64) -> Result<Self, ValidationError> {
        let min_days = Self::days("estimatedDaysMin", min_days)?;
        let max_days = Self::days("estimatedDaysMax", max_days)?;
        if min_days > max_days {
            return Err(ValidationError::new(
                "estimatedDaysMin",
                &format!("Must not be greater than estimatedDaysMax ({min_days} > {max_days})"),
            ));
        }
        Ok(Self { min_days, max_days })
    }

    fn days(field_name: &str, value: i64) -> Result<u32, ValidationError> {
        constrained_type::create_bounded(field_name, |days: u32| days, value)
    }

    /// Fastest expected delivery, in days
    #[must_use]
    pub const fn min_days(&self) -> u32 {
        self.min_days
    }

    /// Slowest expected delivery, in days
    #[must_use]
    pub const fn max_days(&self) -> u32 {
        self.max_days
    }
}
