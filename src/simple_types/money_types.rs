//! Money types, expressed in currency minor units (cents)

use std::fmt;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// MinorUnits
// =============================================================================

/// A non-negative amount of money in minor currency units
///
/// Used for zone shipping costs, free-shipping thresholds and quoted charges.
/// The currency itself is implied by the zone (a Mexican zone charges MXN
/// cents, a US zone USD cents).
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::MinorUnits;
///
/// let cost = MinorUnits::create("shippingCost", 15000).unwrap();
/// assert_eq!(cost.value(), 15000);
///
/// assert!(MinorUnits::create("shippingCost", -1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorUnits(u64);

impl MinorUnits {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `MinorUnits` from a signed value
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the value is negative.
    pub fn create(field_name: &str, value: i64) -> Result<Self, ValidationError> {
        constrained_type::create_non_negative(field_name, Self, value)
    }

    /// Creates a `MinorUnits` from an already non-negative value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Subtraction clamped at zero
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// OrderTotal
// =============================================================================

/// Sum of the cart's line items, in minor units
///
/// Supplied by the cart at checkout. A negative total is a caller error and
/// is rejected before any zone is resolved.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::OrderTotal;
///
/// let total = OrderTotal::create("orderTotal", 50000).unwrap();
/// assert_eq!(total.value(), 50000);
///
/// let error = OrderTotal::create("orderTotal", -100).unwrap_err();
/// assert_eq!(error.to_string(), "orderTotal: Must not be negative");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderTotal(u64);

impl OrderTotal {
    /// Creates an `OrderTotal` from a signed value
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the value is negative.
    pub fn create(field_name: &str, value: i64) -> Result<Self, ValidationError> {
        constrained_type::create_non_negative(field_name, Self, value)
    }

    /// Creates an `OrderTotal` from an already non-negative value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Views the total as an amount, for comparison against thresholds
    #[must_use]
    pub const fn as_minor_units(&self) -> MinorUnits {
        MinorUnits(self.0)
    }
}

impl fmt::Display for OrderTotal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
