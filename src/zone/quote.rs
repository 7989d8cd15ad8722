//! Shipping quote returned to checkout

use crate::simple_types::{DeliveryEstimate, MinorUnits};

use super::resolver::Specificity;
use super::shipping_zone::ShippingZone;

/// Result of a shipping calculation
///
/// A quote without a zone means the destination is not serviceable. Its cost
/// is zero but it is *not* free shipping: check [`ShippingQuote::is_serviceable`]
/// before presenting the cost.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::MinorUnits;
/// use shipping_zones::zone::ShippingQuote;
///
/// let quote = ShippingQuote::unserviceable();
/// assert_eq!(quote.cost(), MinorUnits::ZERO);
/// assert!(!quote.is_free());
/// assert!(!quote.is_serviceable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippingQuote {
    cost: MinorUnits,
    zone: Option<ShippingZone>,
    is_free: bool,
    specificity: Option<Specificity>,
}

impl ShippingQuote {
    /// Quote for a destination no zone serves
    #[must_use]
    pub const fn unserviceable() -> Self {
        Self {
            cost: MinorUnits::ZERO,
            zone: None,
            is_free: false,
            specificity: None,
        }
    }

    /// Quote for a resolved zone
    #[must_use]
    pub const fn new(
        cost: MinorUnits,
        zone: ShippingZone,
        is_free: bool,
        specificity: Specificity,
    ) -> Self {
        Self {
            cost,
            zone: Some(zone),
            is_free,
            specificity: Some(specificity),
        }
    }

    /// Amount to charge, zero when free or unserviceable
    #[must_use]
    pub const fn cost(&self) -> MinorUnits {
        self.cost
    }

    /// Zone the quote was computed for
    #[must_use]
    pub const fn zone(&self) -> Option<&ShippingZone> {
        self.zone.as_ref()
    }

    /// Whether the free-shipping threshold waived the cost
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.is_free
    }

    /// Test that selected the zone
    #[must_use]
    pub const fn specificity(&self) -> Option<Specificity> {
        self.specificity
    }

    /// Whether any zone serves the destination
    #[must_use]
    pub const fn is_serviceable(&self) -> bool {
        self.zone.is_some()
    }

    /// Delivery window of the matched zone
    #[must_use]
    pub fn estimated_days(&self) -> Option<DeliveryEstimate> {
        self.zone.as_ref().map(ShippingZone::delivery_estimate)
    }
}
