//! Built-in storefront zone table
//!
//! Used when no zone file is configured. Amounts are in the minor units of
//! each market's currency (MXN, USD, CAD cents).

use super::error_types::ConfigurationError;
use super::shipping_zone::UnvalidatedShippingZone;
use super::zone_table::ZoneTable;

struct ZoneRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    country: &'static str,
    states: &'static [&'static str],
    shipping_cost: i64,
    free_shipping_threshold: i64,
    days: (i64, i64),
    priority: i64,
}

const STOREFRONT_ZONES: [ZoneRow; 7] = [
    ZoneRow {
        id: "mx-national",
        name: "México - Nacional",
        description: "Envíos a todo México",
        country: "MX",
        states: &[],
        shipping_cost: 15000,
        free_shipping_threshold: 99900,
        days: (3, 7),
        priority: 10,
    },
    ZoneRow {
        id: "mx-cdmx",
        name: "Ciudad de México",
        description: "Envío express en CDMX",
        country: "MX",
        states: &["Ciudad de México", "CDMX"],
        shipping_cost: 8000,
        free_shipping_threshold: 50000,
        days: (1, 3),
        priority: 20,
    },
    ZoneRow {
        id: "mx-zona-metropolitana",
        name: "Zona Metropolitana",
        description: "Estado de México, Querétaro, Puebla, Morelos",
        country: "MX",
        states: &["Estado de México", "Querétaro", "Puebla", "Morelos"],
        shipping_cost: 10000,
        free_shipping_threshold: 75000,
        days: (2, 5),
        priority: 15,
    },
    ZoneRow {
        id: "us-national",
        name: "USA - Nacional",
        description: "Envíos a todo Estados Unidos",
        country: "US",
        states: &[],
        shipping_cost: 999,
        free_shipping_threshold: 7500,
        days: (5, 10),
        priority: 10,
    },
    ZoneRow {
        id: "us-california",
        name: "California",
        description: "Envío rápido en California",
        country: "US",
        states: &["CA", "California"],
        shipping_cost: 599,
        free_shipping_threshold: 5000,
        days: (2, 4),
        priority: 20,
    },
    ZoneRow {
        id: "us-west-coast",
        name: "Costa Oeste",
        description: "Washington, Oregón, Nevada",
        country: "US",
        states: &["WA", "Washington", "OR", "Oregon", "NV", "Nevada"],
        shipping_cost: 699,
        free_shipping_threshold: 6000,
        days: (3, 6),
        priority: 15,
    },
    ZoneRow {
        id: "ca-national",
        name: "Canadá - Nacional",
        description: "Envíos a todo Canadá",
        country: "CA",
        states: &[],
        shipping_cost: 1499,
        free_shipping_threshold: 10000,
        days: (7, 14),
        priority: 10,
    },
];

impl ZoneRow {
    fn to_unvalidated(&self) -> UnvalidatedShippingZone {
        UnvalidatedShippingZone {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            countries: vec![self.country.to_string()],
            states: self.states.iter().map(ToString::to_string).collect(),
            cities: Vec::new(),
            postal_codes: Vec::new(),
            shipping_cost: self.shipping_cost,
            free_shipping_threshold: Some(self.free_shipping_threshold),
            estimated_days_min: self.days.0,
            estimated_days_max: self.days.1,
            is_active: true,
            priority: self.priority,
        }
    }
}

/// Records of the built-in storefront table, in table order
#[must_use]
pub fn storefront_zone_records() -> Vec<UnvalidatedShippingZone> {
    STOREFRONT_ZONES.iter().map(ZoneRow::to_unvalidated).collect()
}

impl ZoneTable {
    /// The built-in storefront table: Mexico, United States and Canada
    ///
    /// # Errors
    ///
    /// Only if the built-in records are themselves invalid.
    pub fn storefront_default() -> Result<Self, ConfigurationError> {
        Self::from_unvalidated(storefront_zone_records())
    }
}
