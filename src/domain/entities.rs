use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier for vehicles in the catalog.
pub type VehicleId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Motorcycle,
    Boat,
    Aircraft,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Car,
        VehicleCategory::Motorcycle,
        VehicleCategory::Boat,
        VehicleCategory::Aircraft,
    ];

    /// Stable lowercase id, also used in `catalog.json`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Boat => "boat",
            Self::Aircraft => "aircraft",
        }
    }

    /// Plural label used on the filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "Cars",
            Self::Motorcycle => "Bikes",
            Self::Boat => "Boats",
            Self::Aircraft => "Aircraft",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Car => "🏎️",
            Self::Motorcycle => "🏍️",
            Self::Boat => "🚤",
            Self::Aircraft => "✈️",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub category: VehicleCategory,
    /// Asset key under `assets/vehicles/`, or a full URI.
    pub image: String,
    /// Rate per hour in dollars.
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_price: Decimal,
    /// Top speed in mph.
    pub max_speed: u32,
    pub available: bool,
}

/// Read-only sidebar record for the signed-in player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub active_rentals: u32,
    pub total_rentals: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"car\"", VehicleCategory::Car)]
    #[case("\"motorcycle\"", VehicleCategory::Motorcycle)]
    #[case("\"boat\"", VehicleCategory::Boat)]
    #[case("\"aircraft\"", VehicleCategory::Aircraft)]
    fn category_ids_match_json_names(#[case] json: &str, #[case] expected: VehicleCategory) {
        let parsed: VehicleCategory = serde_json::from_str(json).expect("known category");
        assert_eq!(parsed, expected);
        assert_eq!(format!("\"{}\"", expected.id()), json);
    }

    #[test]
    fn rejects_unknown_category_in_json() {
        assert!(serde_json::from_str::<VehicleCategory>("\"submarine\"").is_err());
    }

    #[test]
    fn vehicle_reads_numeric_prices_from_json() {
        let json = r#"{
            "id": "9",
            "name": "Buzzard",
            "category": "aircraft",
            "image": "aircraft-card.svg",
            "hourly_price": 310.5,
            "max_speed": 160,
            "available": true
        }"#;
        let vehicle: Vehicle = serde_json::from_str(json).expect("valid vehicle json");
        assert_eq!(vehicle.category, VehicleCategory::Aircraft);
        assert_eq!(vehicle.hourly_price, rust_decimal_macros::dec!(310.5));
    }
}
