//! Read-only vehicle catalog seeded once at startup.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use super::entities::{PlayerProfile, Vehicle, VehicleCategory};
use super::filter::CategoryFilter;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog contains no vehicles")]
    Empty,
    #[error("duplicate vehicle id: {0}")]
    DuplicateId(String),
    #[error("vehicle {0} has a blank name")]
    BlankName(String),
    #[error("vehicle {0} must have a positive hourly price")]
    NonPositivePrice(String),
    #[error("vehicle {0} must have a positive max speed")]
    NonPositiveSpeed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Validates and wraps a vehicle list. Insertion order is kept.
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, CatalogError> {
        if vehicles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                return Err(CatalogError::DuplicateId(vehicle.id.clone()));
            }
            if vehicle.name.trim().is_empty() {
                return Err(CatalogError::BlankName(vehicle.id.clone()));
            }
            if vehicle.hourly_price <= Decimal::ZERO {
                return Err(CatalogError::NonPositivePrice(vehicle.id.clone()));
            }
            if vehicle.max_speed == 0 {
                return Err(CatalogError::NonPositiveSpeed(vehicle.id.clone()));
            }
        }

        Ok(Self { vehicles })
    }

    /// Built-in fleet shipped with the app.
    pub fn seed() -> Self {
        Self {
            vehicles: seed_vehicles(),
        }
    }

    pub fn list_all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn count_by_category(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for vehicle in &self.vehicles {
            *counts.per_category.entry(vehicle.category).or_default() += 1;
        }
        counts
    }
}

/// Badge counts for the category filter buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    per_category: BTreeMap<VehicleCategory, usize>,
}

impl CategoryCounts {
    pub fn category(&self, category: VehicleCategory) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }

    /// Synthetic "all" badge: the sum over every category.
    pub fn all(&self) -> usize {
        self.per_category.values().sum()
    }

    pub fn for_filter(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all(),
            CategoryFilter::Only(category) => self.category(category),
        }
    }
}

pub fn seed_player() -> PlayerProfile {
    PlayerProfile {
        name: "xX_Player_Xx".to_string(),
        balance: dec!(25000),
        active_rentals: 1,
        total_rentals: 47,
    }
}

fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        vehicle("1", "Adder Supercar", VehicleCategory::Car, "car-card.svg", dec!(150), 250, true),
        vehicle("2", "Akuma Sport", VehicleCategory::Motorcycle, "bike-card.svg", dec!(75), 180, true),
        vehicle("3", "Marquis Yacht", VehicleCategory::Boat, "boat-card.svg", dec!(200), 85, false),
        vehicle("4", "Zentorno", VehicleCategory::Car, "car-card.svg", dec!(180), 245, true),
        vehicle("5", "Hakuchou Drag", VehicleCategory::Motorcycle, "bike-card.svg", dec!(90), 200, true),
        vehicle("6", "Speeder", VehicleCategory::Boat, "boat-card.svg", dec!(120), 95, true),
    ]
}

fn vehicle(
    id: &str,
    name: &str,
    category: VehicleCategory,
    image: &str,
    hourly_price: Decimal,
    max_speed: u32,
    available: bool,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        category,
        image: image.to_string(),
        hourly_price,
        max_speed,
        available,
    }
}
