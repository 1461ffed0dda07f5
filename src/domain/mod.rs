//! Catalog, filtering, pricing and booking rules for the rental tablet.

pub mod app_state;
pub mod booking;
pub mod catalog;
pub mod entities;
pub mod filter;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use booking::{BookingError, BookingFlow, BookingSelection, RentalConfirmed};
#[allow(unused_imports)]
pub use catalog::{seed_player, Catalog, CatalogError, CategoryCounts};
#[allow(unused_imports)]
pub use entities::{PlayerProfile, Vehicle, VehicleCategory, VehicleId};
#[allow(unused_imports)]
pub use filter::{filter_vehicles, CategoryFilter, FilterState};
#[allow(unused_imports)]
pub use pricing::{price, price_options, quote, DurationTier};
