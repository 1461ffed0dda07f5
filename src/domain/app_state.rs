use super::booking::{BookingError, BookingFlow, RentalConfirmed};
use super::catalog::{seed_player, Catalog, CategoryCounts};
use super::entities::PlayerProfile;
use super::filter::FilterState;

/// Everything the catalog page renders from. Catalog and player are fixed
/// after startup; filter and booking follow user input.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub catalog: Catalog,
    pub player: PlayerProfile,
    pub filter: FilterState,
    pub booking: BookingFlow,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seed(), seed_player())
    }
}

impl AppState {
    pub fn new(catalog: Catalog, player: PlayerProfile) -> Self {
        Self {
            catalog,
            player,
            filter: FilterState::default(),
            booking: BookingFlow::Idle,
        }
    }

    pub fn category_counts(&self) -> CategoryCounts {
        self.catalog.count_by_category()
    }

    /// Opens the rental modal for a catalog vehicle.
    pub fn start_rental(&mut self, vehicle_id: &str) -> Result<(), BookingError> {
        // Unknown ids get the same treatment as a vehicle that cannot be rented.
        let Some(vehicle) = self.catalog.find(vehicle_id) else {
            tracing::warn!(vehicle_id, "rent requested for unknown vehicle");
            return Err(BookingError::VehicleUnavailable(vehicle_id.to_string()));
        };
        self.booking.select(vehicle)
    }

    pub fn confirm_rental(&mut self) -> Result<RentalConfirmed, BookingError> {
        self.booking.confirm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VehicleCategory;
    use crate::domain::filter::CategoryFilter;

    #[test]
    fn default_state_shows_full_catalog_and_idle_booking() {
        let state = AppState::default();
        assert_eq!(state.filter.apply(state.catalog.list_all()), state.catalog.list_all());
        assert_eq!(state.booking, BookingFlow::Idle);
        assert_eq!(state.player.name, "xX_Player_Xx");
    }

    #[test]
    fn visible_vehicles_follow_filter_state() {
        let mut state = AppState::default();
        state.filter.category = CategoryFilter::Only(VehicleCategory::Boat);
        state.filter.search_term = "SPEED".to_string();

        let visible = state.filter.apply(state.catalog.list_all());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Speeder");
        assert_eq!(state.category_counts().all(), 6);
    }

    #[test]
    fn rental_round_trip_through_state() {
        let mut state = AppState::default();
        state.start_rental("5").expect("available vehicle");
        state.booking.change_duration(6).expect("known tier");

        let event = state.confirm_rental().expect("confirmed rental");
        assert_eq!(event.vehicle_id, "5");
        assert_eq!(event.duration_hours, 6);
        assert!(!state.booking.is_open());
    }

    #[test]
    fn unknown_vehicle_is_rejected() {
        let mut state = AppState::default();
        assert_eq!(
            state.start_rental("99"),
            Err(BookingError::VehicleUnavailable("99".to_string()))
        );
        assert!(!state.booking.is_open());
    }
}
