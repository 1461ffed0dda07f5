//! Rental modal state machine.
//!
//! `Idle` means the modal is closed. `Selecting` always carries a vehicle, so
//! an open modal without one cannot be represented.

use rust_decimal::Decimal;
use thiserror::Error;

use super::entities::{Vehicle, VehicleId};
use super::pricing::{self, DurationTier};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("vehicle {0} is not available for rent")]
    VehicleUnavailable(VehicleId),
    #[error("no vehicle is selected")]
    NoActiveSelection,
    #[error("no rental tier lasts {0} hours")]
    UnknownDurationTier(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingSelection {
    pub vehicle: Vehicle,
    pub tier: DurationTier,
}

impl BookingSelection {
    /// Whole-dollar total shown in the modal for the chosen tier.
    pub fn total_price(&self) -> Decimal {
        pricing::quote(&self.vehicle, self.tier.hours())
    }
}

/// Emitted once per confirmed rental for the notification layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RentalConfirmed {
    pub vehicle_id: VehicleId,
    pub vehicle_name: String,
    pub duration_hours: u32,
}

impl RentalConfirmed {
    pub const TITLE: &'static str = "Rental Confirmed!";

    pub fn message(&self) -> String {
        let suffix = if self.duration_hours > 1 { "s" } else { "" };
        format!(
            "You've rented the {} for {} hour{suffix}.",
            self.vehicle_name, self.duration_hours
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BookingFlow {
    #[default]
    Idle,
    Selecting(BookingSelection),
}

impl BookingFlow {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Selecting(_))
    }

    pub fn selection(&self) -> Option<&BookingSelection> {
        match self {
            Self::Idle => None,
            Self::Selecting(selection) => Some(selection),
        }
    }

    /// Opens the modal for `vehicle` with the one-hour tier. Replaces any
    /// current selection.
    pub fn select(&mut self, vehicle: &Vehicle) -> Result<(), BookingError> {
        if !vehicle.available {
            tracing::warn!(vehicle_id = %vehicle.id, "rejected selection of unavailable vehicle");
            return Err(BookingError::VehicleUnavailable(vehicle.id.clone()));
        }

        tracing::debug!(vehicle_id = %vehicle.id, "vehicle selected for rental");
        *self = Self::Selecting(BookingSelection {
            vehicle: vehicle.clone(),
            tier: DurationTier::default(),
        });
        Ok(())
    }

    pub fn change_duration(&mut self, hours: u32) -> Result<DurationTier, BookingError> {
        let Self::Selecting(selection) = self else {
            tracing::warn!(hours, "duration change without an active selection");
            return Err(BookingError::NoActiveSelection);
        };

        let Some(tier) = DurationTier::from_hours(hours) else {
            tracing::warn!(hours, "rejected unknown rental duration");
            return Err(BookingError::UnknownDurationTier(hours));
        };

        tracing::debug!(vehicle_id = %selection.vehicle.id, hours, "rental duration changed");
        selection.tier = tier;
        Ok(tier)
    }

    /// Closes the modal and reports the rental. Availability is left as is.
    pub fn confirm(&mut self) -> Result<RentalConfirmed, BookingError> {
        match std::mem::take(self) {
            Self::Idle => {
                tracing::warn!("confirm without an active selection");
                Err(BookingError::NoActiveSelection)
            }
            Self::Selecting(selection) => {
                let event = RentalConfirmed {
                    vehicle_id: selection.vehicle.id,
                    vehicle_name: selection.vehicle.name,
                    duration_hours: selection.tier.hours(),
                };
                tracing::info!(
                    vehicle_id = %event.vehicle_id,
                    hours = event.duration_hours,
                    "rental confirmed"
                );
                Ok(event)
            }
        }
    }

    /// Closes the modal without emitting anything. Returns whether a selection
    /// was discarded.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Idle;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::seed()
    }

    fn vehicle<'a>(catalog: &'a Catalog, id: &str) -> &'a Vehicle {
        catalog.find(id).expect("seed vehicle")
    }

    #[rstest]
    fn selecting_opens_with_one_hour_tier(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "1")).expect("available vehicle");

        let selection = flow.selection().expect("open selection");
        assert_eq!(selection.vehicle.id, "1");
        assert_eq!(selection.tier, DurationTier::OneHour);
        assert_eq!(selection.total_price(), dec!(150));
    }

    #[rstest]
    fn unavailable_vehicle_stays_idle(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        let result = flow.select(vehicle(&catalog, "3"));

        assert_eq!(result, Err(BookingError::VehicleUnavailable("3".to_string())));
        assert_eq!(flow, BookingFlow::Idle);
    }

    #[rstest]
    fn unavailable_vehicle_keeps_existing_selection(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "2")).expect("available vehicle");
        flow.change_duration(6).expect("known tier");
        let before = flow.clone();

        assert!(flow.select(vehicle(&catalog, "3")).is_err());
        assert_eq!(flow, before);
    }

    #[rstest]
    fn reselecting_replaces_vehicle_and_resets_tier(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "1")).expect("available vehicle");
        flow.change_duration(24).expect("known tier");
        flow.select(vehicle(&catalog, "4")).expect("available vehicle");

        let selection = flow.selection().expect("open selection");
        assert_eq!(selection.vehicle.id, "4");
        assert_eq!(selection.tier, DurationTier::OneHour);
    }

    #[rstest]
    fn changing_duration_keeps_vehicle_and_updates_total(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "1")).expect("available vehicle");

        assert_eq!(flow.change_duration(3), Ok(DurationTier::ThreeHours));
        let selection = flow.selection().expect("open selection");
        assert_eq!(selection.vehicle.id, "1");
        assert_eq!(selection.total_price(), dec!(420));
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(36)]
    fn unknown_duration_is_rejected_without_change(catalog: Catalog, #[case] hours: u32) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "5")).expect("available vehicle");
        flow.change_duration(12).expect("known tier");
        let before = flow.clone();

        assert_eq!(
            flow.change_duration(hours),
            Err(BookingError::UnknownDurationTier(hours))
        );
        assert_eq!(flow, before);
    }

    #[test]
    fn idle_rejects_duration_change_and_confirm() {
        let mut flow = BookingFlow::Idle;
        assert_eq!(flow.change_duration(3), Err(BookingError::NoActiveSelection));
        assert_eq!(flow.confirm(), Err(BookingError::NoActiveSelection));
        assert_eq!(flow, BookingFlow::Idle);
    }

    #[rstest]
    fn confirm_emits_one_event_and_returns_to_idle(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "2")).expect("available vehicle");
        flow.change_duration(24).expect("known tier");

        let event = flow.confirm().expect("confirmed rental");
        assert_eq!(
            event,
            RentalConfirmed {
                vehicle_id: "2".to_string(),
                vehicle_name: "Akuma Sport".to_string(),
                duration_hours: 24,
            }
        );
        assert_eq!(flow, BookingFlow::Idle);
        assert_eq!(flow.confirm(), Err(BookingError::NoActiveSelection));
    }

    #[rstest]
    fn confirm_leaves_catalog_availability_untouched(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "6")).expect("available vehicle");
        flow.confirm().expect("confirmed rental");

        assert!(vehicle(&catalog, "6").available);
        assert!(flow.select(vehicle(&catalog, "6")).is_ok());
    }

    #[rstest]
    fn cancel_discards_selection(catalog: Catalog) {
        let mut flow = BookingFlow::Idle;
        flow.select(vehicle(&catalog, "4")).expect("available vehicle");

        assert!(flow.cancel());
        assert_eq!(flow, BookingFlow::Idle);
        assert!(!flow.cancel());
    }

    #[rstest]
    #[case(1, "You've rented the Zentorno for 1 hour.")]
    #[case(12, "You've rented the Zentorno for 12 hours.")]
    fn confirmation_message_pluralises_hours(#[case] hours: u32, #[case] expected: &str) {
        let event = RentalConfirmed {
            vehicle_id: "4".to_string(),
            vehicle_name: "Zentorno".to_string(),
            duration_hours: hours,
        };
        assert_eq!(event.message(), expected);
    }
}
