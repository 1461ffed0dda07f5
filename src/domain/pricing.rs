//! Rental duration tiers and total price calculation.
//!
//! Totals use exact decimal math so multipliers like 2.8 never pick up float
//! noise before rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::entities::Vehicle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DurationTier {
    #[default]
    OneHour,
    ThreeHours,
    SixHours,
    TwelveHours,
    OneDay,
}

impl DurationTier {
    pub const ALL: [DurationTier; 5] = [
        DurationTier::OneHour,
        DurationTier::ThreeHours,
        DurationTier::SixHours,
        DurationTier::TwelveHours,
        DurationTier::OneDay,
    ];

    pub fn hours(&self) -> u32 {
        match self {
            Self::OneHour => 1,
            Self::ThreeHours => 3,
            Self::SixHours => 6,
            Self::TwelveHours => 12,
            Self::OneDay => 24,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneHour => "1 Hour",
            Self::ThreeHours => "3 Hours",
            Self::SixHours => "6 Hours",
            Self::TwelveHours => "12 Hours",
            Self::OneDay => "24 Hours",
        }
    }

    /// Longer rentals are discounted relative to `hours * rate`.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::OneHour => dec!(1),
            Self::ThreeHours => dec!(2.8),
            Self::SixHours => dec!(5.5),
            Self::TwelveHours => dec!(10.8),
            Self::OneDay => dec!(20),
        }
    }

    pub fn from_hours(hours: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.hours() == hours)
    }
}

/// Whole-dollar total for renting `vehicle` for `tier`.
pub fn price(vehicle: &Vehicle, tier: DurationTier) -> Decimal {
    round_whole(vehicle.hourly_price * tier.multiplier())
}

/// Total for an arbitrary hour count. Counts outside the tier table fall back
/// to the plain hourly rate.
pub fn quote(vehicle: &Vehicle, hours: u32) -> Decimal {
    match DurationTier::from_hours(hours) {
        Some(tier) => price(vehicle, tier),
        None => vehicle.hourly_price,
    }
}

/// Every tier with its total, in dropdown order.
pub fn price_options(vehicle: &Vehicle) -> Vec<(DurationTier, Decimal)> {
    DurationTier::ALL
        .into_iter()
        .map(|tier| (tier, price(vehicle, tier)))
        .collect()
}

fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use rstest::rstest;

    fn vehicle_priced(hourly_price: Decimal) -> Vehicle {
        let mut vehicle = Catalog::seed().list_all()[0].clone();
        vehicle.hourly_price = hourly_price;
        vehicle
    }

    #[rstest]
    #[case(dec!(150), DurationTier::ThreeHours, dec!(420))]
    #[case(dec!(75), DurationTier::OneDay, dec!(1500))]
    #[case(dec!(90), DurationTier::SixHours, dec!(495))]
    #[case(dec!(200), DurationTier::TwelveHours, dec!(2160))]
    #[case(dec!(120), DurationTier::ThreeHours, dec!(336))]
    fn prices_known_pairs(
        #[case] hourly: Decimal,
        #[case] tier: DurationTier,
        #[case] expected: Decimal,
    ) {
        assert_eq!(price(&vehicle_priced(hourly), tier), expected);
    }

    #[test]
    fn one_hour_price_equals_hourly_rate() {
        for vehicle in Catalog::seed().list_all() {
            assert_eq!(price(vehicle, DurationTier::OneHour), vehicle.hourly_price);
        }
    }

    #[rstest]
    #[case(dec!(12.5), DurationTier::OneHour, dec!(13))]
    #[case(dec!(2.5), DurationTier::ThreeHours, dec!(7))]
    #[case(dec!(0.25), DurationTier::OneDay, dec!(5))]
    fn rounds_half_away_from_zero(
        #[case] hourly: Decimal,
        #[case] tier: DurationTier,
        #[case] expected: Decimal,
    ) {
        assert_eq!(price(&vehicle_priced(hourly), tier), expected);
    }

    #[rstest]
    #[case(1, Some(DurationTier::OneHour))]
    #[case(12, Some(DurationTier::TwelveHours))]
    #[case(24, Some(DurationTier::OneDay))]
    #[case(0, None)]
    #[case(2, None)]
    #[case(48, None)]
    fn looks_up_tiers_by_hours(#[case] hours: u32, #[case] expected: Option<DurationTier>) {
        assert_eq!(DurationTier::from_hours(hours), expected);
    }

    #[test]
    fn quote_falls_back_to_hourly_rate_for_unknown_hours() {
        let vehicle = vehicle_priced(dec!(150));
        assert_eq!(quote(&vehicle, 3), dec!(420));
        assert_eq!(quote(&vehicle, 5), dec!(150));
    }

    #[test]
    fn price_options_cover_every_tier_in_order() {
        let options = price_options(&vehicle_priced(dec!(180)));
        let hours: Vec<_> = options.iter().map(|(tier, _)| tier.hours()).collect();
        assert_eq!(hours, [1, 3, 6, 12, 24]);
        assert_eq!(options[4].1, dec!(3600));
    }
}
