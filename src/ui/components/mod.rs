pub mod availability_badge;
pub mod kpi_card;
pub mod player_stats;
pub mod rental_modal;
pub mod toast;
pub mod vehicle_card;
pub mod vehicle_filters;
