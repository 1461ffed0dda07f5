use dioxus::prelude::*;

use crate::{
    domain::{AppState, CategoryFilter, RentalConfirmed, VehicleId},
    ui::components::{
        player_stats::PlayerStats,
        rental_modal::RentalModal,
        toast::{push_titled_toast, ToastKind, ToastMessage},
        vehicle_card::VehicleCard,
        vehicle_filters::VehicleFilters,
    },
    util::plural_suffix,
};

#[component]
pub fn CatalogPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Recompute the grid only when the search term or category changes.
    let filter = use_memo(move || state.with(|st| st.filter.clone()));
    let visible = use_memo(move || {
        let filter = filter();
        filter.apply(state.peek().catalog.list_all())
    });
    let counts = use_memo(move || state.with(|st| st.category_counts()));

    let player = state.with(|st| st.player.clone());
    let selection = state.with(|st| st.booking.selection().cloned());
    let current_filter = filter();
    let vehicles = visible();
    let found = vehicles.len();

    let on_search = {
        let mut state = state.clone();
        move |term: String| state.with_mut(|st| st.filter.search_term = term)
    };

    let on_category = {
        let mut state = state.clone();
        move |category: CategoryFilter| state.with_mut(|st| st.filter.category = category)
    };

    let on_rent = {
        let mut state = state.clone();
        move |vehicle_id: VehicleId| {
            if let Err(err) = state.with_mut(|st| st.start_rental(&vehicle_id)) {
                tracing::debug!(%err, "rent action ignored");
            }
        }
    };

    let on_duration = {
        let mut state = state.clone();
        move |hours: u32| {
            if let Err(err) = state.with_mut(|st| st.booking.change_duration(hours)) {
                tracing::debug!(%err, "duration change ignored");
            }
        }
    };

    let on_cancel = {
        let mut state = state.clone();
        move |_: ()| {
            state.with_mut(|st| st.booking.cancel());
        }
    };

    let on_confirm = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_: ()| match state.with_mut(|st| st.confirm_rental()) {
            Ok(event) => announce_rental(toasts.clone(), &event),
            Err(err) => tracing::debug!(%err, "confirm ignored"),
        }
    };

    rsx! {
        div { class: "mx-auto max-w-7xl px-6 py-12 lg:px-8",
            div { class: "grid grid-cols-1 gap-8 lg:grid-cols-4",
                aside { class: "space-y-6 lg:col-span-1",
                    PlayerStats { player }
                    VehicleFilters {
                        search_term: current_filter.search_term.clone(),
                        selected: current_filter.category,
                        counts: counts(),
                        on_search,
                        on_category,
                    }
                }

                section { class: "lg:col-span-3",
                    div { class: "mb-8 flex items-center justify-between",
                        h2 { class: "text-3xl font-bold text-slate-100", "Available Vehicles" }
                        p { class: "text-slate-400", "{found} vehicle{plural_suffix(found)} found" }
                    }

                    div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 xl:grid-cols-3",
                        for vehicle in vehicles {
                            VehicleCard { key: "{vehicle.id}", vehicle: vehicle.clone(), on_rent }
                        }
                    }

                    if found == 0 {
                        div { class: "py-12 text-center",
                            p { class: "text-xl text-slate-400", "No vehicles found matching your criteria." }
                        }
                    }
                }
            }
        }

        if let Some(selection) = selection {
            RentalModal { selection, on_duration, on_cancel, on_confirm }
        }
    }
}

/// Turns a confirmation event into the success toast.
fn announce_rental(toasts: Signal<Vec<ToastMessage>>, event: &RentalConfirmed) {
    push_titled_toast(
        toasts,
        ToastKind::Success,
        RentalConfirmed::TITLE,
        event.message(),
    );
}
