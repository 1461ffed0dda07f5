use dioxus::prelude::*;

use super::availability_badge::AvailabilityBadge;
use crate::domain::{Vehicle, VehicleId};
use crate::ui::theme;
use crate::util::{assets, format_money};

#[component]
pub fn VehicleCard(vehicle: Vehicle, on_rent: EventHandler<VehicleId>) -> Element {
    let image = assets::vehicle_image_uri(&vehicle.image);
    let rate = format_money(vehicle.hourly_price);
    let available = vehicle.available;
    let button_label = if available { "Rent Now" } else { "Not Available" };
    let vehicle_id = vehicle.id.clone();

    rsx! {
        div {
            class: "{theme::card()}",
            div { class: "relative overflow-hidden",
                img {
                    class: "h-48 w-full object-cover group-zoom transition-smooth",
                    src: "{image}",
                    alt: "{vehicle.name}",
                }
                div { class: "absolute right-3 top-3 z-10",
                    AvailabilityBadge { available }
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-slate-950/80 to-transparent" }
            }
            div { class: "space-y-4 p-6",
                div {
                    h3 {
                        class: "text-xl font-bold text-slate-100 transition-smooth group-hover:text-purple-300",
                        "{vehicle.name}"
                    }
                    p { class: "capitalize {theme::text_muted()}", "{vehicle.category}" }
                }
                div { class: "flex items-center justify-between text-sm",
                    span { class: "flex items-center gap-2 text-pink-300", "⚙️ {vehicle.max_speed} mph" }
                    span { class: "flex items-center gap-2 font-semibold {theme::text_primary()}", "{rate}/hr" }
                }
                button {
                    class: "{theme::rent_button(available)}",
                    disabled: !available,
                    onclick: move |_| on_rent.call(vehicle_id.clone()),
                    "🕒 {button_label}"
                }
            }
        }
    }
}
