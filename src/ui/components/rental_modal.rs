use dioxus::prelude::*;

use crate::domain::{price_options, BookingSelection};
use crate::ui::theme;
use crate::util::{assets, format_money};

#[component]
pub fn RentalModal(
    selection: BookingSelection,
    on_duration: EventHandler<u32>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let vehicle = &selection.vehicle;
    let image = assets::vehicle_image_uri(&vehicle.image);
    let options = price_options(vehicle);
    let current_hours = selection.tier.hours();
    let base_rate = format_money(vehicle.hourly_price);
    let total = format_money(selection.total_price());

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-slate-950/70 modal-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "w-full max-w-md space-y-6 rounded-2xl border border-slate-800 bg-gradient-card p-6 shadow-2xl",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h2 { class: "text-center text-2xl font-bold text-gradient", "Rent Vehicle" }

                div { class: "relative",
                    img {
                        class: "h-40 w-full rounded-lg object-cover",
                        src: "{image}",
                        alt: "{vehicle.name}",
                    }
                    div { class: "absolute inset-0 rounded-lg bg-gradient-to-t from-slate-950/60 to-transparent" }
                    div { class: "absolute bottom-4 left-4",
                        h3 { class: "text-xl font-bold text-slate-100", "{vehicle.name}" }
                        span { class: "{theme::badge_category()}", "{vehicle.category}" }
                    }
                }

                div {
                    label { class: "{theme::label_class()}", r#for: "rental-duration", "Rental Duration" }
                    select {
                        id: "rental-duration",
                        class: "{theme::select_class()}",
                        value: "{current_hours}",
                        onchange: move |evt: FormEvent| {
                            let raw = evt.value();
                            match raw.parse::<u32>() {
                                Ok(hours) => on_duration.call(hours),
                                Err(err) => tracing::warn!(value = %raw, error = %err, "unparseable duration option"),
                            }
                        },
                        for (tier, price) in options {
                            option {
                                key: "{tier.hours()}",
                                value: "{tier.hours()}",
                                selected: tier == selection.tier,
                                "{tier.label()} · {format_money(price)}"
                            }
                        }
                    }
                }

                div { class: "space-y-3 rounded-lg bg-slate-800/30 p-4",
                    SummaryRow { label: "🕒 Duration", value: selection.tier.label().to_string() }
                    SummaryRow { label: "💲 Base Rate", value: format!("{base_rate}/hr") }
                    div { class: "border-t border-slate-700 pt-3",
                        div { class: "flex items-center justify-between text-lg",
                            span { class: "font-bold {theme::text_primary()}", "💳 Total Cost" }
                            span { class: "text-2xl font-bold {theme::text_primary()}", "{total}" }
                        }
                    }
                }

                div { class: "flex gap-3",
                    button {
                        class: "flex-1 {theme::btn_outline()}",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "flex-1 {theme::btn_gaming()}",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm Rental"
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            span { class: "{theme::text_muted()}", "{label}" }
            span { class: "font-semibold text-slate-100", "{value}" }
        }
    }
}
