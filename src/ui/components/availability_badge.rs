use dioxus::prelude::*;

#[component]
pub fn AvailabilityBadge(available: bool) -> Element {
    let (label, color) = if available {
        (
            "Available",
            "bg-emerald-500/20 text-emerald-200 border-emerald-500/40",
        )
    } else {
        ("Rented", "bg-slate-700/70 text-slate-300 border-slate-600/60")
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold backdrop-blur {color}",
            "{label}"
        }
    }
}
