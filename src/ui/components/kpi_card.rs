use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, accent: bool) -> Element {
    let value_class = if accent {
        theme::text_primary()
    } else {
        "text-slate-100"
    };
    rsx! {
        div {
            class: "rounded-lg border border-slate-800 bg-slate-900/60 p-3",
            h4 { class: "{theme::label_class()}", "{title}" }
            p { class: "mt-1 text-xl font-semibold {value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted()}", "{desc}" }
            }
        }
    }
}
