use dioxus::prelude::*;

use crate::domain::{CategoryCounts, CategoryFilter};
use crate::ui::theme;

#[component]
pub fn VehicleFilters(
    search_term: String,
    selected: CategoryFilter,
    counts: CategoryCounts,
    on_search: EventHandler<String>,
    on_category: EventHandler<CategoryFilter>,
) -> Element {
    let buttons = CategoryFilter::OPTIONS
        .into_iter()
        .map(|option| (option, counts.for_filter(option), option == selected))
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "{theme::panel()} space-y-5",
            div { class: "relative",
                span {
                    class: "pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-sm {theme::text_muted()}",
                    "🔍"
                }
                input {
                    class: "{theme::input_class()}",
                    r#type: "search",
                    placeholder: "Search vehicles...",
                    value: "{search_term}",
                    oninput: move |evt: FormEvent| on_search.call(evt.value()),
                }
            }
            div { class: "flex flex-wrap gap-2",
                for (option, count, active) in buttons {
                    button {
                        key: "{option.id()}",
                        class: "{theme::category_button(active)}",
                        onclick: move |_| on_category.call(option),
                        span { "{option.emoji()}" }
                        span { "{option.label()}" }
                        span { class: "{theme::badge_count()}", "{count}" }
                    }
                }
            }
        }
    }
}
