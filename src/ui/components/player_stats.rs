use dioxus::prelude::*;

use super::kpi_card::KpiCard;
use crate::domain::PlayerProfile;
use crate::ui::theme;
use crate::util::format_money;

#[component]
pub fn PlayerStats(player: PlayerProfile) -> Element {
    let initial = player
        .name
        .chars()
        .find(|ch| ch.is_alphanumeric())
        .map(|ch| ch.to_ascii_uppercase())
        .unwrap_or('?');

    rsx! {
        div {
            class: "{theme::panel()} space-y-4",
            div { class: "flex items-center gap-3",
                div {
                    class: "flex h-11 w-11 items-center justify-center rounded-full bg-gradient-primary text-lg font-bold text-white",
                    "{initial}"
                }
                div {
                    p { class: "{theme::label_class()}", "Player" }
                    h3 { class: "text-lg font-semibold text-slate-100", "{player.name}" }
                }
            }
            KpiCard {
                title: "Balance".to_string(),
                value: format_money(player.balance),
                description: None,
                accent: true,
            }
            div { class: "grid grid-cols-2 gap-3",
                KpiCard {
                    title: "Active".to_string(),
                    value: player.active_rentals.to_string(),
                    description: Some("rentals".to_string()),
                    accent: false,
                }
                KpiCard {
                    title: "Total".to_string(),
                    value: player.total_rentals.to_string(),
                    description: Some("all time".to_string()),
                    accent: false,
                }
            }
        }
    }
}
