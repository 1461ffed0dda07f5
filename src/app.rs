use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastKind, ToastMessage},
        pages::CatalogPage,
        shell::Shell,
    },
    util::{assets, config::load_startup_data},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Catalog {},
}

#[component]
pub fn App() -> Element {
    // Fleet and player are read once; nothing writes them back.
    let startup = use_hook(load_startup_data);

    let state = use_signal({
        let startup = startup.clone();
        move || AppState::new(startup.catalog, startup.player)
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(move || {
        startup
            .warning
            .clone()
            .map(|warning| vec![ToastMessage::new(ToastKind::Warning, warning)])
            .unwrap_or_default()
    });
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::tailwind_css()}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Catalog() -> Element {
    rsx! { Shell { CatalogPage {} } }
}
