use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::{
    assets,
    version::{version_label, APP_NAME},
};

/// Tablet bezel, hero banner and footer around the page content.
#[component]
pub fn Shell(children: Element) -> Element {
    let hero = assets::hero_data_uri();
    let version = version_label();

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-600 p-4 font-sans",
            div { class: "relative h-[880px] w-[1650px]",
                div { class: "tablet-frame relative h-full w-full bg-slate-800 p-8",
                    // Home button
                    div {
                        class: "absolute bottom-4 left-1/2 flex h-12 w-12 -translate-x-1/2 items-center justify-center rounded-full bg-slate-700 shadow-inner",
                        div { class: "h-6 w-6 rounded-full bg-slate-600" }
                    }
                    // Camera
                    div { class: "absolute left-1/2 top-4 h-3 w-3 -translate-x-1/2 rounded-full bg-slate-900" }

                    div { class: "h-full w-full overflow-hidden rounded-lg bg-slate-950 shadow-inner",
                        div { class: "h-full w-full overflow-auto text-slate-100",
                            header { class: "relative h-80 overflow-hidden",
                                img { class: "h-full w-full object-cover", src: "{hero}", alt: "Hero car" }
                                div { class: "absolute inset-0 bg-gradient-to-r from-slate-950/90 via-slate-950/50 to-transparent" }
                                div { class: "absolute inset-0 flex items-center",
                                    div { class: "mx-auto w-full max-w-7xl px-6 lg:px-8",
                                        div { class: "max-w-2xl",
                                            h1 { class: "mb-4 text-5xl font-bold",
                                                span { class: "text-gradient", "FiveM" }
                                                " {APP_NAME}"
                                            }
                                            p { class: "mb-6 text-xl {theme::text_muted()}",
                                                "Rent the fastest cars, bikes, boats, and aircraft in Los Santos. Your adventure starts here."
                                            }
                                        }
                                    }
                                }
                            }

                            main { {children} }

                            footer { class: "border-t border-slate-900 px-6 py-4 text-center text-xs text-slate-600",
                                "{APP_NAME} {version}"
                            }
                        }
                    }
                }
            }
        }
    }
}
