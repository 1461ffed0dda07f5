#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::version::{version_label, APP_NAME};

fn main() {
    init_tracing();

    apply_wayland_render_defaults();

    tracing::info!(version = %version_label(), "starting {APP_NAME}");

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_inner_size(LogicalSize::new(1720.0, 960.0))
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

/// Installs the fmt subscriber before launch so the Dioxus default logger
/// finds a dispatcher already set and stays out of the way.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing subscriber already installed: {err}");
    }
}

/// Explicit sync on Wayland crashes the webview on some drivers. Pick the GL
/// backend and the non-DMABUF renderer unless the user already set them.
fn apply_wayland_render_defaults() {
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        return;
    }

    for (key, value) in [
        ("WGPU_BACKEND", "gl"),
        ("WEBKIT_DISABLE_DMABUF_RENDERER", "1"),
    ] {
        if std::env::var_os(key).is_none() {
            tracing::debug!(key, value, "applying wayland render default");
            std::env::set_var(key, value);
        }
    }
}
