use std::{borrow::Cow, path::Path, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const VEHICLE_DIR: &str = "vehicles";
const PLACEHOLDER_IMAGE: &str = "vehicles/placeholder.svg";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();
static HERO_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("/assets/main.css")).as_str()
}

/// Returns the generated Tailwind bundle, or an empty sheet when it has not
/// been built yet.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| load_text("/assets/tailwind.css"))
        .as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/favicon.svg").unwrap_or_default())
        .as_str()
}

pub fn hero_data_uri() -> &'static str {
    HERO_DATA_URI
        .get_or_init(|| load_data_uri("/assets/hero.svg").unwrap_or_default())
        .as_str()
}

/// Resolves a vehicle image reference to something an `img` tag can show.
///
/// Absolute URIs pass through. Bare names are looked up under
/// `assets/vehicles/`; unknown names get the placeholder artwork.
pub fn vehicle_image_uri(image: &str) -> String {
    if image.starts_with("data:") || image.starts_with("http://") || image.starts_with("https://")
    {
        return image.to_string();
    }

    let path = format!("{VEHICLE_DIR}/{}", canonical_asset_path(image));
    load_data_uri(&path)
        .or_else(|| {
            tracing::warn!(image, "vehicle image not bundled; using placeholder");
            load_data_uri(PLACEHOLDER_IMAGE)
        })
        .unwrap_or_default()
}

fn load_text(path: &str) -> String {
    let Some(asset) = load_asset(path) else {
        tracing::warn!(path, "embedded stylesheet missing");
        return String::new();
    };
    String::from_utf8(asset.into_owned()).unwrap_or_else(|_| {
        tracing::warn!(path, "embedded stylesheet is not valid UTF-8");
        String::new()
    })
}

fn load_data_uri(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    let mime = guess_mime(path);
    let encoded = STANDARD.encode(asset.as_ref());
    Some(format!("data:{mime};base64,{encoded}"))
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    #[test]
    fn every_seed_vehicle_has_bundled_artwork() {
        for vehicle in Catalog::seed().list_all() {
            let path = format!("{VEHICLE_DIR}/{}", vehicle.image);
            assert!(load_asset(&path).is_some(), "missing artwork for {}", vehicle.image);
        }
    }

    #[test]
    fn unknown_image_uses_placeholder() {
        let placeholder = load_data_uri(PLACEHOLDER_IMAGE).expect("placeholder bundled");
        assert_eq!(vehicle_image_uri("tank-card.png"), placeholder);
    }

    #[test]
    fn absolute_uris_pass_through() {
        let uri = "https://example.com/adder.jpg";
        assert_eq!(vehicle_image_uri(uri), uri);
    }

    #[test]
    fn svg_assets_become_data_uris() {
        let uri = vehicle_image_uri("car-card.svg");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn strips_asset_prefix() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("vehicles/boat-card.svg"), "vehicles/boat-card.svg");
    }
}
