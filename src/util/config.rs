use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;

use crate::domain::{seed_player, Catalog, CatalogError, PlayerProfile, Vehicle};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "VehicleRentalTablet";
const APP_NAME: &str = "VehicleRentalTablet";
const CATALOG_FILE: &str = "catalog.json";

/// Optional fleet override read from the config directory.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    player: Option<PlayerProfile>,
    vehicles: Vec<Vehicle>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StartupData {
    pub catalog: Catalog,
    pub player: PlayerProfile,
    /// Set when an override existed but could not be used.
    pub warning: Option<String>,
}

impl StartupData {
    fn seed() -> Self {
        Self {
            catalog: Catalog::seed(),
            player: seed_player(),
            warning: None,
        }
    }
}

fn catalog_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CATALOG_FILE))
}

/// Loads the fleet from `catalog.json` when one exists, otherwise the
/// built-in seed. A broken file never prevents startup.
pub fn load_startup_data() -> StartupData {
    match catalog_file() {
        Some(path) => load_startup_data_from(&path),
        None => {
            tracing::debug!("no config directory available; using built-in fleet");
            StartupData::seed()
        }
    }
}

pub fn load_startup_data_from(path: &Path) -> StartupData {
    match read_catalog_file(path) {
        Ok(Some((catalog, player))) => {
            tracing::info!(
                path = %path.display(),
                vehicles = catalog.len(),
                "loaded fleet override"
            );
            StartupData {
                catalog,
                player,
                warning: None,
            }
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "no fleet override; using built-in fleet");
            StartupData::seed()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring invalid fleet override");
            StartupData {
                warning: Some(format!("Ignored {CATALOG_FILE}: {err}")),
                ..StartupData::seed()
            }
        }
    }
}

fn read_catalog_file(path: &Path) -> Result<Option<(Catalog, PlayerProfile)>, ConfigLoadError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let file: CatalogFile = serde_json::from_str(&data)?;
    let catalog = Catalog::new(file.vehicles)?;
    Ok(Some((catalog, file.player.unwrap_or_else(seed_player))))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
