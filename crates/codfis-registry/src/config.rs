//! Registry configuration.
//!
//! Chooses which place dataset to load. Defaults to the bundled dataset;
//! override via environment variable or explicit construction.

use std::path::PathBuf;

use crate::error::RegistryResult;
use crate::registry::PlaceRegistry;

/// Environment variable naming a dataset file.
pub const PLACES_PATH_ENV: &str = "CODFIS_PLACES_PATH";

/// Where to load the place registry from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Dataset file (YAML or JSON). `None` selects the bundled dataset.
    pub places_path: Option<PathBuf>,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CODFIS_PLACES_PATH` (optional; empty values are ignored)
    pub fn from_env() -> Self {
        Self {
            places_path: env_path(PLACES_PATH_ENV),
        }
    }

    /// Use an explicit dataset file, overriding anything from the environment.
    pub fn with_places_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.places_path = Some(path.into());
        self
    }

    /// Open the configured registry.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError`](crate::RegistryError) from loading.
    pub fn open(&self) -> RegistryResult<PlaceRegistry> {
        match &self.places_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading place dataset from file");
                PlaceRegistry::load(path)
            }
            None => PlaceRegistry::bundled(),
        }
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
