//! # Place Registry
//!
//! A [`PlaceResolver`] backed by a reference dataset of place names and their
//! official codes. The dataset is a YAML or JSON document:
//!
//! ```yaml
//! places:
//!   - name: Roma
//!     code: H501
//!   - name: Francia
//!     code: Z110
//! ```
//!
//! Names are indexed by their uppercased form, so lookups are exact but
//! case-insensitive. The registry is immutable after loading and can be
//! shared across threads without locking.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use codfis_core::{place_key, CodfisError, PlaceCode, PlaceResolver};

use crate::error::{RegistryError, RegistryResult};

/// Dataset compiled into the crate.
const BUNDLED_DATASET: &str = include_str!("../data/places.yaml");

/// One row of the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceEntry {
    /// Place name as officially spelled.
    pub name: String,
    /// Official 4-character code, validated on load.
    pub code: String,
}

impl PlaceEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Dataset {
    places: Vec<PlaceEntry>,
}

/// In-memory index of the place reference dataset.
#[derive(Debug, Clone)]
pub struct PlaceRegistry {
    places: BTreeMap<String, PlaceCode>,
    origin: String,
}

impl PlaceRegistry {
    /// Build a registry from dataset rows.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidCode`] if a code is not 4 characters in `0-9A-Z`.
    /// - [`RegistryError::DuplicatePlace`] if two names collide ignoring case.
    pub fn from_entries(
        entries: impl IntoIterator<Item = PlaceEntry>,
        origin: impl Into<String>,
    ) -> RegistryResult<Self> {
        let mut places: BTreeMap<String, PlaceCode> = BTreeMap::new();
        for entry in entries {
            let code = PlaceCode::new(entry.code).map_err(|source| RegistryError::InvalidCode {
                place: entry.name.clone(),
                source,
            })?;
            let key = place_key(&entry.name);
            if let Some(existing) = places.get(&key) {
                return Err(RegistryError::DuplicatePlace {
                    place: entry.name,
                    existing: existing.to_string(),
                });
            }
            places.insert(key, code);
        }

        let registry = Self {
            places,
            origin: origin.into(),
        };
        tracing::info!(
            origin = %registry.origin,
            places = registry.len(),
            "loaded place registry"
        );
        Ok(registry)
    }

    /// Load the dataset compiled into this crate.
    ///
    /// Covers major Italian municipalities and common foreign countries; use
    /// [`PlaceRegistry::load`] for a complete dataset.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file is malformed.
    pub fn bundled() -> RegistryResult<Self> {
        Self::from_yaml_str(BUNDLED_DATASET, Path::new("<bundled>"))
    }

    /// Load a dataset file. `.json` files are parsed as JSON, everything
    /// else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed, or if
    /// any entry is invalid.
    pub fn load(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RegistryError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RegistryError::Io(e)
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content, path)
        } else {
            Self::from_yaml_str(&content, path)
        }
    }

    fn from_yaml_str(content: &str, path: &Path) -> RegistryResult<Self> {
        let dataset: Dataset =
            serde_yaml::from_str(content).map_err(|source| RegistryError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_entries(dataset.places, path.display().to_string())
    }

    fn from_json_str(content: &str, path: &Path) -> RegistryResult<Self> {
        let dataset: Dataset =
            serde_json::from_str(content).map_err(|source| RegistryError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_entries(dataset.places, path.display().to_string())
    }

    /// Number of places in the registry.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the registry holds no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Normalized (uppercased) place names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.places.keys().map(String::as_str)
    }

    /// Where the dataset was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl PlaceResolver for PlaceRegistry {
    fn resolve(&self, place: &str) -> Result<PlaceCode, CodfisError> {
        match self.places.get(&place_key(place)) {
            Some(code) => Ok(code.clone()),
            None => {
                tracing::warn!(place, origin = %self.origin, "place not found in registry");
                Err(CodfisError::PlaceNotFound {
                    place: place.to_string(),
                })
            }
        }
    }

    fn resolver_name(&self) -> &str {
        "PlaceRegistry"
    }
}
