//! # Place Resolver Interface
//!
//! Resolving a place of birth to its 4-character code depends on an external
//! reference dataset (the municipality and country registry), not on
//! computation. The engine only consumes the [`PlaceResolver`] contract:
//! an exact, case-insensitive name match yields a [`PlaceCode`]; anything
//! else is [`CodfisError::PlaceNotFound`].
//!
//! ## Architecture
//!
//! Production deployments plug in a dataset-backed registry (see the
//! `codfis-registry` crate). Tests use [`StaticPlaceResolver`], which holds
//! canned codes in memory.

use std::collections::HashMap;

use crate::error::CodfisError;
use crate::identity::PlaceCode;

/// Lookup of official place codes by place name.
///
/// Implementations must be `Send + Sync` so they can be shared behind an
/// `Arc`. The trait is object-safe to support runtime selection of the
/// backing dataset. A call is a single synchronous lookup with no retry.
pub trait PlaceResolver: Send + Sync {
    /// Resolve a place name to its code.
    ///
    /// Matching is exact but ignores case.
    ///
    /// # Errors
    ///
    /// Returns [`CodfisError::PlaceNotFound`] when no entry matches.
    fn resolve(&self, place: &str) -> Result<PlaceCode, CodfisError>;

    /// Human-readable name of this resolver implementation.
    fn resolver_name(&self) -> &str;
}

/// Normalized lookup key for a place name.
pub fn place_key(place: &str) -> String {
    place.to_uppercase()
}

/// In-memory resolver with a fixed set of places.
#[derive(Debug, Clone, Default)]
pub struct StaticPlaceResolver {
    places: HashMap<String, PlaceCode>,
}

impl StaticPlaceResolver {
    /// Create an empty resolver. Every lookup fails until places are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place, replacing any previous entry with the same name.
    pub fn insert(&mut self, name: &str, code: PlaceCode) {
        self.places.insert(place_key(name), code);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_place(mut self, name: &str, code: PlaceCode) -> Self {
        self.insert(name, code);
        self
    }

    /// Number of known places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether no places are known.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl PlaceResolver for StaticPlaceResolver {
    fn resolve(&self, place: &str) -> Result<PlaceCode, CodfisError> {
        self.places
            .get(&place_key(place))
            .cloned()
            .ok_or_else(|| CodfisError::PlaceNotFound {
                place: place.to_string(),
            })
    }

    fn resolver_name(&self) -> &str {
        "StaticPlaceResolver"
    }
}
