//! # codfis-registry — Place-of-Birth Registry
//!
//! Production implementation of [`codfis_core::PlaceResolver`]: a reference
//! dataset of municipality and country codes, loaded from YAML or JSON.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use codfis_core::{PersonalData, TaxCodeBuilder};
//! use codfis_registry::RegistryConfig;
//!
//! let registry = RegistryConfig::from_env().open()?;
//! let builder = TaxCodeBuilder::new(Arc::new(registry));
//! let data = PersonalData::parse("Mario", "Rossi", "M", "17/03/1985", "Roma")?;
//! println!("{}", builder.build(&data)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod registry;

pub use config::{RegistryConfig, PLACES_PATH_ENV};
pub use error::{RegistryError, RegistryResult};
pub use registry::{PlaceEntry, PlaceRegistry};
