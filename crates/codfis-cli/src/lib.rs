//! # codfis-cli — Tax Code Command-Line Interface
//!
//! Provides the `codfis` command-line interface over `codfis-core`.
//!
//! ## Subcommands
//!
//! - `codfis args` — Read the personal data from positional arguments.
//! - `codfis input` — Prompt for the personal data on stdin.
//!
//! ```bash
//! codfis args Mario Rossi M 17/03/1985 Roma
//! codfis --json input
//! codfis --places comuni.yaml args Anna Bianchi f 01/01/1990 Cuneo
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers take their reader and writer as parameters so they can be
//!   driven from tests.

pub mod generate;
pub mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use codfis_core::TaxCodeBuilder;
use codfis_registry::RegistryConfig;

/// Build a [`TaxCodeBuilder`] over the place registry `config` selects.
pub fn open_builder(config: &RegistryConfig) -> Result<TaxCodeBuilder> {
    let registry = config.open().context("failed to load place registry")?;
    tracing::debug!(
        origin = registry.origin(),
        places = registry.len(),
        "place registry ready"
    );
    Ok(TaxCodeBuilder::new(Arc::new(registry)))
}
