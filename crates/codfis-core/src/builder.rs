//! # Code Builder
//!
//! Orchestrates the encoders into a finished [`TaxCode`]:
//!
//! 1. surname fragment (3)
//! 2. given-name fragment (3)
//! 3. date and sex fragment (5)
//! 4. place code from the resolver (4)
//! 5. control character over the 15-character body
//!
//! The operation is all-or-nothing: any failure aborts the build and no
//! partial code is returned.

use std::sync::Arc;

use tracing::{debug, info};

use crate::date::encode_date;
use crate::error::CodfisError;
use crate::identity::TaxCode;
use crate::name::{encode_name, NameRole};
use crate::person::PersonalData;
use crate::place::PlaceResolver;

/// Computes tax codes against a shared place resolver.
///
/// Cheap to clone; clones share the same resolver.
#[derive(Clone)]
pub struct TaxCodeBuilder {
    resolver: Arc<dyn PlaceResolver>,
}

impl std::fmt::Debug for TaxCodeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxCodeBuilder")
            .field("resolver", &self.resolver.resolver_name())
            .finish()
    }
}

impl TaxCodeBuilder {
    /// Create a builder that resolves places through `resolver`.
    pub fn new(resolver: Arc<dyn PlaceResolver>) -> Self {
        Self { resolver }
    }

    /// The resolver this builder uses.
    pub fn resolver(&self) -> &dyn PlaceResolver {
        self.resolver.as_ref()
    }

    /// Compute the tax code for `data`.
    ///
    /// # Errors
    ///
    /// - [`CodfisError::PlaceNotFound`] propagated from the resolver.
    /// - [`CodfisError::InvalidCharacter`] if an encoded name contains a
    ///   symbol outside `0-9A-Z` (apostrophes, accented vowels, ...).
    pub fn build(&self, data: &PersonalData) -> Result<TaxCode, CodfisError> {
        let surname = encode_name(data.surname(), NameRole::Surname);
        let name = encode_name(data.name(), NameRole::GivenName);
        debug!(%surname, %name, "encoded name fragments");

        let date = encode_date(data.date_of_birth(), data.sex());
        debug!(%date, "encoded date fragment");

        let place = self.resolver.resolve(data.place_of_birth())?;
        debug!(
            place = %place,
            resolver = self.resolver.resolver_name(),
            "resolved place of birth"
        );

        let body = format!("{surname}{name}{date}{place}");
        let code = TaxCode::from_body(&body)?;
        info!(control = %code.control(), "tax code computed");
        Ok(code)
    }
}
