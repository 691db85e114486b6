//! # codfis-core — Tax Code Encoding Engine
//!
//! Computes the 16-character Italian tax code (codice fiscale) from a
//! person's name, surname, sex, date of birth, and place of birth. Every
//! other crate in the workspace depends on `codfis-core`; it depends on
//! nothing internal.
//!
//! ## Pipeline
//!
//! ```text
//! surname ──► name::encode_name(Surname)   ─┐
//! name    ──► name::encode_name(GivenName) ─┤
//! dob+sex ──► date::encode_date            ─┼─► body (15) ──► checksum ──► TaxCode (16)
//! place   ──► PlaceResolver::resolve       ─┘
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Pure encoders.** Name, date, and checksum encoding are pure functions
//!    over `const` tables. The only fallible collaborator is the place lookup.
//!
//! 2. **Injectable place lookup.** The reference dataset lives outside this
//!    crate. [`TaxCodeBuilder`] takes an `Arc<dyn PlaceResolver>` so the engine
//!    can be driven by [`StaticPlaceResolver`] in tests and by a file-backed
//!    registry in production.
//!
//! 3. **Newtypes for outputs.** [`TaxCode`] and [`PlaceCode`] are validated at
//!    construction; there is no way to hold a malformed one.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `codfis-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod alphabet;
pub mod builder;
pub mod checksum;
pub mod date;
pub mod error;
pub mod identity;
pub mod name;
pub mod person;
pub mod place;

// Re-export primary types for ergonomic imports.
pub use alphabet::{even_value, odd_value, ALPHABET_SIZE, ODD_VALUES};
pub use builder::TaxCodeBuilder;
pub use checksum::{control_character, BODY_LENGTH};
pub use date::{encode_date, MONTHS};
pub use error::{CodfisError, InputError, ValidationError};
pub use identity::{PlaceCode, TaxCode};
pub use name::{encode_name, NameRole};
pub use person::{PersonalData, Sex};
pub use place::{place_key, PlaceResolver, StaticPlaceResolver};
