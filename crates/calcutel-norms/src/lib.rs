//! calcutel-norms
//!
//! Normative scoring for standardized speech and language tests. Pure data
//! and pure functions, no I/O.
//!
//! A [`Catalog`] holds the age-banded baremo tables. Scoring resolves the
//! table for the patient's age ([`age::resolve_band`]), then either finds the
//! score interval ([`scoring::classify`]) or, for language-age tests, computes
//! a quotient ([`quotient::compute_quotient`]). [`ScoringEngine`] ties the
//! steps together over a shared catalog.

pub mod age;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod quotient;
pub mod scoring;

pub use age::{AgeBound, AgeRange, ChronologicalAge};
pub use catalog::{AgeNormativeTable, Catalog, CatalogAnomaly, ScoringMethod, StandardizedTest};
pub use engine::{ScoringEngine, ScoringRequest, ScoringResult, UnmatchedReason};
pub use error::{CatalogError, ScoringError};
pub use quotient::{DualQuotientResult, QuotientResult};
pub use scoring::{Interpretation, ScoreBand};
