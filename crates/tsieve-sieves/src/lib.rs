//! # tsieve-sieves
//!
//! Sieves propose temporal links for an annotated document. Each sieve is one
//! stage of a larger pipeline; the pipeline runs them in sequence and merges
//! what they return.
//!
//! Includes:
//! - [`Sieve`] — the `annotate` / `train` contract every stage implements
//! - [`QuarterSieveReporting`] — reporting verbs next to fiscal-quarter timexes
//! - [`SieveConfig`] — TOML-backed per-sieve settings
//! - [`sieve_by_name`] — registry lookup

pub mod config;
pub mod quarter_reporting;

use thiserror::Error;
use tsieve_core::{CoreError, Corpus, TLink};

pub use config::{QuarterReportingConfig, SieveConfig};
pub use quarter_reporting::QuarterSieveReporting;

/// Result type for sieve operations.
pub type Result<T> = std::result::Result<T, SieveError>;

/// Errors surfaced by sieves and their configuration.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown sieve '{0}'")]
    UnknownSieve(String),
}

/// One stage of the temporal-link pipeline.
pub trait Sieve: Send + Sync {
    /// Registry name of the sieve.
    fn name(&self) -> &'static str;

    /// Propose new links for `doc_name`.
    ///
    /// `current` holds the links proposed by earlier stages. It is read-only;
    /// the caller merges the returned links into its own collection.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::Core`] if the corpus has no such document.
    fn annotate(&self, corpus: &Corpus, doc_name: &str, current: &[TLink]) -> Result<Vec<TLink>>;

    /// Fit any learned state to a training corpus. Rule-based sieves do nothing.
    ///
    /// # Errors
    ///
    /// Statistical sieves may fail while reading training data.
    fn train(&mut self, corpus: &Corpus) -> Result<()>;
}

/// Names accepted by [`sieve_by_name`].
pub const SIEVE_NAMES: &[&str] = &[QuarterSieveReporting::NAME];

/// Build a sieve by registry name. Matching is exact; `quarter-reporting`
/// is accepted as an alias of `QuarterSieveReporting`.
///
/// # Errors
///
/// Returns [`SieveError::UnknownSieve`] for any other name.
pub fn sieve_by_name(name: &str, config: &SieveConfig) -> Result<Box<dyn Sieve>> {
    match name {
        QuarterSieveReporting::NAME | "quarter-reporting" => Ok(Box::new(
            QuarterSieveReporting::from_config(&config.quarter_reporting),
        )),
        other => Err(SieveError::UnknownSieve(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_builds_known_sieves() {
        let config = SieveConfig::default();
        for name in SIEVE_NAMES {
            let sieve = sieve_by_name(name, &config).unwrap();
            assert_eq!(sieve.name(), *name);
        }
        let alias = sieve_by_name("quarter-reporting", &config).unwrap();
        assert_eq!(alias.name(), QuarterSieveReporting::NAME);
    }

    #[test]
    fn registry_rejects_unknown_names() {
        let err = sieve_by_name("AllVagueSieve", &SieveConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, SieveError::UnknownSieve(ref n) if n == "AllVagueSieve"));
        assert!(err.to_string().contains("AllVagueSieve"));
    }
}
