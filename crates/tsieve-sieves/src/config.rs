//! Sieve configuration.
//!
//! Read from TOML; every table and key is optional.
//! ```toml
//! [quarter_reporting]
//! check_surface_form = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{Result, SieveError};

/// Settings for all sieves, one table per sieve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    pub quarter_reporting: QuarterReportingConfig,
}

/// Settings for [`crate::QuarterSieveReporting`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuarterReportingConfig {
    /// Also require the timex surface text to read like "third quarter".
    /// Off by default: only the normalized value is checked.
    pub check_surface_form: bool,
}

impl SieveConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SieveError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SieveConfig::from_toml_str("").unwrap();
        assert_eq!(config, SieveConfig::default());
        assert!(!config.quarter_reporting.check_surface_form);
    }

    #[test]
    fn reads_quarter_reporting_table() {
        let config =
            SieveConfig::from_toml_str("[quarter_reporting]\ncheck_surface_form = true\n").unwrap();
        assert!(config.quarter_reporting.check_surface_form);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SieveConfig::from_toml_str("[quarter_reporting]\ncheck_surface = true\n")
            .unwrap_err();
        assert!(matches!(err, SieveError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sieve.toml");
        std::fs::write(&path, "[quarter_reporting]\ncheck_surface_form = true\n").unwrap();
        assert!(SieveConfig::load(&path).unwrap().quarter_reporting.check_surface_form);

        let err = SieveConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SieveError::Io(_)));
    }
}
