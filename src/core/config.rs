//! Configuration types for symgroup.
//!
//! The defaults reproduce the Go conventions the grouping lint was built for:
//! `.go` sources, `_test.go` test files, `model*`/`types*` as always-acceptable
//! homes and `errors.go` for error declarations.

use std::path::PathBuf;

use globset::Glob;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SymgroupError};

/// Default source file extension.
pub const DEFAULT_EXTENSION: &str = ".go";

/// Default stem for error declarations.
pub const DEFAULT_ERRORS_FILE: &str = "errors";

/// Configuration for the grouping analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// File extension appended to every generated stem (including the dot)
    pub extension: String,
    /// Stems that are acceptable for any symbol, wildcards allowed
    pub allowlist: Vec<String>,
    /// Stem accepted for `Error` symbols and `Err*` owners
    pub errors_file: String,
    /// Filename suffixes identifying test files
    pub test_file_suffixes: Vec<String>,
    /// Package names whose files are never checked
    pub skipped_packages: Vec<String>,
    /// Resolve symbols on the rayon pool
    pub parallel: bool,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            allowlist: vec!["model*".to_string(), "types*".to_string()],
            errors_file: DEFAULT_ERRORS_FILE.to_string(),
            test_file_suffixes: vec!["_test.go".to_string()],
            skipped_packages: vec!["main".to_string()],
            parallel: true,
        }
    }
}

impl GroupingConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SymgroupError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            SymgroupError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(SymgroupError::config_field(
                format!("extension must start with '.', got '{}'", self.extension),
                "extension",
            ));
        }

        if self.errors_file.trim().is_empty() {
            return Err(SymgroupError::config_field(
                "errors_file must not be empty",
                "errors_file",
            ));
        }

        for stem in &self.allowlist {
            if stem.trim().is_empty() {
                return Err(SymgroupError::config_field(
                    "allowlist entries must not be empty",
                    "allowlist",
                ));
            }
            Glob::new(&self.pattern_for(stem))?;
        }

        Ok(())
    }

    /// Append the configured extension to a stem unless it already ends with it.
    pub fn pattern_for(&self, stem: &str) -> String {
        if stem.ends_with(&self.extension) {
            stem.to_string()
        } else {
            format!("{stem}{}", self.extension)
        }
    }

    /// Allowlist entries as full filename patterns.
    pub fn allowlist_patterns(&self) -> impl Iterator<Item = String> + '_ {
        self.allowlist.iter().map(|stem| self.pattern_for(stem))
    }

    /// The errors pattern, e.g. `errors.go`.
    pub fn errors_pattern(&self) -> String {
        self.pattern_for(&self.errors_file)
    }

    /// Package-derived fallback pattern, e.g. `service*.go`.
    pub fn package_default(&self, package: &str) -> String {
        format!("{package}*{}", self.extension)
    }

    /// Whether a file name is a test file under this configuration.
    pub fn is_test_file(&self, file_name: &str) -> bool {
        self.test_file_suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }

    /// Whether files of this package are skipped entirely.
    pub fn is_skipped_package(&self, package: &str) -> bool {
        package.ends_with("_test") || self.skipped_packages.iter().any(|p| p == package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = GroupingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.allowlist_patterns().collect::<Vec<_>>(),
            vec!["model*.go", "types*.go"]
        );
        assert_eq!(config.errors_pattern(), "errors.go");
    }

    #[test]
    fn test_pattern_for_keeps_existing_extension() {
        let config = GroupingConfig::default();
        assert_eq!(config.pattern_for("default.go"), "default.go");
        assert_eq!(config.pattern_for("default"), "default.go");
        assert_eq!(config.package_default("service"), "service*.go");
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let config = GroupingConfig {
            extension: "go".to_string(),
            ..GroupingConfig::default()
        };

        match config.validate() {
            Err(SymgroupError::Config { field, .. }) => {
                assert_eq!(field, Some("extension".to_string()));
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_broken_allowlist_glob() {
        let config = GroupingConfig {
            allowlist: vec!["model[".to_string()],
            ..GroupingConfig::default()
        };

        match config.validate() {
            Err(SymgroupError::Pattern { pattern, .. }) => assert_eq!(pattern, "model[.go"),
            other => panic!("Expected Pattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_test_file_and_package_detection() {
        let config = GroupingConfig::default();
        assert!(config.is_test_file("scheduler_test.go"));
        assert!(!config.is_test_file("scheduler.go"));
        assert!(config.is_skipped_package("main"));
        assert!(config.is_skipped_package("service_test"));
        assert!(!config.is_skipped_package("service"));
    }

    #[test]
    fn test_yaml_round_trip_and_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("symgroup.yml");

        let config = GroupingConfig {
            extension: ".rs".to_string(),
            test_file_suffixes: vec!["_tests.rs".to_string()],
            ..GroupingConfig::default()
        };
        config.to_yaml_file(&path).unwrap();
        assert_eq!(GroupingConfig::from_yaml_file(&path).unwrap(), config);

        let partial = dir.path().join("partial.yml");
        std::fs::write(&partial, "allowlist:\n  - shared*\n").unwrap();
        let loaded = GroupingConfig::from_yaml_file(&partial).unwrap();
        assert_eq!(loaded.allowlist, vec!["shared*".to_string()]);
        assert_eq!(loaded.extension, ".go");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GroupingConfig::from_yaml_file("/nonexistent/symgroup.yml").unwrap_err();
        assert!(matches!(err, SymgroupError::Io { .. }));
    }
}
