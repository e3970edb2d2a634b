//! Symbol manifests: the JSON hand-off between an extractor and the check.
//!
//! ```json
//! {
//!   "units": [
//!     {
//!       "package": "service",
//!       "files": [
//!         {
//!           "path": "service/service_discovery.go",
//!           "symbols": [
//!             { "name": "Get", "owner_type": "*ServiceDiscovery", "kind": "method" }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{Result, ResultExt, SymgroupError};
use crate::core::session::SourceUnit;

/// Extracted symbols grouped by package and file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolManifest {
    #[serde(default)]
    pub units: Vec<SourceUnit>,
}

impl SymbolManifest {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SymgroupError::io(format!("Failed to read manifest: {}", path.display()), e)
        })?;

        let manifest = Self::from_json_str(&content)
            .with_context(|| format!("Invalid manifest {}", path.display()))?;
        debug!(
            "Loaded manifest {} ({} units, {} symbols)",
            path.display(),
            manifest.units.len(),
            manifest.symbol_count()
        );
        Ok(manifest)
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| {
            SymgroupError::io(format!("Failed to write manifest: {}", path.display()), e)
        })
    }

    /// Total symbols across all files.
    pub fn symbol_count(&self) -> usize {
        self.units
            .iter()
            .flat_map(|unit| &unit.files)
            .map(|file| file.symbols.len())
            .sum()
    }

    fn validate(&self) -> Result<()> {
        for unit in &self.units {
            if unit.package.trim().is_empty() {
                return Err(SymgroupError::validation_field(
                    "package name must not be empty",
                    "package",
                ));
            }
            if let Some(file) = unit.files.iter().find(|f| f.path.as_os_str().is_empty()) {
                return Err(SymgroupError::validation_field(
                    format!(
                        "file with {} symbols in package '{}' has no path",
                        file.symbols.len(),
                        unit.package
                    ),
                    "path",
                ));
            }
        }
        Ok(())
    }
}
