//! # symgroup: symbol-to-filename grouping checks
//!
//! Checks that exported symbols (functions, methods, types, constants and
//! variables) are declared in source files whose names follow from the symbol
//! itself. A method `ServiceDiscovery.Get` belongs in `service_discovery.go`,
//! `service_discovery_get.go` or a shorter prefix such as `service*.go`; a
//! constructor `NewScheduler` belongs in `scheduler.go`.
//!
//! ## Architecture
//!
//! ```text
//! Symbol ─► ExpectationGenerator ─► patterns ─► Resolver ─► ViolationReporter ─► Report
//!                 ▲                                 │
//!            NameDecomposer                   FallbackTier list
//! ```
//!
//! Extraction of symbols from source is left to an external tool; this crate
//! consumes a [`io::manifest::SymbolManifest`] or plain [`Symbol`] values.
//!
//! ## Quick Start
//!
//! ```rust
//! use symgroup::{AnalysisSession, GroupingConfig, SourceFile, SourceUnit, Symbol};
//!
//! let units = vec![SourceUnit {
//!     package: "service".to_string(),
//!     files: vec![SourceFile {
//!         path: "service/service_discovery.go".into(),
//!         symbols: vec![Symbol::method("ServiceDiscovery", "Get", "")],
//!     }],
//! }];
//!
//! let session = AnalysisSession::new(GroupingConfig::default());
//! let report = session.analyze(&units);
//! assert_eq!(report.passing(), 1);
//! ```

#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Core configuration, errors and session state
pub mod core {
    //! Configuration, error types and analysis sessions.

    pub mod config;
    pub mod errors;
    pub mod session;
}

// Detection algorithms
pub mod detectors {
    //! Naming-convention detectors.

    pub mod grouping;
}

// Input manifests
pub mod io {
    //! Loading extracted symbols.

    pub mod manifest;
}

// Re-export primary types for convenience
pub use crate::core::config::GroupingConfig;
pub use crate::core::errors::{Result, ResultExt, SymgroupError};
pub use crate::core::session::{AnalysisSession, SourceFile, SourceUnit};
pub use detectors::grouping::{
    ExpectationGenerator, ExpectationSet, FallbackTier, Report, Resolution, Resolver, Symbol,
    SymbolKind, Violation, ViolationReporter,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
