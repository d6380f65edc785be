pub mod config;
pub mod error;
pub mod sbom;
pub mod policy;
pub mod output;

// Re-export main types for easy access
pub use config::{CheckOptions, DEFAULT_SKIP_ECOSYSTEMS};
pub use error::LoadError;
pub use sbom::{Sbom, SbomArtifact};
pub use policy::{AllowList, Checker, CheckReport, Violation};
