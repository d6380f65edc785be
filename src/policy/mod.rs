pub mod config;
pub mod matcher;
pub mod checker;

// Re-export main types
pub use config::{AllowList, LicenseeConfig, LicenseSelection};
pub use checker::{Checker, CheckReport, Violation};
