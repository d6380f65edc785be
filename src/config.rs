use std::path::{Path, PathBuf};

/// Ecosystems whose license metadata is verified by a separate process.
pub const DEFAULT_SKIP_ECOSYSTEMS: &[&str] = &["npm"];

pub const ALLOW_LIST_FILE: &str = ".licensee.json";
pub const SBOM_FILE: &str = "sbom.json";

/// Inputs for a single check run, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub project_root: PathBuf,
    pub allow_list_path: PathBuf,
    pub sbom_path: PathBuf,
    pub skip_ecosystems: Vec<String>,
}

impl CheckOptions {
    /// Default file names under `project_root` and the default skip list
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        Self {
            allow_list_path: project_root.join(ALLOW_LIST_FILE),
            sbom_path: project_root.join(SBOM_FILE),
            skip_ecosystems: DEFAULT_SKIP_ECOSYSTEMS.iter().map(|s| s.to_string()).collect(),
            project_root,
        }
    }

    /// Override the allow-list location. Relative paths resolve against the project root.
    pub fn with_allow_list<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.allow_list_path = self.project_root.join(path);
        self
    }

    /// Override the SBOM location. Relative paths resolve against the project root.
    pub fn with_sbom<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sbom_path = self.project_root.join(path);
        self
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(project_root)
    }
}
