use indexmap::IndexSet;
use tracing::{debug, info};
use super::config::AllowList;
use crate::sbom::SbomArtifact;

/// An artifact none of whose declared licenses is allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub name: String,
    pub ecosystem: String,
    pub licenses: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
    pub checked: usize,
    pub skipped: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluates SBOM artifacts against an allow-list, ignoring skipped ecosystems.
#[derive(Debug, Clone)]
pub struct Checker {
    allow_list: AllowList,
    skip_ecosystems: IndexSet<String>,
}

impl Checker {
    pub fn new<I, S>(allow_list: AllowList, skip_ecosystems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow_list,
            skip_ecosystems: skip_ecosystems.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_skipped(&self, artifact: &SbomArtifact) -> bool {
        self.skip_ecosystems.contains(&artifact.ecosystem)
    }

    /// An artifact complies when any one of its declared licenses is allowed.
    /// An empty license list never complies.
    pub fn is_compliant(&self, artifact: &SbomArtifact) -> bool {
        artifact
            .licenses
            .iter()
            .any(|license| self.allow_list.is_allowed(license))
    }

    /// Violations in SBOM order. Every artifact is evaluated.
    pub fn find_violations(&self, artifacts: &[SbomArtifact]) -> Vec<Violation> {
        artifacts
            .iter()
            .filter(|artifact| !self.is_skipped(artifact))
            .filter(|artifact| !self.is_compliant(artifact))
            .map(|artifact| Violation {
                name: artifact.name.clone(),
                ecosystem: artifact.ecosystem.clone(),
                licenses: artifact.licenses.clone(),
            })
            .collect()
    }

    pub fn check(&self, artifacts: &[SbomArtifact]) -> CheckReport {
        let skipped = artifacts.iter().filter(|artifact| self.is_skipped(artifact)).count();
        let violations = self.find_violations(artifacts);

        for violation in &violations {
            debug!(
                ecosystem = %violation.ecosystem,
                name = %violation.name,
                licenses = ?violation.licenses,
                "license not allowed"
            );
        }

        let report = CheckReport {
            violations,
            checked: artifacts.len() - skipped,
            skipped,
        };
        info!(
            checked = report.checked,
            skipped = report.skipped,
            violations = report.violations.len(),
            "license check complete"
        );

        report
    }
}
