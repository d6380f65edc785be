use anyhow::{Context, Result};
use tracing::info;
use sbom_license_checker::config::CheckOptions;
use sbom_license_checker::output::format_text_report;
use sbom_license_checker::policy::{AllowList, Checker};
use sbom_license_checker::sbom::SbomParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Clean,
    Violations(usize),
}

pub fn handle_check(options: &CheckOptions, quiet: bool) -> Result<CheckOutcome> {
    info!(project_root = %options.project_root.display(), "checking licenses");

    let allow_list = AllowList::load_from_file(&options.allow_list_path)
        .context("Failed to load license allow-list")?;
    let sbom = SbomParser::parse_sbom(&options.sbom_path)
        .context("Failed to load SBOM")?;

    let checker = Checker::new(allow_list, options.skip_ecosystems.iter().cloned());
    let report = checker.check(&sbom.artifacts);

    if !quiet {
        print!("{}", format_text_report(&report));
    }

    if report.is_clean() {
        Ok(CheckOutcome::Clean)
    } else {
        Ok(CheckOutcome::Violations(report.violations.len()))
    }
}
