use crate::policy::{CheckReport, Violation};

pub fn format_text_report(report: &CheckReport) -> String {
    if report.is_clean() {
        return "No license violations detected\n".to_string();
    }

    let mut output = String::new();

    for violation in &report.violations {
        output.push_str(&format_violation(violation));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!(
        "{} license violation(s) detected. Please review\n",
        report.violations.len()
    ));

    output
}

fn format_violation(violation: &Violation) -> String {
    let subject = format!("The {} dependency {}", violation.ecosystem, quoted(&violation.name));

    match violation.licenses.as_slice() {
        [] => format!("{} declares no license, which is not currently allowed.", subject),
        [license] => format!(
            "{} is licensed under {} which is not currently allowed.",
            subject,
            quoted(license)
        ),
        licenses => format!(
            "{} is licensed under {} which are not currently allowed.",
            subject,
            licenses.iter().map(|l| quoted(l)).collect::<Vec<_>>().join(" and ")
        ),
    }
}

fn quoted(s: &str) -> String {
    format!("'{}'", s)
}
