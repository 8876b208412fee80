//! Shared output formatting for lint results.

use anyhow::Result;
use swiftstyle_core::{LintResult, Severity};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, lows) = result.count_by_severity();

    for violation in &result.violations {
        let severity = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Low => "\x1b[34mlow\x1b[0m",
        };
        println!(
            "{}: {severity}: [{}] {}",
            violation.location, violation.identifier, violation.reason
        );
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    println!(
        "{summary_color}Found {errors} error(s), {warnings} warning(s), {lows} low(s) in {} file(s)\x1b[0m",
        result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
