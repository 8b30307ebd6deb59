//! Shared output formatting for lint results.

use anyhow::Result;
use std::path::Path;

use effect_lint_core::{LintResult, RichDiagnostic, Severity};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    for diagnostic in &result.diagnostics {
        let severity_indicator = match diagnostic.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            diagnostic.code,
            diagnostic.rule,
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
        );
        println!("  {}: {}", severity_indicator, diagnostic.message);
        if let Some(suggestion) = &diagnostic.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!(
            "{}:{}:{}: {} [{}] {}",
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.severity,
            diagnostic.code,
            diagnostic.message,
        );
    }
}

/// Rich output with a source excerpt per diagnostic, via miette.
fn print_pretty(result: &LintResult, root: &Path) {
    for diagnostic in &result.diagnostics {
        let rich = RichDiagnostic::from(diagnostic);
        let file = root.join(&diagnostic.location.file);
        let report = match std::fs::read_to_string(&file) {
            Ok(source) => miette::Report::new(rich).with_source_code(miette::NamedSource::new(
                diagnostic.location.file.display().to_string(),
                source,
            )),
            // Source no longer readable: fall back to the bare report.
            Err(_) => miette::Report::new(rich),
        };
        eprintln!("{report:?}");
    }

    let (errors, warnings, infos) = result.count_by_severity();
    println!(
        "Found {} error(s), {} warning(s), {} info(s) in {} file(s)",
        errors, warnings, infos, result.files_checked
    );
}
