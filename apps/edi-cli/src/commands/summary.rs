// summary.rs — `edidiff summary`: validation issues grouped by severity.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use edi_diff::{ErrorSummary, ValidationReport};

#[derive(Args)]
pub struct SummaryArgs {
    /// Validation report (JSON with an `issues` array).
    pub report: PathBuf,
    /// Print the grouped summary as JSON.
    #[arg(long)]
    pub json: bool,
    /// Exit with an error when any critical issue is present.
    #[arg(long)]
    pub fail_on_critical: bool,
}

pub fn execute(args: &SummaryArgs) -> anyhow::Result<()> {
    let report = ValidationReport::load(&args.report)
        .with_context(|| format!("failed to load report {}", args.report.display()))?;
    let summary = ErrorSummary::from_report(&report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.is_clean() {
        println!("No validation issues.");
    } else {
        for group in &summary.groups {
            println!(
                "{} {} ({})",
                group.icon,
                group.severity,
                group.issues.len()
            );
            for issue in &group.issues {
                match issue.location() {
                    Some(location) => println!("  {}: {}", location, issue.message),
                    None => println!("  {}", issue.message),
                }
                if let Some(suggestion) = &issue.suggestion {
                    println!("    → {}", suggestion);
                }
            }
        }
    }

    if args.fail_on_critical && summary.has_critical() {
        anyhow::bail!("{} critical issue(s)", summary.count(edi_diff::Severity::Critical));
    }
    Ok(())
}
