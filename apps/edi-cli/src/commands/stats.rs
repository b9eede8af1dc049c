// stats.rs — `edidiff stats`: diff tallies without the rows.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use edi_diff::{AlignmentStrategy, DiffConfig};

#[derive(Args)]
pub struct StatsArgs {
    /// Baseline file.
    pub left: PathBuf,
    /// Candidate file.
    pub right: PathBuf,
    /// Row alignment: positional, myers.
    #[arg(long)]
    pub alignment: Option<AlignmentStrategy>,
    /// Print JSON instead of a sentence.
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: &StatsArgs, config: &DiffConfig) -> anyhow::Result<()> {
    let (_, _, mut session) = super::open_pair(config, &args.left, &args.right)?;
    if let Some(strategy) = args.alignment {
        session.set_strategy(strategy);
    }
    let comparison = session
        .comparison()
        .context("both files must be selected before comparing")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison.stats)?);
    } else {
        println!("{}", comparison.stats);
        println!(
            "{} row(s), {} changed ({} alignment)",
            comparison.stats.total(),
            comparison.stats.changed(),
            comparison.strategy
        );
    }
    Ok(())
}
