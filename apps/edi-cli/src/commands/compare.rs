// compare.rs — `edidiff compare`: render a segment-level diff of two files.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use edi_diff::output_adapters::terminal::TerminalAdapter;
use edi_diff::{
    get_adapter, AlignmentStrategy, ComparisonFilter, ComparisonSession, DiffConfig, OutputFormat,
    RenderContext, ViewMode,
};

#[derive(Args)]
pub struct CompareArgs {
    /// Baseline file.
    pub left: PathBuf,
    /// Candidate file.
    pub right: PathBuf,
    /// Hide unchanged rows.
    #[arg(long)]
    pub only_diffs: bool,
    /// Keep rows whose tag or text contains this (case-insensitive).
    #[arg(long)]
    pub search: Option<String>,
    /// Output format: terminal, json, html.
    #[arg(long)]
    pub format: Option<OutputFormat>,
    /// Row layout: side-by-side, unified.
    #[arg(long)]
    pub view: Option<ViewMode>,
    /// Row alignment: positional, myers.
    #[arg(long)]
    pub alignment: Option<AlignmentStrategy>,
    /// Reveal rows one by one (terminal output only).
    #[arg(long)]
    pub animate: bool,
    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,
    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: &CompareArgs, config: &DiffConfig) -> anyhow::Result<()> {
    let (left, right, mut session) = super::open_pair(config, &args.left, &args.right)?;
    if let Some(strategy) = args.alignment {
        session.set_strategy(strategy);
    }

    let comparison = session
        .comparison()
        .cloned()
        .context("both files must be selected before comparing")?;
    tracing::info!(
        left = %left.name,
        right = %right.name,
        strategy = %comparison.strategy,
        stats = %comparison.stats,
        "compared files"
    );

    let mut filter = ComparisonFilter::new().with_differences_only(args.only_diffs);
    if let Some(search) = &args.search {
        filter = filter.with_search(search.clone());
    }

    let format = args.format.unwrap_or(config.display.format);
    let color = config.display.color
        && !args.no_color
        && format == OutputFormat::Terminal
        && args.output.is_none()
        && std::io::stdout().is_terminal();

    let ctx = RenderContext::new(&left.name, &right.name, &comparison)
        .with_filter(&filter)
        .with_view(args.view.unwrap_or(config.display.view))
        .with_color(color)
        .with_delimiters(
            session.delimiters_for(&left.content),
            session.delimiters_for(&right.content),
        );

    if args.animate && format == OutputFormat::Terminal && args.output.is_none() {
        return animate(&ctx, &mut session);
    }

    let adapter = get_adapter(format);
    let output = adapter.render(&ctx)?;
    tracing::debug!(adapter = adapter.name(), bytes = output.len(), "rendered comparison");
    super::emit(&output, args.output.as_deref())
}

/// Print the header at once, then one comparison entry per reveal step.
fn animate(ctx: &RenderContext, session: &mut ComparisonSession) -> anyhow::Result<()> {
    let adapter = TerminalAdapter::new();
    let entries = adapter.render_entries(ctx);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", adapter.render_preamble(ctx))?;

    let timeline = session.start_reveal(entries.len());
    let start = Instant::now();
    loop {
        for index in timeline.tick(start.elapsed()) {
            write!(stdout, "{}", entries[index])?;
        }
        stdout.flush()?;
        if timeline.is_finished() {
            break;
        }
        let next = timeline.due_at(timeline.visible_count());
        std::thread::sleep(next.saturating_sub(start.elapsed()));
    }
    Ok(())
}
