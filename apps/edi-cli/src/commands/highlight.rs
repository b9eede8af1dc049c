// highlight.rs — `edidiff highlight`: one file with classified elements.

use std::fmt::Write as _;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use edi_diff::palette::{self, RESET};
use edi_diff::{highlight_segment, DiffConfig, TokenKind};
use edi_segment::parse_with;

#[derive(Args)]
pub struct HighlightArgs {
    /// EDI file to print.
    pub file: PathBuf,
    /// List each element with its category instead of coloring.
    #[arg(long)]
    pub explain: bool,
    /// Print the token list as JSON.
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,
    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,
}

pub fn execute(args: &HighlightArgs, config: &DiffConfig) -> anyhow::Result<()> {
    let mut store = super::store_for(config);
    let file = super::load(&mut store, &args.file)?;
    let delimiters = config.delimiters.resolve(&file.content);
    let parsed = parse_with(&file.content, &delimiters);
    let color = config.display.color && !args.no_color && std::io::stdout().is_terminal();

    let mut out = String::new();
    if args.json {
        let rows: Vec<serde_json::Value> = parsed
            .segments
            .iter()
            .map(|segment| {
                serde_json::json!({
                    "line_number": segment.line_number,
                    "tag": segment.tag,
                    "tokens": highlight_segment(segment, &delimiters),
                })
            })
            .collect();
        out = serde_json::to_string_pretty(&rows)?;
        out.push('\n');
    } else {
        for segment in &parsed.segments {
            let tokens = highlight_segment(segment, &delimiters);
            if args.explain {
                writeln!(out, "{:>5} {}", segment.line_number, segment.tag)?;
                let mut position = 0;
                for token in &tokens {
                    match token.kind {
                        TokenKind::Separator if token.text.starts_with(delimiters.element) => {
                            position += 1;
                        }
                        TokenKind::Element(category) => {
                            writeln!(out, "      {:02} {:<9} {}", position, category, token.text)?;
                        }
                        _ => {}
                    }
                }
            } else {
                write!(out, "{:>5} ", segment.line_number)?;
                for token in &tokens {
                    let code = palette::token_ansi(token.kind);
                    if color && !code.is_empty() {
                        write!(out, "{}{}{}", code, token.text, RESET)?;
                    } else {
                        out.push_str(&token.text);
                    }
                }
                out.push('\n');
            }
        }
    }

    tracing::debug!(file = %file.name, segments = parsed.len(), "highlighted file");
    super::emit(&out, None)
}
