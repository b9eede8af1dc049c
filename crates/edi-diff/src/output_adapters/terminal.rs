//! terminal.rs — Terminal output adapter with colored side-by-side or unified rows.

use edi_segment::{Delimiters, Segment};

use crate::classify::highlight_segment;
use crate::compare::{ComparisonLine, DiffType};
use crate::error::DiffError;
use crate::output_adapters::{OutputAdapter, RenderContext, ViewMode};
use crate::palette::{self, DiffColor, BOLD, DIM, RESET};

#[derive(Default)]
pub struct TerminalAdapter {}

impl TerminalAdapter {
    pub fn new() -> Self {
        Self {}
    }

    fn paint(&self, text: &str, code: &str, color: bool) -> String {
        if color && !code.is_empty() {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn render_header(&self, ctx: &RenderContext) -> String {
        let stats = &ctx.comparison.stats;
        let count = |diff_type: DiffType| {
            self.paint(
                &format!("{} {}", stats.count(diff_type), diff_type),
                DiffColor::for_type(diff_type).ansi(),
                ctx.color,
            )
        };

        let mut out = format!(
            "{}\n",
            self.paint(
                &format!("Comparing {} → {}", ctx.left_name, ctx.right_name),
                BOLD,
                ctx.color
            )
        );
        out.push_str(&format!(
            "Alignment: {}  |  {}, {}, {}, {}\n",
            ctx.comparison.strategy,
            count(DiffType::Added),
            count(DiffType::Removed),
            count(DiffType::Modified),
            count(DiffType::Unchanged),
        ));
        out
    }

    /// Segment text with per-token colors.
    fn render_segment(&self, segment: &Segment, delimiters: &Delimiters, color: bool) -> String {
        if !color {
            return segment.raw.clone();
        }
        highlight_segment(segment, delimiters)
            .iter()
            .map(|token| self.paint(&token.text, palette::token_ansi(token.kind), true))
            .collect()
    }

    fn line_number(&self, n: Option<usize>) -> String {
        n.map(|n| format!("{:>5}", n)).unwrap_or_else(|| " ".repeat(5))
    }

    fn render_side_by_side(
        &self,
        ctx: &RenderContext,
        rows: &[(usize, &ComparisonLine)],
    ) -> Vec<String> {
        let width = rows
            .iter()
            .filter_map(|(_, line)| line.left_segment.as_ref())
            .map(|s| s.raw.chars().count())
            .max()
            .unwrap_or(0);

        rows.iter()
            .map(|(_, line)| {
                let color_code = DiffColor::for_type(line.diff_type).ansi();
                let marker = palette::marker(line.diff_type).to_string();

                let (left_text, left_len) = match &line.left_segment {
                    Some(s) => (
                        self.render_segment(s, &ctx.left_delimiters, ctx.color),
                        s.raw.chars().count(),
                    ),
                    None => (String::new(), 0),
                };
                let right_text = line
                    .right_segment
                    .as_ref()
                    .map(|s| self.render_segment(s, &ctx.right_delimiters, ctx.color))
                    .unwrap_or_default();

                format!(
                    "{} {} {}{} {} {} {}\n",
                    self.paint(&marker, color_code, ctx.color),
                    self.paint(&self.line_number(line.left_line_number), DIM, ctx.color),
                    left_text,
                    " ".repeat(width.saturating_sub(left_len)),
                    self.paint("│", color_code, ctx.color),
                    self.paint(&self.line_number(line.right_line_number), DIM, ctx.color),
                    right_text,
                )
            })
            .collect()
    }

    fn render_unified(
        &self,
        ctx: &RenderContext,
        rows: &[(usize, &ComparisonLine)],
    ) -> Vec<String> {
        rows.iter()
            .map(|(_, line)| {
                let color_code = DiffColor::for_type(line.diff_type).ansi();
                let marker = self.paint(
                    &palette::marker(line.diff_type).to_string(),
                    color_code,
                    ctx.color,
                );
                let side = |label: &str,
                            number: Option<usize>,
                            segment: &Segment,
                            delimiters: &Delimiters| {
                    format!(
                        "{} {}{} {}\n",
                        marker,
                        self.paint(label, DIM, ctx.color),
                        self.paint(&self.line_number(number), DIM, ctx.color),
                        self.render_segment(segment, delimiters, ctx.color),
                    )
                };

                let left = line
                    .left_segment
                    .as_ref()
                    .map(|s| side("L", line.left_line_number, s, &ctx.left_delimiters));
                let right = line
                    .right_segment
                    .as_ref()
                    .map(|s| side("R", line.right_line_number, s, &ctx.right_delimiters));
                match line.diff_type {
                    DiffType::Modified => {
                        [left, right].into_iter().flatten().collect::<String>()
                    }
                    DiffType::Added => right.unwrap_or_default(),
                    DiffType::Removed | DiffType::Unchanged => left.unwrap_or_default(),
                }
            })
            .collect()
    }

    /// Header, filter note and the blank separator line; followed by a
    /// placeholder when no row is visible.
    pub fn render_preamble(&self, ctx: &RenderContext) -> String {
        let mut output = self.render_header(ctx);
        let visible = ctx.visible_lines().len();

        if ctx.filter.is_active() {
            output.push_str(&format!(
                "Showing {} of {} rows\n",
                visible,
                ctx.comparison.lines.len()
            ));
        }
        output.push('\n');

        if visible == 0 {
            let message = if ctx.comparison.lines.is_empty() {
                "(no segments)"
            } else {
                "(no rows match the current filter)"
            };
            output.push_str(&self.paint(message, DIM, ctx.color));
            output.push('\n');
        }
        output
    }

    /// One rendered block per visible row, in order. A modified row in the
    /// unified view is a single block of two lines.
    pub fn render_entries(&self, ctx: &RenderContext) -> Vec<String> {
        let rows = ctx.visible_lines();
        match ctx.view {
            ViewMode::SideBySide => self.render_side_by_side(ctx, &rows),
            ViewMode::Unified => self.render_unified(ctx, &rows),
        }
    }
}

impl OutputAdapter for TerminalAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, DiffError> {
        let mut output = self.render_preamble(ctx);
        output.push_str(&self.render_entries(ctx).concat());
        Ok(output)
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ComparisonFilter;
    use crate::output_adapters::test_support::sample;

    #[test]
    fn plain_side_by_side_pairs_rows() {
        let (_, _, cmp) = sample();
        let ctx = RenderContext::new("old.edi", "new.edi", &cmp).with_color(false);
        let out = TerminalAdapter::new().render(&ctx).unwrap();

        assert!(out.starts_with("Comparing old.edi → new.edi\n"));
        assert!(out.contains("1 added, 0 removed, 1 modified, 3 unchanged"));
        assert!(!out.contains('\x1b'));
        let bgn = out
            .lines()
            .find(|l| l.starts_with('~'))
            .unwrap();
        assert!(bgn.contains("BGN*00*REF1*20240101~"));
        assert!(bgn.contains("BGN*00*REF1*20240102~"));
        assert!(out.lines().any(|l| l.starts_with('+') && l.contains("DTP*348")));
    }

    #[test]
    fn colored_output_uses_diff_palette() {
        let (_, _, cmp) = sample();
        let ctx = RenderContext::new("a", "b", &cmp);
        let out = TerminalAdapter::new().render(&ctx).unwrap();
        assert!(out.contains(&format!("{}~{}", DiffColor::Amber.ansi(), RESET)));
        assert!(out.contains(&format!("{}+{}", DiffColor::Green.ansi(), RESET)));
    }

    #[test]
    fn unified_shows_both_sides_of_modified_rows() {
        let (_, _, cmp) = sample();
        let filter = ComparisonFilter::new().with_differences_only(true);
        let ctx = RenderContext::new("a", "b", &cmp)
            .with_filter(&filter)
            .with_view(ViewMode::Unified)
            .with_color(false);
        let out = TerminalAdapter::new().render(&ctx).unwrap();

        assert!(out.contains("Showing 2 of 5 rows"));
        let rows: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with(['~', '+']))
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("~ L"));
        assert!(rows[1].starts_with("~ R"));
        assert!(!out.contains("INS*Y*18*030~"));
    }

    #[test]
    fn filter_with_no_matches_says_so() {
        let (_, _, cmp) = sample();
        let filter = ComparisonFilter::new().with_search("NM1");
        let ctx = RenderContext::new("a", "b", &cmp)
            .with_filter(&filter)
            .with_color(false);
        let out = TerminalAdapter::new().render(&ctx).unwrap();
        assert!(out.contains("(no rows match the current filter)"));
        // Stats still describe the whole comparison.
        assert!(out.contains("3 unchanged"));
    }

    #[test]
    fn unified_modified_row_is_one_entry() {
        let (_, _, cmp) = sample();
        let ctx = RenderContext::new("a", "b", &cmp)
            .with_view(ViewMode::Unified)
            .with_color(false);
        let adapter = TerminalAdapter::new();
        let entries = adapter.render_entries(&ctx);

        assert_eq!(entries.len(), cmp.lines.len());
        assert_eq!(entries[1].lines().count(), 2);
        assert!(entries[1].starts_with("~ L"));
        assert_eq!(
            adapter.render(&ctx).unwrap(),
            adapter.render_preamble(&ctx) + &entries.concat()
        );
    }

    #[test]
    fn right_pane_is_highlighted_with_right_delimiters() {
        let star = Delimiters::default();
        let pipe = Delimiters::new('|', '!', '>');
        let left = edi_segment::parse_with("REF*0F*20240101~", &star);
        let right = edi_segment::parse_with("REF|0F|20240102!", &pipe);
        let cmp = crate::compare::Comparison::new(
            &left,
            &right,
            crate::compare::AlignmentStrategy::Positional,
        );
        let ctx = RenderContext::new("a", "b", &cmp).with_delimiters(star, pipe);
        let out = TerminalAdapter::new().render(&ctx).unwrap();

        let date = palette::token_ansi(crate::classify::TokenKind::Element(
            crate::classify::ElementCategory::Date,
        ));
        assert!(out.contains(&format!("{}20240101{}", date, RESET)));
        assert!(out.contains(&format!("{}20240102{}", date, RESET)));
    }
}
