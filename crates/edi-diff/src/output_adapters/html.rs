//! html.rs — Standalone HTML page with a dual-pane table or unified list.

use edi_segment::{Delimiters, Segment};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::classify::highlight_segment;
use crate::compare::{ComparisonLine, DiffType};
use crate::error::DiffError;
use crate::output_adapters::{OutputAdapter, RenderContext, ViewMode};
use crate::palette::{self, DiffColor};

#[derive(Default)]
pub struct HtmlAdapter {}

impl HtmlAdapter {
    pub fn new() -> Self {
        Self {}
    }

    fn css(&self) -> String {
        let mut css = String::from(
            r#"
        <style>
            body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; padding: 20px; max-width: 1400px; }
            .header { background: #f5f5f5; padding: 16px 20px; border-radius: 8px; margin-bottom: 20px; }
            .stats span { display: inline-block; padding: 2px 10px; border-radius: 4px; margin-right: 6px; font-weight: 600; font-size: 13px; }
            table.diff { border-collapse: collapse; width: 100%; table-layout: fixed; }
            table.diff td { padding: 2px 8px; vertical-align: top; font-family: 'Monaco', 'Menlo', monospace; font-size: 13px; white-space: pre-wrap; word-break: break-all; }
            td.ln { width: 48px; text-align: right; color: #9ca3af; user-select: none; }
            td.mk { width: 16px; text-align: center; font-weight: 700; }
            ul.unified { list-style: none; padding: 0; font-family: 'Monaco', 'Menlo', monospace; font-size: 13px; }
            ul.unified li { padding: 2px 8px; white-space: pre-wrap; }
            .empty { color: #6b7280; font-style: italic; }
            .tok-id { color: #1d4ed8; font-weight: 700; }
            .tok-sep { color: #9ca3af; }
            .tok-date { color: #7c3aed; }
            .tok-number { color: #0e7490; }
            .tok-qualifier { color: #b45309; }
"#,
        );
        for diff_type in [
            DiffType::Added,
            DiffType::Removed,
            DiffType::Modified,
            DiffType::Unchanged,
        ] {
            let color = DiffColor::for_type(diff_type);
            css.push_str(&format!(
                "            .{} {{ background: {}; color: {}; }}\n",
                diff_type,
                color.background_hex(),
                color.hex()
            ));
        }
        css.push_str("        </style>\n");
        css
    }

    fn render_segment(&self, segment: &Segment, delimiters: &Delimiters) -> String {
        highlight_segment(segment, delimiters)
            .iter()
            .map(|token| {
                format!(
                    "<span class=\"{}\">{}</span>",
                    palette::token_class(token.kind),
                    encode_text(&token.text)
                )
            })
            .collect()
    }

    fn cell(&self, segment: Option<&Segment>, delimiters: &Delimiters) -> String {
        segment
            .map(|s| self.render_segment(s, delimiters))
            .unwrap_or_default()
    }

    /// Row attributes: diff type class, full-comparison index and tag.
    fn row_attributes(&self, index: usize, line: &ComparisonLine, tag: &str) -> String {
        format!(
            "class=\"{}\" data-index=\"{}\" data-tag=\"{}\"",
            line.diff_type,
            index,
            encode_double_quoted_attribute(tag)
        )
    }

    fn number(&self, n: Option<usize>) -> String {
        n.map(|n| n.to_string()).unwrap_or_default()
    }

    fn render_table(&self, ctx: &RenderContext, rows: &[(usize, &ComparisonLine)]) -> String {
        let mut html = String::from("<table class=\"diff\">\n");
        html.push_str(&format!(
            "<thead><tr><th></th><th></th><th>{}</th><th></th><th>{}</th></tr></thead>\n<tbody>\n",
            encode_text(ctx.left_name),
            encode_text(ctx.right_name)
        ));
        for (index, line) in rows {
            let tag = line.segments().next().map_or("", |s| s.tag.as_str());
            html.push_str(&format!(
                "<tr {}><td class=\"mk\">{}</td><td class=\"ln\">{}</td><td>{}</td><td class=\"ln\">{}</td><td>{}</td></tr>\n",
                self.row_attributes(*index, line, tag),
                palette::marker(line.diff_type),
                self.number(line.left_line_number),
                self.cell(line.left_segment.as_ref(), &ctx.left_delimiters),
                self.number(line.right_line_number),
                self.cell(line.right_segment.as_ref(), &ctx.right_delimiters),
            ));
        }
        html.push_str("</tbody>\n</table>\n");
        html
    }

    fn render_list(&self, ctx: &RenderContext, rows: &[(usize, &ComparisonLine)]) -> String {
        let mut html = String::from("<ul class=\"unified\">\n");
        for (index, line) in rows {
            let left = line.left_segment.iter().map(|s| (s, &ctx.left_delimiters));
            let right = line.right_segment.iter().map(|s| (s, &ctx.right_delimiters));
            let sides: Vec<(&Segment, &Delimiters)> = match line.diff_type {
                DiffType::Added => right.collect(),
                DiffType::Modified => left.chain(right).collect(),
                DiffType::Removed | DiffType::Unchanged => left.collect(),
            };
            for (segment, delimiters) in sides {
                html.push_str(&format!(
                    "<li {}>{} {}</li>\n",
                    self.row_attributes(*index, line, &segment.tag),
                    palette::marker(line.diff_type),
                    self.render_segment(segment, delimiters)
                ));
            }
        }
        html.push_str("</ul>\n");
        html
    }
}

impl OutputAdapter for HtmlAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, DiffError> {
        let stats = &ctx.comparison.stats;
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!(
            "<title>{} vs {}</title>\n",
            encode_text(ctx.left_name),
            encode_text(ctx.right_name)
        ));
        html.push_str(&self.css());
        html.push_str("</head>\n<body>\n");

        // Header
        html.push_str("<div class=\"header\">\n");
        html.push_str(&format!(
            "<h1>{} &rarr; {}</h1>\n",
            encode_text(ctx.left_name),
            encode_text(ctx.right_name)
        ));
        html.push_str(&format!(
            "<p><strong>Alignment:</strong> {}</p>\n",
            ctx.comparison.strategy
        ));
        html.push_str("<p class=\"stats\">");
        for diff_type in [
            DiffType::Added,
            DiffType::Removed,
            DiffType::Modified,
            DiffType::Unchanged,
        ] {
            html.push_str(&format!(
                "<span class=\"{}\">{} {}</span>",
                diff_type,
                stats.count(diff_type),
                diff_type
            ));
        }
        html.push_str("</p>\n</div>\n");

        let rows = ctx.visible_lines();
        if ctx.filter.is_active() {
            html.push_str(&format!(
                "<p class=\"meta\">Showing {} of {} rows</p>\n",
                rows.len(),
                ctx.comparison.lines.len()
            ));
        }

        if rows.is_empty() {
            html.push_str("<p class=\"empty\">No rows to show.</p>\n");
        } else {
            html.push_str(&match ctx.view {
                ViewMode::SideBySide => self.render_table(ctx, &rows),
                ViewMode::Unified => self.render_list(ctx, &rows),
            });
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    fn name(&self) -> &str {
        "html"
    }
}
