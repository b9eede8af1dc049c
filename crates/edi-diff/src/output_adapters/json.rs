//! json.rs — JSON output adapter for machine-readable output.

use serde::Serialize;

use crate::error::DiffError;
use crate::fields::{element_changes, ElementChange};
use crate::output_adapters::{OutputAdapter, RenderContext};
use crate::stats::DiffStats;
use crate::view::{filtered_diff_segments, DiffSegment};

#[derive(Default)]
pub struct JsonAdapter {}

impl JsonAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    left: &'a str,
    right: &'a str,
    alignment: String,
    stats: &'a DiffStats,
    lines: Vec<JsonLine>,
}

#[derive(Serialize)]
struct JsonLine {
    #[serde(flatten)]
    segment: DiffSegment,
    #[serde(skip_serializing_if = "Option::is_none")]
    left_line_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right_line_number: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    changes: Vec<ElementChange>,
}

impl OutputAdapter for JsonAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, DiffError> {
        // The view mode does not apply here; rows are always flat.
        let all = &ctx.comparison.lines;
        let lines = filtered_diff_segments(all, ctx.filter)
            .into_iter()
            .map(|segment| {
                let line = &all[segment.index];
                JsonLine {
                    left_line_number: line.left_line_number,
                    right_line_number: line.right_line_number,
                    changes: element_changes(line, &ctx.left_delimiters, &ctx.right_delimiters),
                    segment,
                }
            })
            .collect();

        let report = JsonReport {
            left: ctx.left_name,
            right: ctx.right_name,
            alignment: ctx.comparison.strategy.to_string(),
            stats: &ctx.comparison.stats,
            lines,
        };

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| DiffError::InvalidData(format!("JSON serialization failed: {}", e)))?;
        Ok(json)
    }

    fn name(&self) -> &str {
        "json"
    }
}
