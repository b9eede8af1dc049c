//! output_adapters — Renderers for a finished comparison.
//!
//! - **Terminal**: ANSI-colored side-by-side or unified listing (default)
//! - **JSON**: `{left, right, stats, lines}` for scripts and CI
//! - **HTML**: standalone page with a dual-pane table or unified list
//!
//! All adapters render the filtered projection of the rows but always report
//! the statistics of the full comparison.

use edi_segment::Delimiters;
use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, ComparisonLine};
use crate::error::DiffError;
use crate::filter::ComparisonFilter;

pub mod html;
pub mod json;
pub mod terminal;

/// Output format for comparison rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid output format: '{}'. Valid formats: terminal, json, html",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Layout of the rendered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Left and right segments in two columns.
    #[default]
    SideBySide,
    /// One column with +/-/~ markers; modified rows show both sides.
    Unified,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "side_by_side" | "split" => Ok(ViewMode::SideBySide),
            "unified" => Ok(ViewMode::Unified),
            _ => Err(format!(
                "Invalid view mode: '{}'. Valid modes: side-by-side, unified",
                s
            )),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::SideBySide => write!(f, "side-by-side"),
            ViewMode::Unified => write!(f, "unified"),
        }
    }
}

/// Context for rendering one comparison.
pub struct RenderContext<'a> {
    /// Display name of the left (baseline) file.
    pub left_name: &'a str,
    /// Display name of the right (candidate) file.
    pub right_name: &'a str,
    pub comparison: &'a Comparison,
    pub filter: &'a ComparisonFilter,
    pub view: ViewMode,
    /// ANSI color; only the terminal adapter looks at this.
    pub color: bool,
    /// Separators of the left file, used to tokenize its segments.
    pub left_delimiters: Delimiters,
    /// Separators of the right file. Each file is detected on its own, so
    /// the two sets may differ.
    pub right_delimiters: Delimiters,
}

impl<'a> RenderContext<'a> {
    pub fn new(left_name: &'a str, right_name: &'a str, comparison: &'a Comparison) -> Self {
        static NO_FILTER: ComparisonFilter = ComparisonFilter {
            search: None,
            differences_only: false,
        };
        Self {
            left_name,
            right_name,
            comparison,
            filter: &NO_FILTER,
            view: ViewMode::default(),
            color: true,
            left_delimiters: Delimiters::default(),
            right_delimiters: Delimiters::default(),
        }
    }

    pub fn with_filter(mut self, filter: &'a ComparisonFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_delimiters(mut self, left: Delimiters, right: Delimiters) -> Self {
        self.left_delimiters = left;
        self.right_delimiters = right;
        self
    }

    /// Rows that pass the filter, paired with their index in the full
    /// comparison.
    pub fn visible_lines(&self) -> Vec<(usize, &'a ComparisonLine)> {
        self.comparison
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.filter.matches(line))
            .collect()
    }
}

/// Output adapter trait — renders a comparison in one format.
pub trait OutputAdapter {
    /// Render the comparison to a string.
    fn render(&self, ctx: &RenderContext) -> Result<String, DiffError>;

    /// Adapter name (for logging/debugging).
    fn name(&self) -> &str;
}

/// Get an adapter instance for the given format.
pub fn get_adapter(format: OutputFormat) -> Box<dyn OutputAdapter> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalAdapter::new()),
        OutputFormat::Json => Box::new(json::JsonAdapter::new()),
        OutputFormat::Html => Box::new(html::HtmlAdapter::new()),
    }
}
