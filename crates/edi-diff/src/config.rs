//! Comparison and display configuration
//!
//! Loaded from `.edidiff/config.toml` under the project root. Every field has
//! a serde default, so a partial file (or none at all) is valid.
//!
//! ```toml
//! [delimiters]
//! element = "*"
//! segment = "~"
//! detect_from_header = true
//!
//! [compare]
//! alignment = "positional"
//!
//! [display]
//! format = "terminal"
//! view = "side_by_side"
//! color = true
//! reveal_delay_ms = 40
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use edi_segment::Delimiters;
use serde::{Deserialize, Serialize};

use crate::compare::AlignmentStrategy;
use crate::error::DiffError;
use crate::output_adapters::{OutputFormat, ViewMode};

/// Config file location relative to the project root.
pub const CONFIG_RELATIVE_PATH: &str = ".edidiff/config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiffConfig {
    #[serde(default)]
    pub delimiters: DelimiterConfig,

    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Separator characters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DelimiterConfig {
    #[serde(default = "default_element")]
    pub element: char,

    #[serde(default = "default_segment")]
    pub segment: char,

    #[serde(default = "default_sub_element")]
    pub sub_element: char,

    /// Prefer the separators declared in a file's ISA header over the ones
    /// configured here.
    #[serde(default = "default_detect_from_header")]
    pub detect_from_header: bool,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self {
            element: default_element(),
            segment: default_segment(),
            sub_element: default_sub_element(),
            detect_from_header: default_detect_from_header(),
        }
    }
}

impl DelimiterConfig {
    pub fn to_delimiters(&self) -> Delimiters {
        Delimiters::new(self.element, self.segment, self.sub_element)
    }

    /// Effective delimiters for one file's content.
    pub fn resolve(&self, content: &str) -> Delimiters {
        if self.detect_from_header {
            self.to_delimiters().detect_or(content)
        } else {
            self.to_delimiters()
        }
    }
}

/// Alignment settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompareConfig {
    #[serde(default)]
    pub alignment: AlignmentStrategy,
}

/// Rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub view: ViewMode,

    /// ANSI color in terminal output.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Spacing between rows of the animated reveal.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            view: ViewMode::default(),
            color: default_color(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl DisplayConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

// Serde default functions
fn default_element() -> char {
    '*'
}

fn default_segment() -> char {
    '~'
}

fn default_sub_element() -> char {
    ':'
}

fn default_detect_from_header() -> bool {
    true
}

fn default_color() -> bool {
    true
}

fn default_reveal_delay_ms() -> u64 {
    40
}

impl DiffConfig {
    /// Default config path for a project root.
    pub fn path_for_project(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_RELATIVE_PATH)
    }

    /// Load config from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, DiffError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| DiffError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn for_project(project_root: &Path) -> Result<Self, DiffError> {
        Self::load(&Self::path_for_project(project_root))
    }
}
