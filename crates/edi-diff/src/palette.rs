// palette.rs — Fixed color vocabulary shared by every renderer.
//
// added → green, removed → red, modified → amber, unchanged → gray.
// Terminal and HTML output both go through this table so the mapping cannot
// drift between formats.

use crate::classify::{ElementCategory, TokenKind};
use crate::compare::DiffType;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffColor {
    Green,
    Red,
    Amber,
    Gray,
}

impl DiffColor {
    pub fn for_type(diff_type: DiffType) -> Self {
        match diff_type {
            DiffType::Added => DiffColor::Green,
            DiffType::Removed => DiffColor::Red,
            DiffType::Modified => DiffColor::Amber,
            DiffType::Unchanged => DiffColor::Gray,
        }
    }

    pub fn ansi(self) -> &'static str {
        match self {
            DiffColor::Green => "\x1b[32m",
            DiffColor::Red => "\x1b[31m",
            DiffColor::Amber => "\x1b[33m",
            DiffColor::Gray => "\x1b[90m",
        }
    }

    /// Text color for HTML output.
    pub fn hex(self) -> &'static str {
        match self {
            DiffColor::Green => "#065f46",
            DiffColor::Red => "#991b1b",
            DiffColor::Amber => "#92400e",
            DiffColor::Gray => "#6b7280",
        }
    }

    /// Background color for HTML output.
    pub fn background_hex(self) -> &'static str {
        match self {
            DiffColor::Green => "#d1fae5",
            DiffColor::Red => "#fee2e2",
            DiffColor::Amber => "#fef3c7",
            DiffColor::Gray => "#f9fafb",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DiffColor::Green => "green",
            DiffColor::Red => "red",
            DiffColor::Amber => "amber",
            DiffColor::Gray => "gray",
        }
    }
}

/// Gutter marker for unified views.
pub fn marker(diff_type: DiffType) -> char {
    match diff_type {
        DiffType::Added => '+',
        DiffType::Removed => '-',
        DiffType::Modified => '~',
        DiffType::Unchanged => ' ',
    }
}

/// ANSI color for a highlighted token.
pub fn token_ansi(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::SegmentId => "\x1b[1;34m",
        TokenKind::Separator => DIM,
        TokenKind::Element(ElementCategory::Date) => "\x1b[35m",
        TokenKind::Element(ElementCategory::Number) => "\x1b[36m",
        TokenKind::Element(ElementCategory::Qualifier) => "\x1b[33m",
        TokenKind::Element(ElementCategory::Generic) => "",
    }
}

/// CSS class for a highlighted token.
pub fn token_class(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::SegmentId => "tok-id",
        TokenKind::Separator => "tok-sep",
        TokenKind::Element(ElementCategory::Date) => "tok-date",
        TokenKind::Element(ElementCategory::Number) => "tok-number",
        TokenKind::Element(ElementCategory::Qualifier) => "tok-qualifier",
        TokenKind::Element(ElementCategory::Generic) => "tok-generic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_type_color_contract() {
        assert_eq!(DiffColor::for_type(DiffType::Added).name(), "green");
        assert_eq!(DiffColor::for_type(DiffType::Removed).name(), "red");
        assert_eq!(DiffColor::for_type(DiffType::Modified).name(), "amber");
        assert_eq!(DiffColor::for_type(DiffType::Unchanged).name(), "gray");
    }

    #[test]
    fn markers_are_distinct() {
        let all = [
            DiffType::Added,
            DiffType::Removed,
            DiffType::Modified,
            DiffType::Unchanged,
        ];
        let markers: std::collections::HashSet<char> = all.iter().map(|t| marker(*t)).collect();
        assert_eq!(markers.len(), 4);
    }
}
