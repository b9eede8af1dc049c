// classify.rs — Element classification for syntax highlighting.
//
// Each element of a segment gets a display category from a fixed, ordered
// rule list (first match wins):
//
//   date      — exactly 8 or exactly 6 digits (CCYYMMDD / YYMMDD)
//   number    — digits with an optional single decimal part
//   qualifier — 1 to 3 uppercase letters or digits
//   generic   — anything else
//
// The leading element of a segment is its identifier and is always tagged
// as such, never classified.

use std::sync::LazyLock;

use edi_segment::{Delimiters, Segment};
use regex::Regex;
use serde::{Deserialize, Serialize};

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{8}|\d{6})$").unwrap());
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());
static QUALIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{1,3}$").unwrap());

/// Display category of a single element value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Date,
    Number,
    Qualifier,
    Generic,
}

impl std::fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementCategory::Date => f.pad("date"),
            ElementCategory::Number => f.pad("number"),
            ElementCategory::Qualifier => f.pad("qualifier"),
            ElementCategory::Generic => f.pad("generic"),
        }
    }
}

/// What a highlighted token represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The segment's leading tag (e.g. "NM1").
    SegmentId,
    /// A classified element value.
    Element(ElementCategory),
    /// An element delimiter or the segment terminator.
    Separator,
}

/// One piece of a highlighted segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighlightToken {
    pub text: String,
    pub kind: TokenKind,
}

impl HighlightToken {
    fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Classify one element value.
pub fn classify_element(element: &str) -> ElementCategory {
    if DATE_RE.is_match(element) {
        ElementCategory::Date
    } else if NUMBER_RE.is_match(element) {
        ElementCategory::Number
    } else if QUALIFIER_RE.is_match(element) {
        ElementCategory::Qualifier
    } else {
        ElementCategory::Generic
    }
}

/// Split a segment into identifier, classified elements and separators.
///
/// Empty elements (as in `N1**X`) produce no token; their separators are
/// still emitted so the tokens concatenate back to the raw text.
pub fn highlight_segment(segment: &Segment, delimiters: &Delimiters) -> Vec<HighlightToken> {
    highlight_raw(&segment.raw, delimiters)
}

pub fn highlight_raw(raw: &str, delimiters: &Delimiters) -> Vec<HighlightToken> {
    let mut tokens = Vec::new();
    let mut first = true;
    let mut rest = raw;

    while !rest.is_empty() {
        let split = rest.find(|c: char| c == delimiters.element || c == delimiters.segment);
        let (piece, tail) = match split {
            Some(pos) => rest.split_at(pos),
            None => (rest, ""),
        };
        if !piece.is_empty() {
            let kind = if first {
                TokenKind::SegmentId
            } else {
                TokenKind::Element(classify_element(piece))
            };
            tokens.push(HighlightToken::new(piece, kind));
        }
        first = false;

        let mut chars = tail.chars();
        match chars.next() {
            Some(sep) => {
                tokens.push(HighlightToken::new(sep.to_string(), TokenKind::Separator));
                rest = chars.as_str();
            }
            None => rest = "",
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_reference_values() {
        assert_eq!(classify_element("20240115"), ElementCategory::Date);
        assert_eq!(classify_element("240115"), ElementCategory::Date);
        assert_eq!(classify_element("123.45"), ElementCategory::Number);
        assert_eq!(classify_element("HC"), ElementCategory::Qualifier);
        assert_eq!(classify_element("Acme Health Plan"), ElementCategory::Generic);
    }

    #[test]
    fn rule_order_decides_overlaps() {
        // Six digits is a date before it is a number.
        assert_eq!(classify_element("123456"), ElementCategory::Date);
        // Short digit strings are numbers before qualifiers.
        assert_eq!(classify_element("18"), ElementCategory::Number);
        assert_eq!(classify_element("1234567"), ElementCategory::Number);
        assert_eq!(classify_element("0F"), ElementCategory::Qualifier);
    }

    #[test]
    fn near_misses_fall_through() {
        assert_eq!(classify_element("12.3.4"), ElementCategory::Generic);
        assert_eq!(classify_element(".5"), ElementCategory::Generic);
        assert_eq!(classify_element("hc"), ElementCategory::Generic);
        assert_eq!(classify_element("ABCD"), ElementCategory::Generic);
        assert_eq!(classify_element(""), ElementCategory::Generic);
        assert_eq!(classify_element("2024-01-15"), ElementCategory::Generic);
    }

    #[test]
    fn highlights_segment_tokens_in_order() {
        let seg = Segment::new("DTP", "DTP*348*D8*20240115~", 4);
        let tokens = highlight_segment(&seg, &Delimiters::default());
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::SegmentId,
                TokenKind::Separator,
                TokenKind::Element(ElementCategory::Number),
                TokenKind::Separator,
                TokenKind::Element(ElementCategory::Qualifier),
                TokenKind::Separator,
                TokenKind::Element(ElementCategory::Date),
                TokenKind::Separator,
            ]
        );
        assert_eq!(tokens[0].text, "DTP");
        assert_eq!(tokens[7].text, "~");
    }

    #[test]
    fn tokens_concatenate_to_raw() {
        let raw = "NM1*IL*1*DOE*JOHN****34*123456789~";
        let tokens = highlight_raw(raw, &Delimiters::default());
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, raw);
    }

    #[test]
    fn tag_is_never_classified() {
        let tokens = highlight_raw("HD*030~", &Delimiters::default());
        assert_eq!(tokens[0].kind, TokenKind::SegmentId);
    }

    #[test]
    fn empty_and_unterminated_segments() {
        assert!(highlight_raw("", &Delimiters::default()).is_empty());
        let tokens = highlight_raw("SE*12", &Delimiters::default());
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].kind, TokenKind::Element(ElementCategory::Number));
    }

    #[test]
    fn honours_alternate_delimiters() {
        let delimiters = Delimiters::new('|', '!', '>');
        let tokens = highlight_raw("REF|0F|ABC123!", &delimiters);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["REF", "|", "0F", "|", "ABC123", "!"]);
        assert_eq!(tokens[4].kind, TokenKind::Element(ElementCategory::Generic));
    }
}
