// delimiters.rs — Element, segment and sub-element separators.
//
// X12 interchanges declare their own separators in the fixed-width ISA
// header: byte 3 is the element separator, byte 104 the component
// (sub-element) separator and byte 105 the segment terminator. Most files
// use the `*` / `~` / `:` defaults.

use serde::{Deserialize, Serialize};

/// Fixed length of an ISA segment including its terminator.
const ISA_LENGTH: usize = 106;
const ISA_ELEMENT_POS: usize = 3;
const ISA_SUB_ELEMENT_POS: usize = 104;
const ISA_TERMINATOR_POS: usize = 105;

/// The separator characters of an interchange.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Delimiters {
    /// Separates elements within a segment (default `*`).
    #[serde(default = "default_element")]
    pub element: char,
    /// Terminates a segment (default `~`).
    #[serde(default = "default_segment")]
    pub segment: char,
    /// Separates components of a composite element (default `:`).
    #[serde(default = "default_sub_element")]
    pub sub_element: char,
}

fn default_element() -> char {
    '*'
}

fn default_segment() -> char {
    '~'
}

fn default_sub_element() -> char {
    ':'
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            element: default_element(),
            segment: default_segment(),
            sub_element: default_sub_element(),
        }
    }
}

impl Delimiters {
    pub fn new(element: char, segment: char, sub_element: char) -> Self {
        Self {
            element,
            segment,
            sub_element,
        }
    }

    /// Read the separators from a leading ISA header.
    ///
    /// Returns `None` when the text (after leading whitespace) does not start
    /// with `ISA` or is too short to hold a full header.
    pub fn from_isa(text: &str) -> Option<Self> {
        let header = text.trim_start();
        if !header.starts_with("ISA") {
            return None;
        }
        let bytes = header.as_bytes();
        if bytes.len() < ISA_LENGTH {
            tracing::warn!(
                len = bytes.len(),
                "ISA header shorter than {} bytes, using default delimiters",
                ISA_LENGTH
            );
            return None;
        }
        let element = bytes[ISA_ELEMENT_POS];
        let sub_element = bytes[ISA_SUB_ELEMENT_POS];
        let segment = bytes[ISA_TERMINATOR_POS];
        if !(element.is_ascii() && sub_element.is_ascii() && segment.is_ascii()) {
            return None;
        }
        Some(Self::new(
            element as char,
            segment as char,
            sub_element as char,
        ))
    }

    /// Separators from the ISA header when present, otherwise `self`.
    pub fn detect_or(self, text: &str) -> Self {
        Self::from_isa(text).unwrap_or(self)
    }
}
