// fields.rs — Element-level breakdown of a modified row.
//
// Row classification stays byte-exact on the raw segment text; this only
// explains which element positions differ so a reviewer can tell a date
// change from a trailing-whitespace change.

use edi_segment::{Delimiters, Segment};
use serde::{Deserialize, Serialize};

use crate::compare::{ComparisonLine, DiffType};

/// One element position whose value differs between the two sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementChange {
    /// Element position; 0 is the segment tag.
    pub position: usize,
    pub left: Option<String>,
    pub right: Option<String>,
}

fn elements<'a>(segment: &'a Segment, delimiters: &Delimiters) -> Vec<&'a str> {
    segment
        .raw
        .strip_suffix(delimiters.segment)
        .unwrap_or(&segment.raw)
        .split(delimiters.element)
        .collect()
}

/// Differing element positions of a modified row. Other rows yield nothing.
///
/// Each side is split with its own file's separators.
pub fn element_changes(
    line: &ComparisonLine,
    left_delimiters: &Delimiters,
    right_delimiters: &Delimiters,
) -> Vec<ElementChange> {
    let (Some(left), Some(right)) = (&line.left_segment, &line.right_segment) else {
        return Vec::new();
    };
    if line.diff_type != DiffType::Modified {
        return Vec::new();
    }

    let l = elements(left, left_delimiters);
    let r = elements(right, right_delimiters);
    (0..l.len().max(r.len()))
        .filter_map(|i| {
            let a = l.get(i).copied();
            let b = r.get(i).copied();
            (a != b).then(|| ElementChange {
                position: i,
                left: a.map(str::to_string),
                right: b.map(str::to_string),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(line: &ComparisonLine) -> Vec<ElementChange> {
        element_changes(line, &Delimiters::default(), &Delimiters::default())
    }

    fn modified(a: &str, b: &str) -> ComparisonLine {
        ComparisonLine::from_pair(Some(&Segment::new("X", a, 1)), Some(&Segment::new("X", b, 1)))
            .unwrap()
    }

    #[test]
    fn reports_changed_positions() {
        let line = modified("DTP*348*D8*20240101~", "DTP*348*D8*20240201~");
        assert_eq!(
            changes(&line),
            vec![ElementChange {
                position: 3,
                left: Some("20240101".to_string()),
                right: Some("20240201".to_string()),
            }]
        );
    }

    #[test]
    fn extra_elements_show_one_side() {
        let line = modified("REF*0F*1~", "REF*0F*1*X~");
        let found = changes(&line);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, 3);
        assert_eq!(found[0].left, None);
    }

    #[test]
    fn each_side_splits_on_its_own_separators() {
        let line = modified("REF*0F*20240101~", "REF|0F|20240102!");
        let pipe = Delimiters::new('|', '!', '>');
        let found = element_changes(&line, &Delimiters::default(), &pipe);
        assert_eq!(
            found,
            vec![ElementChange {
                position: 2,
                left: Some("20240101".to_string()),
                right: Some("20240102".to_string()),
            }]
        );
    }

    #[test]
    fn unchanged_and_one_sided_rows_have_no_changes() {
        let same = modified("A*1~", "A*1~");
        assert!(changes(&same).is_empty());

        let added = ComparisonLine::from_pair(None, Some(&Segment::new("A", "A*1~", 1))).unwrap();
        assert!(changes(&added).is_empty());
    }
}
