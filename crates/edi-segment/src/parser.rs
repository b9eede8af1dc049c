// parser.rs — Split raw interchange text into segments.
//
// Segments end at the segment terminator. Line breaks between segments are
// common in real files and are skipped; a segment's line number is the line
// its first non-whitespace character sits on. Parsing never fails: text
// without any terminator is a single unterminated segment, empty input is
// an empty file.

use crate::delimiters::Delimiters;
use crate::segment::{FileType, ParsedFile, Segment};

/// Parse text, reading delimiters from its ISA header when present.
pub fn parse(text: &str) -> ParsedFile {
    parse_with(text, &Delimiters::default().detect_or(text))
}

/// Parse text with explicit delimiters.
pub fn parse_with(text: &str, delimiters: &Delimiters) -> ParsedFile {
    let mut segments = Vec::new();
    let mut line = 1usize;
    let mut start_line: Option<usize> = None;
    let mut current = String::new();

    for ch in text.chars() {
        if ch == delimiters.segment {
            if let Some(start) = start_line.take() {
                push_segment(&mut segments, &current, start, Some(ch), delimiters);
            }
            current.clear();
            if ch == '\n' {
                line += 1;
            }
            continue;
        }
        match ch {
            '\n' => line += 1,
            '\r' => {}
            c if start_line.is_none() && c.is_whitespace() => {}
            c => {
                start_line.get_or_insert(line);
                current.push(c);
            }
        }
    }
    if let Some(start) = start_line {
        push_segment(&mut segments, &current, start, None, delimiters);
    }

    let file_type = detect_file_type(&segments, delimiters);
    tracing::debug!(
        segments = segments.len(),
        file_type = %file_type,
        "parsed EDI text"
    );
    ParsedFile::new(file_type, segments)
}

fn push_segment(
    segments: &mut Vec<Segment>,
    body: &str,
    line_number: usize,
    terminator: Option<char>,
    delimiters: &Delimiters,
) {
    let body = body.trim_end();
    if body.is_empty() {
        return;
    }
    let tag = body
        .split(delimiters.element)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    let mut raw = body.to_string();
    if let Some(t) = terminator {
        raw.push(t);
    }
    segments.push(Segment {
        tag,
        raw,
        line_number,
    });
}

/// Determine the transaction type from the header segments.
///
/// ST01 decides when present; otherwise the GS01 functional identifier
/// (`BE` enrollment, `RA` payment) is used.
pub fn detect_file_type(segments: &[Segment], delimiters: &Delimiters) -> FileType {
    if let Some(st) = segments.iter().find(|s| s.tag == "ST") {
        return FileType::from_transaction_code(&element_at(st, 1, delimiters));
    }
    if let Some(gs) = segments.iter().find(|s| s.tag == "GS") {
        return match element_at(gs, 1, delimiters).as_str() {
            "BE" => FileType::Enrollment834,
            "RA" => FileType::Payment820,
            _ => FileType::Unknown,
        };
    }
    FileType::Unknown
}

fn element_at(segment: &Segment, index: usize, delimiters: &Delimiters) -> String {
    segment
        .raw
        .trim_end_matches(delimiters.segment)
        .split(delimiters.element)
        .nth(index)
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISA: &str = "ISA*00*          *00*          *ZZ*SENDER         *ZZ*RECEIVER       *210101*1200*^*00501*000000001*0*P*:~";

    #[test]
    fn splits_on_terminator_and_keeps_it_in_raw() {
        let file = parse("A*1~B*2~");
        assert_eq!(file.segments.len(), 2);
        assert_eq!(file.segments[0].raw, "A*1~");
        assert_eq!(file.segments[0].tag, "A");
        assert_eq!(file.segments[1].raw, "B*2~");
    }

    #[test]
    fn line_numbers_follow_newlines() {
        let file = parse("ST*834*0001~\nBGN*00*X~\r\n\nINS*Y*18~");
        let lines: Vec<usize> = file.segments.iter().map(|s| s.line_number).collect();
        assert_eq!(lines, vec![1, 2, 4]);
        assert_eq!(file.segments[2].tag, "INS");
        assert!(!file.segments[1].raw.contains('\r'));
    }

    #[test]
    fn segments_on_one_line_share_line_number() {
        let file = parse("A*1~B*2~\nC*3~");
        let lines: Vec<usize> = file.segments.iter().map(|s| s.line_number).collect();
        assert_eq!(lines, vec![1, 1, 2]);
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_segments() {
        assert!(parse("").is_empty());
        assert!(parse("  \n\r\n ").is_empty());
        assert!(parse("~~~").is_empty());
    }

    #[test]
    fn trailing_unterminated_segment_is_kept() {
        let file = parse("A*1~B*2");
        assert_eq!(file.segments.len(), 2);
        assert_eq!(file.segments[1].raw, "B*2");
    }

    #[test]
    fn detects_834_and_820_from_st() {
        let enrollment = parse(&format!("{ISA}\nGS*BE*S*R*20240101*1200*1*X*005010X220A1~\nST*834*0001~"));
        assert_eq!(enrollment.file_type, FileType::Enrollment834);

        let payment = parse("ST*820*0001*005010X218~\nBPR*I*150.00*C*ACH~");
        assert_eq!(payment.file_type, FileType::Payment820);

        let other = parse("ST*837*0001~");
        assert_eq!(other.file_type, FileType::Unknown);
    }

    #[test]
    fn falls_back_to_gs_functional_id() {
        let file = parse("GS*RA*S*R*20240101*1200*1*X*005010~");
        assert_eq!(file.file_type, FileType::Payment820);
    }

    #[test]
    fn alternate_delimiters_from_isa_header() {
        let isa = ISA.replace('*', "|").replace(":~", ">!");
        let text = format!("{isa}\nST|834|0001!\nREF|0F|123!");
        let file = parse(&text);
        assert_eq!(file.segments.len(), 3);
        assert_eq!(file.segments[1].tag, "ST");
        assert_eq!(file.segments[2].raw, "REF|0F|123!");
        assert_eq!(file.file_type, FileType::Enrollment834);
    }
}
