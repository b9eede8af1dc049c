// compare_flow.rs — End-to-end comparison of two 834 enrollment files.
//
// Flow:
//   1. Write baseline and candidate interchanges plus a project config to disk
//   2. Load both through the file store and select them in a session
//   3. Compare, filter and render in every output format
//   4. Swap the alignment strategy and check the Myers tallies

use std::fs;

use edi_diff::{
    get_adapter, AlignmentStrategy, ComparisonFilter, ComparisonSession, DiffConfig, DiffType,
    OutputFormat, RenderContext, ViewMode,
};
use edi_segment::{FileStore, FileType};
use tempfile::TempDir;

const ISA: &str = "ISA*00*          *00*          *ZZ*SENDER         *ZZ*RECEIVER       *240101*1200*^*00501*000000001*0*P*:~";

fn baseline() -> String {
    format!(
        "{ISA}\nGS*BE*SENDER*RECEIVER*20240101*1200*1*X*005010X220A1~\n\
         ST*834*0001*005010X220A1~\n\
         BGN*00*12456*20240101*1200****2~\n\
         INS*Y*18*030*XN*A*E**FT~\n\
         NM1*IL*1*DOE*JOHN****34*123456789~\n\
         DTP*356*D8*20240101~\n\
         SE*6*0001~\nGE*1*1~\nIEA*1*000000001~\n"
    )
}

fn candidate() -> String {
    format!(
        "{ISA}\nGS*BE*SENDER*RECEIVER*20240101*1200*1*X*005010X220A1~\n\
         ST*834*0001*005010X220A1~\n\
         BGN*00*12456*20240101*1200****2~\n\
         REF*0F*123456789~\n\
         INS*Y*18*030*XN*A*E**FT~\n\
         NM1*IL*1*DOE*JOHN****34*123456789~\n\
         DTP*356*D8*20240101~\n\
         SE*7*0001~\nGE*1*1~\nIEA*1*000000001~\n"
    )
}

#[test]
fn enrollment_files_compare_end_to_end() {
    let project = TempDir::new().unwrap();
    let config_path = DiffConfig::path_for_project(project.path());
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "[display]\nreveal_delay_ms = 10\n").unwrap();
    fs::write(project.path().join("baseline.edi"), baseline()).unwrap();
    fs::write(project.path().join("candidate.edi"), candidate()).unwrap();

    // Load through the store.
    let config = DiffConfig::for_project(project.path()).unwrap();
    let mut store = FileStore::with_delimiters(config.delimiters.to_delimiters());
    let left = store
        .load_path(project.path().join("baseline.edi"))
        .unwrap();
    let right = store
        .load_path(project.path().join("candidate.edi"))
        .unwrap();
    assert_eq!(left.file_type, FileType::Enrollment834);
    assert_eq!(store.list().len(), 2);

    // Select and compare.
    let mut session = ComparisonSession::new(&config);
    session.select_left(&left.content);
    session.select_right(&right.content);
    let comparison = session.comparison().unwrap().clone();

    assert_eq!(comparison.lines.len(), 11);
    assert_eq!(comparison.lines[0].diff_type, DiffType::Unchanged);
    assert_eq!(comparison.lines[4].diff_type, DiffType::Modified);
    assert_eq!(comparison.lines[10].diff_type, DiffType::Added);
    assert_eq!(comparison.stats.total(), 11);
    assert_eq!(comparison.stats.unchanged, 4);
    assert_eq!(comparison.stats.added, 1);
    // Positional alignment shifts every row after the inserted REF.
    assert_eq!(comparison.stats.modified, 6);

    // Filter does not touch the stats.
    let filter = ComparisonFilter::new()
        .with_differences_only(true)
        .with_search("ref*0f");
    let matched = filter.apply(&comparison.lines);
    assert_eq!(matched.len(), 1);
    assert_eq!(comparison.stats.changed(), 7);

    // Every adapter renders.
    for format in [OutputFormat::Terminal, OutputFormat::Json, OutputFormat::Html] {
        for view in [ViewMode::SideBySide, ViewMode::Unified] {
            let ctx = RenderContext::new("baseline.edi", "candidate.edi", &comparison)
                .with_filter(&filter)
                .with_view(view)
                .with_color(false);
            let out = get_adapter(format).render(&ctx).unwrap();
            let expected = match format {
                OutputFormat::Html => "<span class=\"tok-id\">REF</span>",
                _ => "REF*0F*123456789~",
            };
            assert!(out.contains(expected), "{format} / {view}");
            assert!(!out.contains("NM1*IL"), "{format} / {view}");
        }
    }

    // Myers alignment recognises the single insertion.
    session.set_strategy(AlignmentStrategy::Myers);
    let myers = session.comparison().unwrap();
    assert_eq!(myers.stats.unchanged, 9);
    assert_eq!(
        myers.stats.removed + myers.stats.modified + myers.stats.unchanged,
        10
    );
    assert_eq!(
        myers.stats.added + myers.stats.modified + myers.stats.unchanged,
        11
    );
}

#[test]
fn isa_header_delimiters_are_detected() {
    let pipe = baseline().replace('*', "|").replace('~', "!");
    let config = DiffConfig::default();
    let mut session = ComparisonSession::new(&config);
    session.select_left(&pipe);
    session.select_right(&baseline());

    let left = session.left().unwrap();
    let right = session.right().unwrap();
    assert_eq!(left.len(), right.len());
    assert_eq!(left.file_type, FileType::Enrollment834);
    assert_eq!(left.segments[3].tag, "BGN");

    // Same structure, different separators: every row differs byte-wise.
    let cmp = session.comparison().unwrap();
    assert_eq!(cmp.stats.modified, cmp.lines.len());
}

#[test]
fn reveal_follows_comparison_rows() {
    let mut session = ComparisonSession::new(&DiffConfig::default());
    session.select_left(&baseline());
    session.select_right(&candidate());
    let rows = session.comparison().unwrap().lines.len();

    let delay = session.start_reveal(rows).delay();
    let timeline = session.reveal().unwrap();
    assert_eq!(timeline.tick(delay * 2), vec![0, 1, 2]);

    session.select_right(&baseline());
    assert!(session.reveal().is_none());
}
