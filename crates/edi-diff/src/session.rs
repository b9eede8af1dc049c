// session.rs — Current file selection, memoized parsing and supersession.
//
// A ComparisonSession holds the left/right selection. Every new selection
// bumps a generation counter and drops the previous comparison and reveal
// animation outright; results computed for an older generation are refused
// when offered back. There is no partial merging: a comparison is always
// recomputed in full from the current pair.

use std::collections::HashMap;
use std::time::Duration;

use edi_segment::{parse_with, Delimiters, ParsedFile};
use sha2::{Digest, Sha256};

use crate::compare::{AlignmentStrategy, Comparison};
use crate::config::{DelimiterConfig, DiffConfig};
use crate::error::DiffError;
use crate::reveal::RevealTimeline;

/// Memoizes parsed files by content hash and delimiters.
///
/// Parsing is deterministic, so a hit returns exactly what a fresh parse
/// would. The cache itself never evicts; a `ComparisonSession` prunes it to
/// the current left and right files after each selection.
#[derive(Debug, Default)]
pub struct ParseCache {
    entries: HashMap<String, ParsedFile>,
    hits: usize,
    misses: usize,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&mut self, content: &str, delimiters: &Delimiters) -> ParsedFile {
        self.lookup(cache_key(content, delimiters), content, delimiters)
    }

    fn lookup(&mut self, key: String, content: &str, delimiters: &Delimiters) -> ParsedFile {
        if let Some(parsed) = self.entries.get(&key) {
            self.hits += 1;
            return parsed.clone();
        }
        self.misses += 1;
        let parsed = parse_with(content, delimiters);
        self.entries.insert(key, parsed.clone());
        parsed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop every entry whose key is not in `keep`.
    pub fn retain_keys(&mut self, keep: &[&str]) {
        let before = self.entries.len();
        self.entries.retain(|key, _| keep.contains(&key.as_str()));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = self.entries.len(), "pruned parse cache");
        }
    }
}

fn cache_key(content: &str, delimiters: &Delimiters) -> String {
    let mut hasher = Sha256::new();
    let separators: String = [delimiters.element, delimiters.segment, delimiters.sub_element]
        .iter()
        .collect();
    hasher.update(separators.as_bytes());
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Inputs snapshot for one comparison run.
#[derive(Debug, Clone)]
pub struct ComparisonJob {
    pub generation: u64,
    pub left: ParsedFile,
    pub right: ParsedFile,
    pub strategy: AlignmentStrategy,
}

impl ComparisonJob {
    pub fn run(&self) -> ComparisonOutcome {
        ComparisonOutcome {
            generation: self.generation,
            comparison: Comparison::new(&self.left, &self.right, self.strategy),
        }
    }
}

/// A finished comparison tagged with the generation it was computed for.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub generation: u64,
    pub comparison: Comparison,
}

#[derive(Debug)]
pub struct ComparisonSession {
    delimiters: DelimiterConfig,
    strategy: AlignmentStrategy,
    reveal_delay: Duration,
    left: Option<ParsedFile>,
    right: Option<ParsedFile>,
    left_key: Option<String>,
    right_key: Option<String>,
    generation: u64,
    comparison: Option<Comparison>,
    reveal: Option<RevealTimeline>,
    cache: ParseCache,
}

impl ComparisonSession {
    pub fn new(config: &DiffConfig) -> Self {
        Self {
            delimiters: config.delimiters.clone(),
            strategy: config.compare.alignment,
            reveal_delay: config.display.reveal_delay(),
            left: None,
            right: None,
            left_key: None,
            right_key: None,
            generation: 0,
            comparison: None,
            reveal: None,
            cache: ParseCache::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn strategy(&self) -> AlignmentStrategy {
        self.strategy
    }

    /// Delimiters used for a given content under this session's settings.
    pub fn delimiters_for(&self, content: &str) -> Delimiters {
        self.delimiters.resolve(content)
    }

    pub fn select_left(&mut self, content: &str) -> u64 {
        let (key, parsed) = self.parse(content);
        self.left = Some(parsed);
        self.left_key = Some(key);
        self.prune_cache();
        self.supersede()
    }

    pub fn select_right(&mut self, content: &str) -> u64 {
        let (key, parsed) = self.parse(content);
        self.right = Some(parsed);
        self.right_key = Some(key);
        self.prune_cache();
        self.supersede()
    }

    pub fn set_strategy(&mut self, strategy: AlignmentStrategy) -> u64 {
        self.strategy = strategy;
        self.supersede()
    }

    pub fn left(&self) -> Option<&ParsedFile> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&ParsedFile> {
        self.right.as_ref()
    }

    fn parse(&mut self, content: &str) -> (String, ParsedFile) {
        let delimiters = self.delimiters_for(content);
        let key = cache_key(content, &delimiters);
        let parsed = self.cache.lookup(key.clone(), content, &delimiters);
        (key, parsed)
    }

    /// Keep only the parses of the current selection.
    fn prune_cache(&mut self) {
        let keep: Vec<&str> = [&self.left_key, &self.right_key]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        self.cache.retain_keys(&keep);
    }

    fn supersede(&mut self) -> u64 {
        self.generation += 1;
        self.comparison = None;
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.cancel();
        }
        self.reveal = None;
        tracing::debug!(generation = self.generation, "comparison inputs changed");
        self.generation
    }

    /// Snapshot the current inputs, if both sides are selected.
    pub fn job(&self) -> Option<ComparisonJob> {
        Some(ComparisonJob {
            generation: self.generation,
            left: self.left.clone()?,
            right: self.right.clone()?,
            strategy: self.strategy,
        })
    }

    /// Accept a finished comparison if it belongs to the current generation.
    pub fn install(&mut self, outcome: ComparisonOutcome) -> Result<&Comparison, DiffError> {
        if outcome.generation != self.generation {
            tracing::debug!(
                got = outcome.generation,
                current = self.generation,
                "discarding superseded comparison"
            );
            return Err(DiffError::StaleGeneration {
                got: outcome.generation,
                current: self.generation,
            });
        }
        Ok(self.comparison.insert(outcome.comparison))
    }

    /// The comparison for the current selection, computing it if needed.
    pub fn comparison(&mut self) -> Option<&Comparison> {
        if self.comparison.is_none() {
            let outcome = self.job()?.run();
            self.comparison = Some(outcome.comparison);
        }
        self.comparison.as_ref()
    }

    /// Start a fresh reveal animation over `len` rows.
    pub fn start_reveal(&mut self, len: usize) -> &mut RevealTimeline {
        if let Some(previous) = self.reveal.as_mut() {
            previous.cancel();
        }
        self.reveal.insert(RevealTimeline::new(len, self.reveal_delay))
    }

    pub fn reveal(&mut self) -> Option<&mut RevealTimeline> {
        self.reveal.as_mut()
    }

    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::DiffType;

    fn session() -> ComparisonSession {
        ComparisonSession::new(&DiffConfig::default())
    }

    #[test]
    fn cache_hit_matches_fresh_parse() {
        let mut cache = ParseCache::new();
        let d = Delimiters::default();
        let first = cache.get_or_parse("A*1~B*2~", &d);
        let second = cache.get_or_parse("A*1~B*2~", &d);
        assert_eq!(first, second);
        assert_eq!(first, parse_with("A*1~B*2~", &d));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn cache_distinguishes_delimiters() {
        let mut cache = ParseCache::new();
        cache.get_or_parse("A|1!", &Delimiters::default());
        cache.get_or_parse("A|1!", &Delimiters::new('|', '!', '>'));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn comparison_needs_both_sides() {
        let mut s = session();
        s.select_left("A*1~");
        assert!(s.comparison().is_none());
        s.select_right("A*2~");
        let cmp = s.comparison().unwrap();
        assert_eq!(cmp.lines[0].diff_type, DiffType::Modified);
    }

    #[test]
    fn new_selection_supersedes_pending_result() {
        let mut s = session();
        s.select_left("A*1~");
        s.select_right("A*1~");
        let job = s.job().unwrap();

        s.select_right("A*9~");
        let stale = job.run();
        assert!(matches!(
            s.install(stale),
            Err(DiffError::StaleGeneration { .. })
        ));

        let fresh = s.job().unwrap().run();
        let cmp = s.install(fresh).unwrap();
        assert_eq!(cmp.stats.modified, 1);
    }

    #[test]
    fn new_selection_drops_reveal() {
        let mut s = session();
        s.select_left("A~B~");
        s.select_right("A~C~");
        s.start_reveal(2).tick(Duration::ZERO);
        assert!(s.reveal().is_some());
        s.select_left("A~");
        assert!(s.reveal().is_none());
    }

    #[test]
    fn reselecting_same_content_uses_cache() {
        let mut s = session();
        s.select_left("ST*834*1~");
        s.select_right("ST*834*1~");
        s.select_left("ST*834*1~");
        assert_eq!(s.cache().len(), 1);
        assert_eq!(s.cache().hits(), 2);
        assert_eq!(s.generation(), 3);
    }

    #[test]
    fn cache_holds_only_current_selection() {
        let mut s = session();
        s.select_left("A*1~");
        s.select_right("B*1~");
        for n in 2..10 {
            s.select_left(&format!("A*{}~", n));
        }
        assert_eq!(s.cache().len(), 2);
        assert_eq!(s.cache().misses(), 10);

        // The right file survives left-side churn and is still a hit.
        s.select_right("B*1~");
        assert_eq!(s.cache().hits(), 1);
        assert_eq!(s.cache().len(), 2);
    }

    #[test]
    fn retain_keys_evicts_the_rest() {
        let mut cache = ParseCache::new();
        let d = Delimiters::default();
        cache.get_or_parse("A~", &d);
        cache.get_or_parse("B~", &d);
        let keep = cache_key("B~", &d);
        cache.retain_keys(&[keep.as_str()]);
        assert_eq!(cache.len(), 1);
        cache.get_or_parse("B~", &d);
        assert_eq!(cache.hits(), 1);
    }
}
