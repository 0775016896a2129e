//! Term frequency extraction and pairwise near-duplicate detection.
//!
//! The pairwise scan is O(distinct²); callers cap the term set with
//! `TermFrequencyMap::top_n` and may cancel mid-scan.

use lexis_core::config::ConsistencyConfig;
use lexis_core::errors::CheckError;
use lexis_core::models::RuleName;
use lexis_core::traits::Cancellable;
use rustc_hash::FxHashMap;

use crate::checkers::require;
use crate::similarity::similarity;

// ASCII boundaries: a Latin word glued to CJK text is still a token.
lazy_pattern!(RE_WORD, r"(?-u:\b)[a-z]+(?-u:\b)");

/// A counted term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub term: String,
    pub count: usize,
    /// Length in characters.
    pub len: usize,
}

/// Lowercase term → occurrence count, in first-occurrence order.
/// Scoped to one validation call.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyMap {
    entries: Vec<TermEntry>,
}

impl TermFrequencyMap {
    /// Count lowercase word tokens strictly longer than `min_len` characters.
    pub fn from_content(content: &str, min_len: usize) -> Result<Self, CheckError> {
        let word = require(RuleName::Consistency, "word", &RE_WORD)?;
        let lowered = content.to_lowercase();

        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut entries: Vec<TermEntry> = Vec::new();

        for m in word.find_iter(&lowered) {
            let token = m.as_str();
            let len = token.chars().count();
            if len <= min_len {
                continue;
            }
            match index.get(token) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(token, entries.len());
                    entries.push(TermEntry {
                        term: token.to_string(),
                        count: 1,
                        len,
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Keep the `n` most frequent terms (ties broken by first occurrence),
    /// preserving first-occurrence order among the survivors.
    pub fn top_n(self, n: usize) -> Self {
        if self.entries.len() <= n {
            return self;
        }
        let mut ranked: Vec<usize> = (0..self.entries.len()).collect();
        ranked.sort_by(|&a, &b| {
            self.entries[b]
                .count
                .cmp(&self.entries[a].count)
                .then(a.cmp(&b))
        });
        let mut keep = ranked[..n].to_vec();
        keep.sort_unstable();

        let entries = keep.into_iter().map(|i| self.entries[i].clone()).collect();
        Self { entries }
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.term == term).map(|e| e.count)
    }

    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A likely unintended variant pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermVariant {
    pub first: String,
    pub second: String,
    /// Combined frequency of both spellings.
    pub count: usize,
}

/// Outcome of the pairwise scan.
#[derive(Debug, Clone, Default)]
pub struct VariantScan {
    pub variants: Vec<TermVariant>,
    /// The scan stopped before visiting every pair.
    pub cancelled: bool,
}

/// Flag every unordered pair whose lengths differ by at most
/// `max_length_delta` and whose similarity lies strictly inside
/// `(similarity_floor, similarity_ceiling)`.
pub fn find_variants(
    terms: &TermFrequencyMap,
    config: &ConsistencyConfig,
    cancellation: &dyn Cancellable,
) -> VariantScan {
    let entries = terms.entries();
    let mut scan = VariantScan::default();

    for (i, a) in entries.iter().enumerate() {
        if cancellation.is_cancelled() {
            scan.cancelled = true;
            break;
        }
        for b in &entries[i + 1..] {
            if a.len.abs_diff(b.len) > config.max_length_delta {
                continue;
            }
            let sim = similarity(&a.term, &b.term);
            if sim > config.similarity_floor && sim < config.similarity_ceiling {
                scan.variants.push(TermVariant {
                    first: a.term.clone(),
                    second: b.term.clone(),
                    count: a.count + b.count,
                });
            }
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::traits::CancellationToken;

    #[test]
    fn counts_only_long_lowercased_tokens() {
        let map = TermFrequencyMap::from_content("Implement the IMPLEMENT plan; implement it.", 6)
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("implement"), Some(3));
        assert_eq!(map.get("plan"), None);
    }

    #[test]
    fn tokens_glued_to_cjk_text_are_counted() {
        let map = TermFrequencyMap::from_content("我们implement缓存，再implement队列。", 6).unwrap();
        assert_eq!(map.get("implement"), Some(2));
    }

    #[test]
    fn six_character_tokens_are_excluded() {
        let map = TermFrequencyMap::from_content("policy policys", 6).unwrap();
        assert_eq!(map.get("policy"), None);
        assert_eq!(map.get("policys"), Some(1));
    }

    #[test]
    fn top_n_keeps_most_frequent_in_first_occurrence_order() {
        let text = "alphabet builders builders charmers charmers charmers";
        let map = TermFrequencyMap::from_content(text, 6).unwrap().top_n(2);
        let terms: Vec<&str> = map.entries().iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["builders", "charmers"]);
    }

    #[test]
    fn top_n_breaks_ties_by_first_occurrence() {
        let text = "zeppelin airplane gondolas";
        let map = TermFrequencyMap::from_content(text, 6).unwrap().top_n(2);
        let terms: Vec<&str> = map.entries().iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["zeppelin", "airplane"]);
    }

    #[test]
    fn finds_near_duplicate_pair() {
        let map =
            TermFrequencyMap::from_content("implement implement implement implememt", 6).unwrap();
        let scan = find_variants(
            &map,
            &ConsistencyConfig::default(),
            &CancellationToken::new(),
        );
        assert!(!scan.cancelled);
        assert_eq!(
            scan.variants,
            vec![TermVariant {
                first: "implement".into(),
                second: "implememt".into(),
                count: 4,
            }]
        );
    }

    #[test]
    fn length_delta_gate_skips_distant_lengths() {
        // "configure" (9) vs "configuration" (13): similarity is below the
        // floor anyway, but the length gate rejects it first.
        let map = TermFrequencyMap::from_content("configure configuration", 6).unwrap();
        let scan = find_variants(
            &map,
            &ConsistencyConfig::default(),
            &CancellationToken::new(),
        );
        assert!(scan.variants.is_empty());
    }

    #[test]
    fn cancelled_scan_reports_cancellation() {
        let map = TermFrequencyMap::from_content("implement implememt", 6).unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let scan = find_variants(&map, &ConsistencyConfig::default(), &token);
        assert!(scan.cancelled);
        assert!(scan.variants.is_empty());
    }
}
