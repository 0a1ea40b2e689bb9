use toolscout_catalog::ToolIndexEntry;

use crate::strategy::{ScoringStrategy, StrategyId};
use crate::tokens::QueryTokens;

/// Similarities below this floor are treated as no evidence. Keeps fuzzy a
/// misspelling-recovery signal instead of an always-on noise term: a
/// transposed query like "pnig" → "ping" sits exactly at 0.5, while
/// unrelated names land far below it.
pub(crate) const MIN_SIMILARITY: f32 = 0.5;

/// Typo tolerance via normalized edit distance over the name and tags.
pub struct FuzzyStrategy;

impl ScoringStrategy for FuzzyStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Fuzzy
    }

    fn score(&self, entry: &ToolIndexEntry, query: &QueryTokens) -> f32 {
        let q = query.raw();
        let best = std::iter::once(entry.name.as_str())
            .chain(entry.tags.iter().map(String::as_str))
            .map(|candidate| similarity(q, &candidate.to_lowercase()))
            .fold(0.0f32, f32::max);

        if best >= MIN_SIMILARITY {
            best
        } else {
            0.0
        }
    }
}

/// `1 - dist / max(len)`, clipped to [0, 1]. Lengths and distance are in
/// characters, not bytes.
fn similarity(query: &str, candidate: &str) -> f32 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    if query == candidate {
        return 1.0;
    }

    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();
    let max_len = query_len.max(candidate_len);
    let dist = levenshtein(query, candidate);

    (1.0 - dist as f32 / max_len as f32).clamp(0.0, 1.0)
}

/// Two-row Levenshtein.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
