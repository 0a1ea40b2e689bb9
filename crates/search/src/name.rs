use toolscout_catalog::ToolIndexEntry;

use crate::strategy::{ScoringStrategy, StrategyId};
use crate::tokens::{name_tokens, QueryTokens};

const EXACT: f32 = 1.0;
const PREFIX_IN_ORDER: f32 = 0.8;
const ALL_SUBSTRINGS: f32 = 0.5;
const TOKEN_OVERLAP: f32 = 0.25;

/// Scores the query against the tool name token ladder.
///
/// Highest matching tier wins; tiers never sum. The exact tier compares
/// separator-normalized token sequences, so `"get tasks"` is an exact match
/// for `get_tasks`.
pub struct NameStrategy;

impl ScoringStrategy for NameStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Name
    }

    fn score(&self, entry: &ToolIndexEntry, query: &QueryTokens) -> f32 {
        if query.is_empty() {
            return 0.0;
        }

        let name = entry.name.to_lowercase();
        let name_toks = name_tokens(&entry.name);
        let query_toks = query.tokens();

        if query_toks == name_toks.as_slice() {
            return EXACT;
        }
        if prefixes_in_order(query_toks, &name_toks) {
            return PREFIX_IN_ORDER;
        }
        if query_toks.iter().all(|t| name.contains(t.as_str())) {
            return ALL_SUBSTRINGS;
        }
        if query_toks.iter().any(|t| name_toks.contains(t)) {
            return TOKEN_OVERLAP;
        }
        0.0
    }
}

/// Every query token is a prefix of some name token, in order.
fn prefixes_in_order(query: &[String], name: &[String]) -> bool {
    let mut remaining = name.iter();
    query
        .iter()
        .all(|q| remaining.by_ref().any(|t| t.starts_with(q.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscout_protocol::ToolCategory;

    fn entry(name: &str) -> ToolIndexEntry {
        ToolIndexEntry {
            name: name.to_string(),
            description: String::new(),
            category: ToolCategory::Tasks,
            tags: Vec::new(),
            is_helper: false,
            priority: 100,
        }
    }

    fn score(name: &str, query: &str) -> f32 {
        NameStrategy.score(&entry(name), &QueryTokens::parse(query))
    }

    #[test]
    fn exact_match_is_top_tier() {
        assert_eq!(score("ping", "ping"), 1.0);
        assert_eq!(score("get_tasks", "Get_Tasks"), 1.0);
        assert_eq!(score("get_tasks", "get tasks"), 1.0);
    }

    #[test]
    fn ordered_prefixes_score_below_exact() {
        assert_eq!(score("get_tasks", "get ta"), 0.8);
        assert_eq!(score("create_task", "cre task"), 0.8);
        assert_eq!(score("get_overdue_tasks", "overdue"), 0.8);
        // Out of order falls through to the substring tier.
        assert_eq!(score("get_tasks", "tasks get"), 0.5);
    }

    #[test]
    fn substring_containment_is_order_independent() {
        assert_eq!(score("fr_ticktick_ping", "ping fr"), 0.5);
        assert_eq!(score("get_overdue_tasks", "verdue"), 0.5);
    }

    #[test]
    fn single_shared_token_scores_low() {
        assert_eq!(score("get_tasks", "delete tasks"), 0.25);
    }

    #[test]
    fn unrelated_name_scores_zero() {
        assert_eq!(score("delete_project", "ping"), 0.0);
        assert_eq!(score("get_tasks", "_-_"), 0.0);
    }
}
