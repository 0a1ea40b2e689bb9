use std::collections::BTreeSet;

use toolscout_catalog::ToolIndexEntry;

use crate::strategy::{ScoringStrategy, StrategyId};
use crate::tokens::QueryTokens;

/// Coverage ratio: distinct query tokens found as substrings of the
/// description, over the distinct token count. An empty description scores 0.
pub struct DescriptionStrategy;

impl ScoringStrategy for DescriptionStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Description
    }

    fn score(&self, entry: &ToolIndexEntry, query: &QueryTokens) -> f32 {
        if query.is_empty() || entry.description.is_empty() {
            return 0.0;
        }

        let description = entry.description.to_lowercase();
        let distinct: BTreeSet<&str> = query.tokens().iter().map(String::as_str).collect();
        let hits = distinct
            .iter()
            .filter(|t| description.contains(*t))
            .count();

        hits as f32 / distinct.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscout_protocol::ToolCategory;

    fn entry(description: &str) -> ToolIndexEntry {
        ToolIndexEntry {
            name: "get_tasks".to_string(),
            description: description.to_string(),
            category: ToolCategory::Tasks,
            tags: Vec::new(),
            is_helper: false,
            priority: 100,
        }
    }

    fn score(description: &str, query: &str) -> f32 {
        DescriptionStrategy.score(&entry(description), &QueryTokens::parse(query))
    }

    #[test]
    fn full_coverage_scores_one() {
        assert_eq!(score("Get all uncompleted tasks.", "tasks"), 1.0);
        assert_eq!(score("Get all uncompleted tasks.", "get tasks"), 1.0);
    }

    #[test]
    fn partial_coverage_is_a_ratio() {
        assert_eq!(score("Get all uncompleted tasks.", "tasks worklog"), 0.5);
        let third = score("Get all uncompleted tasks.", "get me worklog");
        assert!((third - 1.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn repeated_tokens_count_once() {
        assert_eq!(score("Get all uncompleted tasks.", "tasks tasks tasks"), 1.0);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(score("Record time spent on a task.", "TIME"), 1.0);
        assert_eq!(score("Record time spent on a task.", "tim"), 1.0);
    }

    #[test]
    fn empty_description_scores_zero() {
        assert_eq!(score("", "tasks"), 0.0);
    }
}
