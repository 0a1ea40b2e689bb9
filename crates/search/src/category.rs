use toolscout_catalog::ToolIndexEntry;

use crate::strategy::{ScoringStrategy, StrategyId};
use crate::tokens::QueryTokens;

const CATEGORY_MATCH: f32 = 1.0;
const TAG_MATCH: f32 = 0.6;

/// Rewards queries that name a category or tag verbatim.
///
/// Intentionally near-binary: it lets an agent jump straight to a known
/// category without competing on free-text relevance.
pub struct CategoryStrategy;

impl ScoringStrategy for CategoryStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Category
    }

    fn score(&self, entry: &ToolIndexEntry, query: &QueryTokens) -> f32 {
        let category = entry.category.as_str();
        if query.tokens().iter().any(|t| t == category) {
            return CATEGORY_MATCH;
        }
        let tag_hit = query.tokens().iter().any(|t| {
            entry
                .tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(t.as_str()))
        });
        if tag_hit {
            return TAG_MATCH;
        }
        0.0
    }
}
