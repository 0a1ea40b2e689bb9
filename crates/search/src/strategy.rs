use toolscout_catalog::ToolIndexEntry;

use crate::tokens::QueryTokens;

/// Identifier for one scoring strategy.
///
/// This set is closed on purpose: the weight table is keyed by it, and
/// `StrategyWeights::weight_for` matches exhaustively, so adding a strategy
/// does not compile until the table learns about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyId {
    Name,
    Description,
    Category,
    Fuzzy,
}

impl StrategyId {
    pub const ALL: [StrategyId; 4] = [
        StrategyId::Name,
        StrategyId::Description,
        StrategyId::Category,
        StrategyId::Fuzzy,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyId::Name => "name",
            StrategyId::Description => "description",
            StrategyId::Category => "category",
            StrategyId::Fuzzy => "fuzzy",
        }
    }
}

/// Scores one catalog entry against a query.
///
/// Implementations are pure: no side effects, no shared mutable state, and a
/// deterministic result in [0, 1] for a fixed (entry, query) pair. 0 means
/// "no evidence of relevance", 1 means maximal confidence.
pub trait ScoringStrategy {
    fn id(&self) -> StrategyId;

    fn score(&self, entry: &ToolIndexEntry, query: &QueryTokens) -> f32;
}
