use serde::Deserialize;
use toolscout_catalog::ToolIndexEntry;

use crate::category::CategoryStrategy;
use crate::description::DescriptionStrategy;
use crate::error::{Result, SearchError};
use crate::fuzzy::FuzzyStrategy;
use crate::name::NameStrategy;
use crate::strategy::{ScoringStrategy, StrategyId};
use crate::tokens::QueryTokens;

const WEIGHT_SUM_TOLERANCE: f32 = 1e-4;

/// Fixed weight table, one weight per strategy, summing to 1.0.
///
/// Name carries the most signal and fuzzy the least (it is a fallback, not a
/// primary signal); category sits above description so a query that names a
/// category outranks free-text mentions of the same word.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyWeights {
    pub name: f32,
    pub description: f32,
    pub category: f32,
    pub fuzzy: f32,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            name: 0.40,
            description: 0.20,
            category: 0.30,
            fuzzy: 0.10,
        }
    }
}

impl StrategyWeights {
    /// Exhaustive by construction: a new `StrategyId` variant will not
    /// compile until it gets a weight here.
    #[must_use]
    pub fn weight_for(&self, id: StrategyId) -> f32 {
        match id {
            StrategyId::Name => self.name,
            StrategyId::Description => self.description,
            StrategyId::Category => self.category,
            StrategyId::Fuzzy => self.fuzzy,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f32 {
        StrategyId::ALL
            .into_iter()
            .map(|id| self.weight_for(id))
            .sum()
    }

    pub fn validate(&self) -> Result<()> {
        for id in StrategyId::ALL {
            if self.weight_for(id) < 0.0 {
                return Err(SearchError::NegativeWeight(id.as_str()));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SearchError::InvalidWeights { sum });
        }
        Ok(())
    }
}

/// Merges the four strategy scores into one relevance score.
pub struct WeightedCombiner {
    weights: StrategyWeights,
    name: NameStrategy,
    description: DescriptionStrategy,
    category: CategoryStrategy,
    fuzzy: FuzzyStrategy,
}

impl WeightedCombiner {
    pub fn new(weights: StrategyWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            weights,
            name: NameStrategy,
            description: DescriptionStrategy,
            category: CategoryStrategy,
            fuzzy: FuzzyStrategy,
        })
    }

    #[must_use]
    pub fn weights(&self) -> &StrategyWeights {
        &self.weights
    }

    /// Weighted sum of all strategy scores, clamped to [0, 1].
    #[must_use]
    pub fn score(&self, entry: &ToolIndexEntry, query: &QueryTokens) -> f32 {
        let strategies: [&dyn ScoringStrategy; 4] =
            [&self.name, &self.description, &self.category, &self.fuzzy];

        let combined: f32 = strategies
            .iter()
            .map(|strategy| strategy.score(entry, query) * self.weights.weight_for(strategy.id()))
            .sum();

        combined.clamp(0.0, 1.0)
    }
}

impl Default for WeightedCombiner {
    fn default() -> Self {
        // The default table is validated by tests; unwrap cannot fire here.
        Self::new(StrategyWeights::default()).expect("default weights are valid")
    }
}
