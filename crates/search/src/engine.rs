use toolscout_catalog::{Catalog, ToolIndexEntry};
use toolscout_protocol::{DetailLevel, SearchParams, SearchResponse, SearchResult};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::tokens::QueryTokens;
use crate::weights::WeightedCombiner;

/// Orchestrates one search call: validate, filter, score, sort, truncate,
/// project.
///
/// The catalog is immutable and every call allocates only local state, so a
/// shared engine serves concurrent callers without locking.
pub struct SearchEngine {
    catalog: Catalog,
    combiner: WeightedCombiner,
    default_limit: usize,
}

impl SearchEngine {
    /// Engine over a validated catalog with the default profile.
    pub fn new(catalog: Catalog) -> Result<Self> {
        Self::with_config(catalog, SearchConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: SearchConfig) -> Result<Self> {
        // Weight-table invariants are a startup failure, never a per-query one.
        config.validate()?;
        Ok(Self {
            catalog,
            combiner: WeightedCombiner::new(config.weights)?,
            default_limit: config.default_limit,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let limit = match params.limit {
            Some(0) => return Err(SearchError::InvalidLimit(0)),
            Some(n) => n,
            None => self.default_limit,
        };

        let tokens = QueryTokens::parse(query);

        // Filter before scoring to bound the scoring workload, then drop
        // entries no strategy found evidence for.
        let mut matches: Vec<(&ToolIndexEntry, f32)> = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| params.category.map_or(true, |c| entry.category == c))
            .filter(|entry| params.is_helper.map_or(true, |h| entry.is_helper == h))
            .filter_map(|entry| {
                let score = self.combiner.score(entry, &tokens);
                (score > 0.0).then_some((entry, score))
            })
            .collect();

        matches.sort_by(|a, b| {
            b.1.total_cmp(&a.1)
                .then_with(|| a.0.priority.cmp(&b.0.priority))
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        let total = matches.len();
        log::debug!("tool search: query='{query}' matched={total} limit={limit}");

        matches.truncate(limit);

        let results = matches
            .into_iter()
            .map(|(entry, score)| project(entry, score, params.detail_level))
            .collect();

        Ok(SearchResponse {
            query: query.to_string(),
            total,
            results,
        })
    }
}

/// Shape the payload for the caller. Projection never changes ranking.
fn project(entry: &ToolIndexEntry, score: f32, detail: DetailLevel) -> SearchResult {
    let mut result = SearchResult {
        name: entry.name.clone(),
        score,
        description: None,
        category: None,
        tags: None,
    };
    match detail {
        DetailLevel::NameOnly => {}
        DetailLevel::NameAndDescription => {
            result.description = Some(entry.description.clone());
        }
        DetailLevel::Full => {
            result.description = Some(entry.description.clone());
            result.category = Some(entry.category);
            result.tags = Some(entry.tags.clone());
        }
    }
    result
}
