//! Static, in-memory tool search.
//!
//! Four independent scoring strategies (name, description, category, fuzzy)
//! are merged by a weighted combiner into one relevance score per catalog
//! entry; the engine filters, sorts, truncates, and projects the result.

mod category;
mod config;
mod description;
mod engine;
mod error;
mod fuzzy;
mod name;
mod strategy;
mod tokens;
mod weights;

pub use category::CategoryStrategy;
pub use config::SearchConfig;
pub use description::DescriptionStrategy;
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use fuzzy::FuzzyStrategy;
pub use name::NameStrategy;
pub use strategy::{ScoringStrategy, StrategyId};
pub use tokens::QueryTokens;
pub use weights::{StrategyWeights, WeightedCombiner};
