use serde::Deserialize;

use crate::error::{Result, SearchError};
use crate::weights::StrategyWeights;

pub(crate) const DEFAULT_LIMIT: usize = 10;

/// Tunable engine settings.
///
/// The defaults are the working profile; the exact constants are tunable,
/// not a compatibility contract, so deployments can retune weights from a
/// TOML file without rebuilding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub weights: StrategyWeights,
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: StrategyWeights::default(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.default_limit == 0 {
            return Err(SearchError::InvalidLimit(0));
        }
        Ok(())
    }
}
