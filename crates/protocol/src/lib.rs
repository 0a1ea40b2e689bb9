use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SEARCH_SCHEMA_VERSION: u32 = 1;

/// Closed set of catalog categories.
///
/// The search index is generated against this enum; an entry with a category
/// outside this set fails deserialization before the engine ever sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Tasks,
    Projects,
    Tags,
    Habits,
    Focus,
    Worklog,
    Meta,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 7] = [
        ToolCategory::Tasks,
        ToolCategory::Projects,
        ToolCategory::Tags,
        ToolCategory::Habits,
        ToolCategory::Focus,
        ToolCategory::Worklog,
        ToolCategory::Meta,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Tasks => "tasks",
            ToolCategory::Projects => "projects",
            ToolCategory::Tags => "tags",
            ToolCategory::Habits => "habits",
            ToolCategory::Focus => "focus",
            ToolCategory::Worklog => "worklog",
            ToolCategory::Meta => "meta",
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected one of: tasks, projects, tags, habits, focus, worklog, meta)")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for ToolCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ToolCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// How much of each matched entry the response carries.
///
/// Discovery responses are injected into an agent's context, so the default
/// stays at name + description and `full` is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    NameOnly,
    #[default]
    NameAndDescription,
    Full,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Free-text query. Must be non-empty after trimming.
    pub query: String,

    /// Response payload shape (default: name_and_description).
    #[serde(default)]
    pub detail_level: DetailLevel,

    /// Only consider entries in this category.
    #[serde(default)]
    pub category: Option<ToolCategory>,

    /// Only consider helper (meta/utility) tools, or only API-calling tools.
    #[serde(default)]
    pub is_helper: Option<bool>,

    /// Maximum results to return (default: 10). Must be positive.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchParams {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            detail_level: DetailLevel::default(),
            category: None,
            is_helper: None,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SearchResult {
    /// Stable tool identifier.
    pub name: String,
    /// Combined relevance score in [0, 1]; a sort key, not a probability.
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ToolCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SearchResponse {
    /// Echo of the trimmed query.
    pub query: String,
    /// Matches that cleared the zero-score floor, counted before truncation.
    pub total: usize,
    pub results: Vec<SearchResult>,
}

/// Structured error surface for validation failures.
///
/// Callers must be able to tell a bad request from a zero-match success, so
/// validation errors never come back as an empty `SearchResponse`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
