use serde::{Deserialize, Serialize};
use toolscout_protocol::ToolCategory;

fn default_priority() -> u8 {
    100
}

/// One registered tool, as recorded in the generated index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolIndexEntry {
    /// Unique, stable identifier token (snake_case).
    pub name: String,
    /// Free-text summary shown to the agent.
    pub description: String,
    pub category: ToolCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Meta/utility tool rather than an API-calling one.
    #[serde(default)]
    pub is_helper: bool,
    /// Tie-break ordinal; lower wins. Never a score input.
    #[serde(default = "default_priority")]
    pub priority: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let entry: ToolIndexEntry = serde_json::from_str(
            r#"{"name": "ping", "description": "Check connectivity.", "category": "meta"}"#,
        )
        .unwrap();
        assert!(entry.tags.is_empty());
        assert!(!entry.is_helper);
        assert_eq!(entry.priority, 100);
    }
}
