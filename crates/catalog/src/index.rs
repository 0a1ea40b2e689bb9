use std::collections::HashSet;

use crate::entry::ToolIndexEntry;
use crate::error::{CatalogError, Result};

/// Serialized tool index, generated by the registry build step.
/// Do not edit by hand; regenerate from the live tool definitions.
const EMBEDDED_INDEX: &str = include_str!("../index/tool_index.json");

/// Immutable, validated tool catalog.
///
/// Construction enforces the integrity invariants (non-blank unique names,
/// never empty), so the search engine can assume a well-formed corpus and
/// skip per-query checks.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ToolIndexEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<ToolIndexEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let name = entry.name.as_str();
            if name.trim().is_empty() || name.contains(char::is_whitespace) {
                return Err(CatalogError::InvalidName { index });
            }
            if !seen.insert(name) {
                return Err(CatalogError::DuplicateName(name.to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Parse a serialized index (a JSON array of entries) and validate it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<ToolIndexEntry> = serde_json::from_str(raw)?;
        Self::from_entries(entries)
    }

    /// Load the index generated at build time.
    pub fn load_embedded() -> Result<Self> {
        let catalog = Self::from_json(EMBEDDED_INDEX)?;
        log::info!(
            "tool catalog loaded: {} entries ({} helpers)",
            catalog.len(),
            catalog
                .entries
                .iter()
                .filter(|entry| entry.is_helper)
                .count()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn entries(&self) -> &[ToolIndexEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolIndexEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
