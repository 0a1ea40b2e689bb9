/// Tokenized, lowercased query, computed once per call and shared by all
/// strategies.
#[derive(Debug, Clone)]
pub struct QueryTokens {
    raw: String,
    tokens: Vec<String>,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

impl QueryTokens {
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let raw = query.trim().to_lowercase();
        let tokens = raw
            .split(is_separator)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { raw, tokens }
    }

    /// Trimmed, lowercased original query.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the query held nothing but separators. Strategies score such
    /// a query as 0 rather than matching everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenize a tool name on `_`/`-` boundaries.
#[must_use]
pub(crate) fn name_tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(['_', '-'])
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
