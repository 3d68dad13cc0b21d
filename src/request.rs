//! Autocomplete requests and the line format used to submit them in bulk.
//!
//! A request line is `<priority> <prefix> [k]`, whitespace separated. The
//! priority goes through [`coerce_priority`], so a non-numeric priority is 0.
//! Infinite priorities are rejected so every parsed request stays
//! representable in JSON output.
//! A prefix of `""` stands for the empty prefix. Blank lines and `#` comments
//! carry no request.

use serde::{Deserialize, Serialize};

use typeahead_core::queue::coerce_priority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteRequest {
    pub prefix: String,
    /// Number of completions wanted; `None` uses the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
}

impl AutocompleteRequest {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            k: None,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RequestParseError {
    #[error("priority must be finite: {0}")]
    NonFinitePriority(String),

    #[error("missing prefix")]
    MissingPrefix,

    #[error("invalid result count: {0}")]
    InvalidCount(String),

    #[error("unexpected trailing field: {0}")]
    TrailingField(String),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        source: Box<RequestParseError>,
    },
}

/// Parse one request line. `Ok(None)` for blank and comment lines.
pub fn parse_request_line(
    line: &str,
) -> Result<Option<(AutocompleteRequest, f64)>, RequestParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    // Non-empty after trim, so there is at least one field.
    let raw_priority = fields.next().unwrap_or_default();
    let priority = coerce_priority(raw_priority);
    if priority.is_infinite() {
        return Err(RequestParseError::NonFinitePriority(raw_priority.to_string()));
    }
    let prefix = match fields.next() {
        Some("\"\"") => String::new(),
        Some(p) => p.to_string(),
        None => return Err(RequestParseError::MissingPrefix),
    };
    let k = match fields.next() {
        Some(raw) => Some(
            raw.parse::<usize>()
                .map_err(|_| RequestParseError::InvalidCount(raw.to_string()))?,
        ),
        None => None,
    };
    if let Some(extra) = fields.next() {
        return Err(RequestParseError::TrailingField(extra.to_string()));
    }

    Ok(Some((AutocompleteRequest { prefix, k }, priority)))
}

/// Parse every request line of `text`, in order.
pub fn parse_requests(text: &str) -> Result<Vec<(AutocompleteRequest, f64)>, RequestParseError> {
    let mut requests = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let parsed = parse_request_line(line).map_err(|e| RequestParseError::AtLine {
            line: i + 1,
            source: Box::new(e),
        })?;
        requests.extend(parsed);
    }
    Ok(requests)
}
