//! Evidence image references (item photos, delivery proof).
//!
//! The persisted columns hold a path list, a JSON-encoded path list, or a
//! single path string, depending on which client wrote the row. Paths are
//! normalized relative to the public storage root.

use serde::{Deserialize, Serialize};

/// A raw image column in any of its historical shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvidenceImages {
    Many(Vec<String>),
    One(String),
    Other(serde_json::Value),
}

impl Default for EvidenceImages {
    fn default() -> Self {
        EvidenceImages::Many(Vec::new())
    }
}

impl EvidenceImages {
    /// Normalized storage-relative paths, blanks dropped.
    ///
    /// A single string that looks like a JSON array is decoded first;
    /// otherwise it is one path.
    pub fn paths(&self) -> Vec<String> {
        match self {
            EvidenceImages::Many(list) => {
                list.iter().filter_map(|p| normalize_path(p)).collect()
            }
            EvidenceImages::One(raw) => {
                let trimmed = raw.trim();
                if trimmed.starts_with('[') {
                    match serde_json::from_str::<Vec<String>>(trimmed) {
                        Ok(list) => {
                            return list.iter().filter_map(|p| normalize_path(p)).collect();
                        }
                        Err(err) => {
                            tracing::warn!(%err, "image column holds unparseable JSON, treating as a single path");
                        }
                    }
                }
                normalize_path(trimmed).into_iter().collect()
            }
            EvidenceImages::Other(value) => match value {
                // tolerate arrays with stray non-string entries
                serde_json::Value::Array(entries) => entries
                    .iter()
                    .filter_map(|v| v.as_str())
                    .filter_map(normalize_path)
                    .collect(),
                _ => Vec::new(),
            },
        }
    }

    /// First normalized path, if any.
    pub fn primary(&self) -> Option<String> {
        self.paths().into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.paths().is_empty()
    }
}

/// Strip the legacy `storage/` URL prefix and leading slashes; absolute
/// http(s) URLs pass through untouched.
fn normalize_path(path: &str) -> Option<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    let stripped = trimmed.trim_start_matches('/');
    let stripped = stripped.strip_prefix("storage/").unwrap_or(stripped);
    let stripped = stripped.trim_start_matches('/');
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}
