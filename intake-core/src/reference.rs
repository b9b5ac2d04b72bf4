//! Reference data feeding the State selector and the medical-history
//! checkbox group. Both feeds may arrive late or not at all; an empty list is
//! an acceptable degraded state, so loaders are tolerant and never fail the
//! caller.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of the State selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateOption {
    pub code: String,
    pub label: String,
}

/// Parse `CODE|Label` lines. Blank lines are skipped; malformed lines are
/// logged and skipped.
pub fn parse_states(text: &str) -> Vec<StateOption> {
    let mut options = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once('|') {
            Some((code, label)) if !code.trim().is_empty() && !label.trim().is_empty() => {
                options.push(StateOption {
                    code: code.trim().to_string(),
                    label: label.trim().to_string(),
                });
            }
            _ => {
                tracing::warn!("Skipping malformed state line: {:?}", line);
            }
        }
    }
    options
}

/// Parse the medical-history feed: a JSON array of label strings.
pub fn parse_history(json: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}

/// Load the state list from a file. Missing file or read error degrades to
/// an empty list.
pub fn load_states_file(path: impl AsRef<Path>) -> Vec<StateOption> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let options = parse_states(&text);
            tracing::info!("Loaded {} states from {:?}", options.len(), path);
            options
        }
        Err(e) => {
            tracing::warn!("State list unavailable ({:?}): {}", path, e);
            Vec::new()
        }
    }
}

/// Load the medical-history options from a file, with the same degraded
/// behavior as the state list.
pub fn load_history_file(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => match parse_history(&text) {
            Ok(items) => {
                tracing::info!("Loaded {} history options from {:?}", items.len(), path);
                items
            }
            Err(e) => {
                tracing::warn!("Failed to parse history file {:?}: {}", path, e);
                Vec::new()
            }
        },
        Err(e) => {
            tracing::warn!("History list unavailable ({:?}): {}", path, e);
            Vec::new()
        }
    }
}
