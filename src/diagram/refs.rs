//! Reference inference by whole-word name matching.
//!
//! This is a textual heuristic, not symbol resolution. A name mentioned in a
//! comment or string literal still produces an edge, and an aliased import
//! does not. Word boundaries keep `Order` from matching inside `OrderBuilder`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use regex::Regex;

use super::ast::{ExportedSymbol, ReferenceEdge};

/// Infer a directed edge `source -> target` for every ordered pair of distinct
/// symbols where `target.name` appears as a whole word in `source.body`.
///
/// Edges come out source-major, target-minor, both in extraction order.
/// Patterns are cached per target name for the duration of this call only.
#[must_use]
pub fn infer(symbols: &[ExportedSymbol]) -> Vec<ReferenceEdge> {
    let mut patterns: HashMap<&str, Regex> = HashMap::new();
    let mut edges = Vec::new();

    for (from, source) in symbols.iter().enumerate() {
        for (to, target) in symbols.iter().enumerate() {
            if from == to {
                continue;
            }

            let pattern = match patterns.entry(target.name.as_str()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => match word_pattern(&target.name) {
                    Ok(regex) => entry.insert(regex),
                    Err(e) => {
                        tracing::warn!(name = %target.name, error = %e, "unusable symbol name; no edges to it");
                        continue;
                    }
                },
            };

            if pattern.is_match(&source.body) {
                edges.push(ReferenceEdge { from, to });
            }
        }
    }

    tracing::debug!(symbols = symbols.len(), edges = edges.len(), "inferred reference edges");
    edges
}

/// `\b<name>\b` with `name` escaped. Names that start or end with a non-word
/// character such as `$` never match.
fn word_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(name)))
}

#[cfg(test)]
#[path = "refs_test.rs"]
mod tests;
