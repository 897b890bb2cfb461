//! Symbol and edge types for source diagrams.

use std::fmt;

use serde::Serialize;

/// Declaration kinds that qualify for the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Type,
    Interface,
    Class,
    Variable,
}

impl SymbolKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Type => "type",
            Self::Interface => "interface",
            Self::Class => "class",
            Self::Variable => "variable",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level declaration carrying an explicit `export` modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedSymbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Verbatim text of the whole export statement, modifiers included.
    pub body: String,
}

impl ExportedSymbol {
    /// Label shown inside the symbol's box, e.g. `submitOrder (function)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Directed "uses" relation between two symbols.
///
/// `from` and `to` index the symbol list the edge was inferred from, and
/// therefore also the layout nodes built from that list. `from != to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceEdge {
    pub from: usize,
    pub to: usize,
}
