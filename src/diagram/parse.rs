//! Exported-symbol extraction from TypeScript source.
//!
//! Parses with tree-sitter and walks only the root's direct children. Nested
//! scopes are never visited, so a class method or a function-local `const`
//! can never become a diagram node.

use tree_sitter::{Language, Node, Parser};

use super::ast::{ExportedSymbol, SymbolKind};

/// Errors produced before any symbol can be collected.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {dialect} grammar: {message}")]
    Language { dialect: &'static str, message: String },

    /// The parser gave up without producing a tree.
    #[error("parser produced no syntax tree for {path}")]
    Parse { path: String },
}

/// Grammar used for a given file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Pick the grammar from the file extension. `.tsx` and `.jsx` need the
    /// JSX-aware grammar; everything else parses as plain TypeScript, which
    /// also covers JavaScript.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let end = path.find(['?', '#']).unwrap_or(path.len());
        let lower = path[..end].to_ascii_lowercase();
        if lower.ends_with(".tsx") || lower.ends_with(".jsx") { Self::Tsx } else { Self::TypeScript }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    fn language(self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Collect the top-level exported declarations of `source_text`, in source
/// order.
///
/// `file_path` only labels diagnostics and picks the dialect; nothing is read
/// from disk. Zero symbols is a valid result.
///
/// # Errors
///
/// Returns [`ExtractError`] if the grammar cannot be loaded or the parser
/// yields no tree. Syntax errors inside the tree are tolerated.
pub fn extract(file_path: &str, source_text: &str) -> Result<Vec<ExportedSymbol>, ExtractError> {
    let dialect = Dialect::from_path(file_path);
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.language())
        .map_err(|e| ExtractError::Language { dialect: dialect.name(), message: e.to_string() })?;

    let tree = parser
        .parse(source_text, None)
        .ok_or_else(|| ExtractError::Parse { path: file_path.to_owned() })?;
    let root = tree.root_node();
    if root.has_error() {
        tracing::warn!(path = file_path, "source has syntax errors; extracting what parsed");
    }

    let mut symbols = Vec::new();
    // Name of the signature pushed by the previous statement, if any.
    let mut overload: Option<&str> = None;
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        if node.kind() == "comment" {
            continue;
        }
        // Export lists, re-exports and anonymous default exports have no
        // `declaration` field.
        let declaration =
            if node.kind() == "export_statement" { node.child_by_field_name("declaration") } else { None };
        let Some(declaration) = declaration else {
            overload = None;
            continue;
        };

        let before = symbols.len();
        collect_declaration(declaration, source_text, node_text(node, source_text), &mut symbols);
        if let (Some(name), Some(previous)) = (overload.take(), before.checked_sub(1)) {
            if symbols[previous].name == name && continues_overload(&symbols[before..], name) {
                symbols.remove(previous);
            }
        }
        overload = signature_name(declaration, source_text);
    }

    tracing::debug!(path = file_path, dialect = dialect.name(), count = symbols.len(), "extracted exported symbols");
    Ok(symbols)
}

/// Classify one exported declaration and push zero or more symbols.
fn collect_declaration(node: Node, source: &str, body: &str, out: &mut Vec<ExportedSymbol>) {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" | "function_signature" => {
            push_named(node, SymbolKind::Function, source, body, out);
        }
        "interface_declaration" => push_named(node, SymbolKind::Interface, source, body, out),
        "type_alias_declaration" => push_named(node, SymbolKind::Type, source, body, out),
        "class_declaration" | "abstract_class_declaration" => {
            push_named(node, SymbolKind::Class, source, body, out);
        }
        "lexical_declaration" | "variable_declaration" => collect_variables(node, source, body, out),
        "ambient_declaration" => {
            let mut cursor = node.walk();
            for inner in node.named_children(&mut cursor) {
                collect_declaration(inner, source, body, out);
            }
        }
        _ => {}
    }
}

/// Name of a bodiless function signature, `declare`d or not.
fn signature_name<'s>(declaration: Node, source: &'s str) -> Option<&'s str> {
    let node =
        if declaration.kind() == "ambient_declaration" { declaration.named_child(0)? } else { declaration };
    if node.kind() != "function_signature" {
        return None;
    }
    node.child_by_field_name("name").map(|name| node_text(name, source))
}

/// True if `pushed` is a single function named `name`: the next overload or
/// the implementation of the signature just before it.
fn continues_overload(pushed: &[ExportedSymbol], name: &str) -> bool {
    matches!(pushed, [next] if next.kind == SymbolKind::Function && next.name == name)
}

/// One symbol per plain-identifier declarator. Destructuring patterns are
/// skipped, not expanded.
fn collect_variables(node: Node, source: &str, body: &str, out: &mut Vec<ExportedSymbol>) {
    let mut cursor = node.walk();
    for declarator in node.named_children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(name) = declarator.child_by_field_name("name") else {
            continue;
        };
        if name.kind() != "identifier" {
            continue;
        }
        out.push(ExportedSymbol {
            name: node_text(name, source).to_owned(),
            kind: SymbolKind::Variable,
            body: body.to_owned(),
        });
    }
}

/// Push `node` as `kind` if it has a non-empty `name` field.
fn push_named(node: Node, kind: SymbolKind, source: &str, body: &str, out: &mut Vec<ExportedSymbol>) {
    let Some(name) = node.child_by_field_name("name") else {
        return;
    };
    let name = node_text(name, source);
    if name.is_empty() {
        return;
    }
    out.push(ExportedSymbol { name: name.to_owned(), kind, body: body.to_owned() });
}

fn node_text<'s>(node: Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
