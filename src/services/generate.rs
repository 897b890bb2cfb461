//! Diagram generation service: path in, board elements out.
//!
//! DESIGN
//! ======
//! The request is a straight pipeline with exactly one suspension point, the
//! fetch. Each stage either hands its output to the next or ends the request
//! with a `DiagramError`. There is no retry and no partial result.

use serde::Serialize;
use tracing::info;

use crate::diagram::elements::DrawableElement;
use crate::diagram::layout::Point;
use crate::diagram::{extract, render_to_elements};
use crate::error::DiagramError;
use crate::fetch::SourceFetch;

/// Caller-tunable generation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerateOptions {
    /// Layout anchor: horizontal center and top edge of the grid.
    pub origin: Point,
}

/// A successful generation result. The caller owns the elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDiagram {
    pub elements: Vec<DrawableElement>,
}

/// Fetch `path`, extract its exports and build the diagram.
///
/// # Errors
///
/// - [`DiagramError::EmptyInput`] if `path` is blank; nothing is fetched.
/// - [`DiagramError::FetchFailure`] if the source cannot be retrieved.
/// - [`DiagramError::MalformedSource`] if no syntax tree can be produced.
/// - [`DiagramError::NoSymbolsFound`] if the module exports nothing usable.
pub async fn generate(
    fetcher: &dyn SourceFetch,
    path: &str,
    options: GenerateOptions,
) -> Result<GeneratedDiagram, DiagramError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(DiagramError::EmptyInput);
    }

    let source = fetcher.fetch(path).await?;
    info!(path, bytes = source.len(), "generate: source fetched");

    let symbols = extract(path, &source)
        .map_err(|e| DiagramError::MalformedSource { path: path.to_owned(), message: e.to_string() })?;
    if symbols.is_empty() {
        return Err(DiagramError::NoSymbolsFound { path: path.to_owned() });
    }

    let elements = render_to_elements(&symbols, options.origin);
    info!(path, symbols = symbols.len(), elements = elements.len(), "generate: diagram built");
    Ok(GeneratedDiagram { elements })
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
