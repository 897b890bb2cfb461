//! TypeScript export diagrams.
//!
//! Extracts a module's top-level exported declarations, infers which ones
//! mention each other, places them on a grid and emits the board elements
//! (rectangles, labels, arrows) that draw the result.

pub mod ast;
pub mod elements;
pub mod layout;
pub mod parse;
pub mod refs;
pub mod scene;

pub use elements::{DrawableElement, assemble};
pub use layout::{Point, layout};
pub use parse::extract;
pub use refs::infer;
pub use scene::Scene;

use ast::ExportedSymbol;

/// Edge inference, layout and assembly for an already extracted symbol list.
#[must_use]
pub fn render_to_elements(symbols: &[ExportedSymbol], origin: Point) -> Vec<DrawableElement> {
    let edges = infer(symbols);
    let nodes = layout(symbols, origin);
    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "assembling diagram");
    assemble(&nodes, &edges)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
