//! Grid layout: one fixed-size box per symbol, near-square grid.

use serde::{Deserialize, Serialize};

use super::ast::ExportedSymbol;

// Layout constants (renderer coordinate space, canvas pixels).
pub const NODE_WIDTH: f64 = 200.0;
pub const NODE_HEIGHT: f64 = 90.0;
pub const X_GAP: f64 = 80.0;
pub const Y_GAP: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A symbol's box in the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<'a> {
    pub symbol: &'a ExportedSymbol,
    pub top_left: Point,
    pub size: Size,
    pub center: Point,
}

/// `ceil(sqrt(count))`, at least 1.
#[must_use]
pub fn grid_columns(count: usize) -> usize {
    let mut columns = 1;
    while columns * columns < count {
        columns += 1;
    }
    columns
}

/// Place `symbols` on a grid centered horizontally on `origin.x` and growing
/// down from `origin.y`.
///
/// Positions depend only on each symbol's index, the symbol count and the
/// origin, so identical input always yields identical coordinates.
#[must_use]
pub fn layout(symbols: &[ExportedSymbol], origin: Point) -> Vec<LayoutNode<'_>> {
    let columns = grid_columns(symbols.len());
    let size = Size { width: NODE_WIDTH, height: NODE_HEIGHT };

    symbols
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            let column = index % columns;
            let row = index / columns;

            #[allow(clippy::cast_precision_loss)]
            let x = origin.x + column as f64 * (NODE_WIDTH + X_GAP) - (columns as f64 * NODE_WIDTH) / 2.0;
            #[allow(clippy::cast_precision_loss)]
            let y = origin.y + row as f64 * (NODE_HEIGHT + Y_GAP);

            LayoutNode {
                symbol,
                top_left: Point { x, y },
                size,
                center: Point { x: x + NODE_WIDTH / 2.0, y: y + NODE_HEIGHT / 2.0 },
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
