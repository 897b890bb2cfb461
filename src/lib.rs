//! Codeboard: TypeScript module to whiteboard diagram.
//!
//! ARCHITECTURE
//! ============
//! A generation request flows strictly left to right:
//!
//! ```text
//! path ──> fetch ──> source text
//!                        │
//!                        ├──> diagram::parse    exported symbols
//!                        ├──> diagram::refs     reference edges
//!                        ├──> diagram::layout   grid positions
//!                        └──> diagram::elements rectangles, labels, arrows
//! ```
//!
//! `services::generate` drives the pipeline and collapses every failure into
//! one `DiagramError`. The caller owns the returned elements and hands them to
//! whatever canvas renders the scene.

pub mod diagram;
pub mod error;
pub mod fetch;
pub mod services;

pub use diagram::elements::DrawableElement;
pub use diagram::layout::Point;
pub use error::{DiagramError, ErrorCode};
pub use services::generate::{GenerateOptions, GeneratedDiagram, generate};
