//! Text measurement and line breaking.
//!
//! [CSS Text Module Level 3](https://www.w3.org/TR/css-text-3/)
//!
//! - [`font`] - Font descriptors and the [`FontMetrics`] provider interface
//! - [`reflow`] - White space processing, word splitting and greedy line packing

pub mod font;
pub mod reflow;

pub use font::{FixedWidthMetrics, FontDescriptor, FontMetrics, GlyphPoint};
pub use reflow::{Line, LineEnd, Reflow, TextStyle, Word, reflow_text, transform_text};
