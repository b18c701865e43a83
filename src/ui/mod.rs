//! Terminal-facing UI: prompt strings, line input, and output rendering.
//!
//! Orchestration code depends on the [`render::RenderSink`] and
//! [`input::LineReader`] contracts so tests can script input and capture
//! output without a terminal.

pub mod input;
pub mod render;
pub mod settings;
