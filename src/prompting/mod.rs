//! Prompt templating for question generation.
//!
//! Stored templates reference values with `[[name]]` placeholders. This module
//! finds them, checks for specific ones and substitutes values.

pub mod renderer;
pub mod variables;

pub use renderer::{render, render_strict, RenderedPrompt};
pub use variables::{contains_placeholder, extract_variables};
