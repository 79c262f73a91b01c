//! Report output.
//!
//! - [`document`] - The structured report
//! - [`render`] - Projection of the indexes into a document
//! - [`format`] - YAML and JSON serialization

pub mod document;
mod format;
mod render;

pub use document::Document;
pub use format::{format_document, print_document, OutputFormat};
pub use render::{render, render_inventory};
