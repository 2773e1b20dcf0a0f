//! # ferrodoc Model
//!
//! Typed LaTeX document model with a fluent builder and a pure renderer.
//!
//! ## Overview
//!
//! Documents are immutable trees assembled bottom-up:
//!
//! - [`expr::Expression`] - math-mode expressions (atoms, `+ - \cdot`, `\frac`, `\sqrt`)
//! - [`element::Inline`] - paragraph content (text, line breaks, formatting, links, math)
//! - [`element::Element`] - body nodes (`\maketitle`, paragraphs)
//! - [`document::Document`] - metadata plus the ordered body
//!
//! Every node implements [`Latex`]. Rendering walks the tree once, writing into
//! a single buffer, and escapes raw text leaves with [`escape::escape_latex`].
//! It never fails and never touches shared state, so the same document can be
//! rendered from several threads at once.
//!
//! ## Examples
//!
//! ```
//! use ferrodoc_model::{Latex, builder::document};
//!
//! let doc = document(None, |d| {
//!     d.paragraph(|p| {
//!         p.text("50% done");
//!     });
//! });
//!
//! let tex = doc.to_latex();
//! assert!(tex.starts_with("\\documentclass{article}\n"));
//! assert!(tex.contains("50\\% done"));
//! ```
//!
//! Documents are also `serde` types, so they can be authored as JSON:
//!
//! ```
//! use ferrodoc_model::{Document, Latex};
//!
//! let json = r#"{
//!     "title": "From JSON",
//!     "elements": [
//!         { "kind": "title" },
//!         { "kind": "paragraph", "children": [ { "kind": "text", "text": "Hi" } ] }
//!     ]
//! }"#;
//! let doc = Document::from_json_str(json)?;
//! assert!(doc.to_latex().contains("\\title{From JSON}"));
//! # Ok::<(), ferrodoc_model::ModelError>(())
//! ```

pub mod builder;
pub mod document;
pub mod element;
pub mod error;
pub mod escape;
pub mod expr;
pub mod sample;

#[cfg(test)]
mod tests;

pub use document::Document;
pub use element::{Element, FormatKind, Inline};
pub use error::{ModelError, Result};
pub use expr::Expression;

/// A node that can be written out as LaTeX source.
pub trait Latex {
    /// Appends this node's LaTeX fragment to `out`.
    fn write_latex(&self, out: &mut String);

    /// Renders this node into a fresh string.
    fn to_latex(&self) -> String {
        let mut out = String::new();
        self.write_latex(&mut out);
        out
    }
}
