//! Document elements.
//!
//! Two families: [`Element`] for nodes that sit directly in the document body,
//! and [`Inline`] for nodes that live inside a paragraph. Every node owns its
//! children, so the structure is always a tree.

use serde::{Deserialize, Serialize};

use crate::Latex;
use crate::escape::push_escaped;
use crate::expr::Expression;

/// Text formatting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Bold,
    Italic,
    Teletype,
}

impl FormatKind {
    /// The LaTeX command name, without the leading backslash.
    pub fn command(self) -> &'static str {
        match self {
            FormatKind::Bold => "textbf",
            FormatKind::Italic => "textit",
            FormatKind::Teletype => "texttt",
        }
    }
}

/// A node inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    /// Raw text, escaped on render.
    Text { text: String },
    /// A line break (`\n`).
    Separator,
    /// `\textbf{..}`, `\textit{..}` or `\texttt{..}` around the children.
    Format {
        style: FormatKind,
        children: Vec<Inline>,
    },
    /// `\href{url}{content}`.
    Href { url: String, content: Box<Inline> },
    /// `$..$` around an expression.
    Math { expression: Expression },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    pub fn format(style: FormatKind, children: Vec<Inline>) -> Self {
        Inline::Format { style, children }
    }

    pub fn bold(children: Vec<Inline>) -> Self {
        Self::format(FormatKind::Bold, children)
    }

    pub fn italic(children: Vec<Inline>) -> Self {
        Self::format(FormatKind::Italic, children)
    }

    pub fn teletype(children: Vec<Inline>) -> Self {
        Self::format(FormatKind::Teletype, children)
    }

    pub fn href(content: Inline, url: impl Into<String>) -> Self {
        Inline::Href {
            url: url.into(),
            content: Box::new(content),
        }
    }

    pub fn math(expression: Expression) -> Self {
        Inline::Math { expression }
    }
}

impl Latex for Inline {
    fn write_latex(&self, out: &mut String) {
        match self {
            Inline::Text { text } => push_escaped(out, text),
            Inline::Separator => out.push('\n'),
            Inline::Format { style, children } => {
                out.push('\\');
                out.push_str(style.command());
                out.push('{');
                write_all(children, out);
                out.push('}');
            }
            Inline::Href { url, content } => {
                out.push_str("\\href{");
                push_escaped(out, url);
                out.push_str("}{");
                content.write_latex(out);
                out.push('}');
            }
            Inline::Math { expression } => {
                out.push('$');
                expression.write_latex(out);
                out.push('$');
            }
        }
    }
}

/// A top-level node of the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// Places the title block (`\maketitle`).
    Title,
    /// Children followed by a blank line.
    Paragraph { children: Vec<Inline> },
}

impl Element {
    pub fn paragraph(children: Vec<Inline>) -> Self {
        Element::Paragraph { children }
    }
}

impl Latex for Element {
    fn write_latex(&self, out: &mut String) {
        match self {
            Element::Title => out.push_str("\\maketitle\n"),
            Element::Paragraph { children } => {
                write_all(children, out);
                out.push_str("\n\n");
            }
        }
    }
}

pub(crate) fn write_all<T: Latex>(nodes: &[T], out: &mut String) {
    for node in nodes {
        node.write_latex(out);
    }
}
