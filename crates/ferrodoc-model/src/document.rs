//! Complete documents and their assembly into LaTeX source.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Latex;
use crate::element::{Element, write_all};
use crate::error::Result;

/// Class used when none is set.
pub const DEFAULT_CLASS: &str = "article";

/// Preamble lines emitted for every document, after the metadata.
pub const PREAMBLE: &[&str] = &["\\usepackage{hyperref}"];

/// A finished document: optional metadata plus ordered body elements.
///
/// Metadata values are emitted verbatim, body text is escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default)]
    elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// The effective document class.
    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or(DEFAULT_CLASS)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Parses a document from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON document from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let doc = Self::from_json_str(&content)?;
        log::info!(
            "Loaded document from {:?} ({} elements)",
            path,
            doc.elements.len()
        );
        Ok(doc)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_command_line(out: &mut String, command: &str, arg: &str) {
    out.push('\\');
    out.push_str(command);
    out.push('{');
    out.push_str(arg);
    out.push_str("}\n");
}

impl Latex for Document {
    fn write_latex(&self, out: &mut String) {
        log::debug!(
            "Rendering {} document with {} elements",
            self.class(),
            self.elements.len()
        );

        push_command_line(out, "documentclass", self.class());
        let metadata = [
            ("title", &self.title),
            ("author", &self.author),
            ("date", &self.date),
        ];
        for (command, value) in metadata {
            if let Some(value) = value {
                push_command_line(out, command, value);
            }
        }

        out.push('\n');
        for line in PREAMBLE {
            push_line(out, line);
        }
        out.push('\n');

        push_line(out, "\\begin{document}");
        write_all(&self.elements, out);
        out.push('\n');
        push_line(out, "\\end{document}");
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_latex())
    }
}
