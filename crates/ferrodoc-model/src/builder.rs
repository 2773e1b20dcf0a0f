//! Fluent construction of documents.
//!
//! Builders are mutable staging areas. Nested content (paragraphs, formatted
//! runs) is configured in a closure that receives a fresh child builder, and
//! the finished children are frozen into the parent once the closure returns.
//!
//! ```
//! use ferrodoc_model::builder::document;
//! use ferrodoc_model::expr::{atom, number};
//! use ferrodoc_model::Latex;
//!
//! let doc = document(Some("article"), |d| {
//!     d.title("Notes").maketitle();
//!     d.paragraph(|p| {
//!         p.text("Hello").bold(|b| {
//!             b.text("world");
//!         });
//!         p.math((number(1) + number(32) / atom("x")).sqrt());
//!     });
//! });
//! assert!(doc.to_latex().contains(r"$\sqrt{1 + \frac{32}{x}}$"));
//! ```

use crate::document::Document;
use crate::element::{Element, FormatKind, Inline};
use crate::expr::Expression;

/// Builds a document in one expression.
pub fn document(class: Option<&str>, init: impl FnOnce(&mut DocumentBuilder)) -> Document {
    let mut builder = DocumentBuilder::new();
    if let Some(class) = class {
        builder.class(class);
    }
    init(&mut builder);
    builder.build()
}

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    class: Option<String>,
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    elements: Vec<Element>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(&mut self, class: impl Into<String>) -> &mut Self {
        self.class = Some(class.into());
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = Some(author.into());
        self
    }

    pub fn date(&mut self, date: impl Into<String>) -> &mut Self {
        self.date = Some(date.into());
        self
    }

    /// Appends the title block marker (`\maketitle`).
    pub fn maketitle(&mut self) -> &mut Self {
        self.elements.push(Element::Title);
        self
    }

    pub fn paragraph(&mut self, init: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        let mut paragraph = ParagraphBuilder::new();
        init(&mut paragraph);
        self.elements.push(paragraph.into_element());
        self
    }

    pub fn element(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn build(self) -> Document {
        let mut doc = Document::new(self.elements);
        if let Some(class) = self.class {
            doc = doc.with_class(class);
        }
        if let Some(title) = self.title {
            doc = doc.with_title(title);
        }
        if let Some(author) = self.author {
            doc = doc.with_author(author);
        }
        if let Some(date) = self.date {
            doc = doc.with_date(date);
        }
        doc
    }
}

/// Collects the children of a paragraph or formatted run.
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    children: Vec<Inline>,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line break followed by `text`, so consecutive runs stay on
    /// separate source lines.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Inline::Separator);
        self.children.push(Inline::text(text));
        self
    }

    pub fn line_break(&mut self) -> &mut Self {
        self.children.push(Inline::Separator);
        self
    }

    fn scoped(&mut self, style: FormatKind, init: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        let mut inner = ParagraphBuilder::new();
        init(&mut inner);
        self.children.push(Inline::format(style, inner.build()));
        self
    }

    pub fn bold(&mut self, init: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        self.scoped(FormatKind::Bold, init)
    }

    pub fn italic(&mut self, init: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        self.scoped(FormatKind::Italic, init)
    }

    pub fn teletype(&mut self, init: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        self.scoped(FormatKind::Teletype, init)
    }

    /// Appends `text` as a hyperlink, preceded by a line break like [`text`](Self::text).
    pub fn link(&mut self, text: impl Into<String>, url: impl Into<String>) -> &mut Self {
        self.text(text).link_last(url)
    }

    /// Wraps the most recently appended child in a hyperlink.
    pub fn link_last(&mut self, url: impl Into<String>) -> &mut Self {
        match self.children.pop() {
            Some(last) => self.children.push(Inline::href(last, url)),
            None => log::warn!("link_last called on an empty paragraph; ignoring"),
        }
        self
    }

    pub fn href(&mut self, content: Inline, url: impl Into<String>) -> &mut Self {
        self.children.push(Inline::href(content, url));
        self
    }

    pub fn math(&mut self, expression: Expression) -> &mut Self {
        self.children.push(Inline::math(expression));
        self
    }

    pub fn inline(&mut self, inline: Inline) -> &mut Self {
        self.children.push(inline);
        self
    }

    pub fn build(self) -> Vec<Inline> {
        self.children
    }

    pub fn into_element(self) -> Element {
        Element::paragraph(self.children)
    }
}
