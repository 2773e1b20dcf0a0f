//! A showcase document exercising every element and expression kind.

use crate::builder::document;
use crate::document::Document;
use crate::expr::{atom, number};

pub fn sample_document() -> Document {
    document(Some("article"), |d| {
        d.title("Article").author("Any author").date("Today");
        d.maketitle();

        d.paragraph(|p| {
            p.text("Hello").text("World").bold(|b| {
                b.text("Bold").text("Bold too");
            });
        });

        d.paragraph(|p| {
            p.teletype(|t| {
                t.text("Ttttt");
            });
        });

        d.paragraph(|p| {
            p.italic(|i| {
                i.text("Cursive");
            });
            p.link("Text text", "https://site.com");
            p.math((number(1) + number(32) / atom("x")).sqrt());
        });
    })
}
