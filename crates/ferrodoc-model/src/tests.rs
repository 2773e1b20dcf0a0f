use std::sync::Arc;
use std::thread;

use crate::builder::{ParagraphBuilder, document};
use crate::escape::escape_latex;
use crate::expr::{add, atom, divide, mul, number};
use crate::sample::sample_document;
use crate::{Element, Inline, Latex};

#[test]
fn test_text_escaped_exactly_once() {
    let mut p = ParagraphBuilder::new();
    p.bold(|b| {
        b.inline(Inline::text("#1"));
    });
    let rendered = p.into_element().to_latex();
    assert_eq!(rendered, "\\textbf{\\#1}\n\n");
    assert_ne!(rendered, escape_latex(&rendered));
}

#[test]
fn test_math_atoms_escaped() {
    let el = Inline::math(add(atom("x_1"), atom("y^2")));
    assert_eq!(el.to_latex(), r"$x\_1 + y\^2$");
}

#[test]
fn test_concurrent_renders_agree() {
    let doc = Arc::new(sample_document());
    let expected = doc.to_latex();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = Arc::clone(&doc);
            thread::spawn(move || doc.to_latex())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_builder_and_manual_tree_agree() {
    let built = document(None, |d| {
        d.paragraph(|p| {
            p.text("a").math(divide(number(1), mul(number(2), atom("n"))));
        });
    });

    let manual = crate::Document::new(vec![Element::paragraph(vec![
        Inline::Separator,
        Inline::text("a"),
        Inline::math(divide(number(1), mul(number(2), atom("n")))),
    ])]);

    assert_eq!(built, manual);
    assert_eq!(built.to_latex(), manual.to_latex());
}

#[test]
fn test_sample_body_order() {
    let tex = sample_document().to_latex();
    let title = tex.find("\\maketitle").unwrap();
    let bold = tex.find("\\textbf{").unwrap();
    let tt = tex.find("\\texttt{").unwrap();
    let href = tex.find("\\href{").unwrap();
    assert!(title < bold && bold < tt && tt < href);
}
