#![no_main]
use ferrodoc_model::escape::{escape_latex, is_reserved};
use ferrodoc_model::expr::{atom, divide, sqrt_of};
use ferrodoc_model::{Document, Element, Inline, Latex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let escaped = escape_latex(&s);
    let reserved = s.chars().filter(|c| is_reserved(*c)).count();
    assert_eq!(escaped.chars().count(), s.chars().count() + reserved);

    let doc = Document::new(vec![Element::paragraph(vec![
        Inline::bold(vec![Inline::text(&*s)]),
        Inline::href(Inline::text(&*s), &*s),
        Inline::math(sqrt_of(divide(atom(&*s), atom(&*s)))),
    ])]);
    assert_eq!(doc.to_latex(), doc.to_latex());

    // Arbitrary JSON must either parse or fail cleanly.
    if let Ok(doc) = Document::from_json_str(&s) {
        let _ = doc.to_latex();
    }
});
