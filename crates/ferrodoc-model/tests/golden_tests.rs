use expect_test::{expect, expect_file};
use ferrodoc_model::sample::sample_document;
use ferrodoc_model::{Document, Latex};

#[test]
fn sample_document_matches_golden() {
    let tex = sample_document().to_latex();
    expect_file!["fixtures/sample.tex"].assert_eq(&tex);
}

#[test]
fn empty_document_is_well_formed() {
    let tex = Document::default().to_latex();
    expect![[r#"
        \documentclass{article}

        \usepackage{hyperref}

        \begin{document}

        \end{document}
    "#]]
    .assert_eq(&tex);
}

#[test]
fn sample_survives_json() {
    let doc = sample_document();
    let json = doc.to_json_pretty().expect("serialize");
    let restored = Document::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, doc);
    assert_eq!(restored.to_latex(), doc.to_latex());
}
