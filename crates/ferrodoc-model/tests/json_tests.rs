use ferrodoc_model::{Document, Element, FormatKind, Inline, Latex, ModelError};

#[test]
fn parse_nested_json_document() {
    let json = r#"{
        "class": "report",
        "author": "A. Writer",
        "elements": [
            {
                "kind": "paragraph",
                "children": [
                    {
                        "kind": "format",
                        "style": "bold",
                        "children": [ { "kind": "text", "text": "Total: 100%" } ]
                    },
                    { "kind": "separator" },
                    {
                        "kind": "href",
                        "url": "https://example.com",
                        "content": { "kind": "text", "text": "link" }
                    },
                    {
                        "kind": "math",
                        "expression": {
                            "kind": "binary",
                            "op": "div",
                            "left": { "kind": "atom", "text": "a" },
                            "right": {
                                "kind": "unary",
                                "op": "sqrt",
                                "operand": { "kind": "atom", "text": "b" }
                            }
                        }
                    }
                ]
            }
        ]
    }"#;

    let doc = Document::from_json_str(json).expect("valid document");
    assert_eq!(doc.class(), "report");
    assert_eq!(doc.title(), None);

    match &doc.elements()[0] {
        Element::Paragraph { children } => {
            assert!(matches!(
                &children[0],
                Inline::Format { style: FormatKind::Bold, .. }
            ));
            assert_eq!(children.len(), 4);
        }
        other => panic!("Expected paragraph, got {:?}", other),
    }

    let tex = doc.to_latex();
    assert!(tex.contains("\\author{A. Writer}\n"));
    assert!(!tex.contains("\\title{"));
    assert!(tex.contains(
        "\\textbf{Total: 100\\%}\n\\href{https://example.com}{link}$\\frac{a}{\\sqrt{b}}$\n\n"
    ));
}

#[test]
fn missing_fields_default() {
    let doc = Document::from_json_str("{}").expect("empty object is a document");
    assert_eq!(doc, Document::default());
}

#[test]
fn unknown_kind_is_rejected() {
    let json = r#"{ "elements": [ { "kind": "table" } ] }"#;
    let err = Document::from_json_str(json).unwrap_err();
    assert!(matches!(err, ModelError::Json(_)));
    assert!(err.to_string().starts_with("Invalid document JSON"));
}

#[test]
fn missing_file_is_io_error() {
    let err = Document::from_json_file(std::path::Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
}
