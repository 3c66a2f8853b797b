use excelhub::application::ports::MarkdownConverter;
use excelhub::application::services::{
    BODY_CELL_CLASS, CODE_BLOCK_CLASS, DEFAULT_IMAGE_ALT, HEADER_CELL_CLASS, IMAGE_CLASS,
    TABLE_CLASS, process_content,
};
use excelhub::domain::{ChartKind, Element, Node};
use excelhub::infrastructure::markdown::PulldownMarkdownConverter;

fn process(source: &Element) -> Element {
    let mut target = Element::new("div");
    process_content(source, &mut target);
    target
}

fn element(node: &Node) -> &Element {
    node.as_element().expect("expected an element node")
}

fn table(headers: &[&str], rows: &[&[&str]]) -> Element {
    let mut header_row = Element::new("tr");
    for header in headers {
        header_row.push(Element::new("th").with_text(*header));
    }

    let mut body = Element::new("tbody");
    for row in rows {
        let mut tr = Element::new("tr");
        for cell in *row {
            tr.push(Element::new("td").with_text(*cell));
        }
        body.push(tr);
    }

    Element::new("table")
        .with_child(Element::new("thead").with_child(header_row))
        .with_child(body)
}

#[test]
fn given_text_node_when_processing_then_copies_verbatim() {
    let source = Element::new("div").with_text("plain & simple");

    let output = process(&source);

    assert_eq!(output.children, vec![Node::text("plain & simple")]);
}

#[test]
fn given_code_block_when_processing_then_preserves_exact_text() {
    let code = "=VLOOKUP(\"Apple\", A2:C10, 3, FALSE)\n  =SUM(A1:A3)\n";
    let source = Element::new("div").with_child(
        Element::new("pre").with_child(
            Element::new("code")
                .with_class("language-excel")
                .with_text(code),
        ),
    );

    let output = process(&source);
    let pre = element(&output.children[0]);

    assert!(pre.is("pre"));
    assert_eq!(pre.class(), Some(CODE_BLOCK_CLASS));
    let code_element = element(&pre.children[0]);
    assert!(code_element.is("code"));
    assert!(code_element.attributes.is_empty());
    assert_eq!(code_element.text_content(), code);
}

#[test]
fn given_processed_code_block_when_processing_again_then_output_is_unchanged() {
    let source = Element::new("div").with_child(
        Element::new("pre").with_child(Element::new("code").with_text("=A1+B1")),
    );

    let once = process(&source);
    let twice = process(&once);

    assert_eq!(once, twice);
}

#[test]
fn given_table_when_processing_then_styles_every_cell_and_keeps_text() {
    let source = Element::new("div").with_child(table(
        &["Name", "Qty", "Price"],
        &[&["Apple", "3", "1.20"], &["Pear", "5", "0.80"]],
    ));

    let output = process(&source);
    let rebuilt = element(&output.children[0]);

    assert!(rebuilt.is("table"));
    assert_eq!(rebuilt.class(), Some(TABLE_CLASS));

    let thead = rebuilt.child_elements().find(|e| e.is("thead")).unwrap();
    let header_cells: Vec<_> = thead
        .child_elements()
        .flat_map(|row| row.child_elements())
        .collect();
    assert_eq!(header_cells.len(), 3);
    assert!(header_cells.iter().all(|c| c.class() == Some(HEADER_CELL_CLASS)));
    let header_text: Vec<_> = header_cells.iter().map(|c| c.text_content()).collect();
    assert_eq!(header_text, vec!["Name", "Qty", "Price"]);

    let tbody = rebuilt.child_elements().find(|e| e.is("tbody")).unwrap();
    let body_rows: Vec<_> = tbody.child_elements().collect();
    assert_eq!(body_rows.len(), 2);
    for row in &body_rows {
        assert_eq!(row.child_elements().count(), 3);
        assert!(row.child_elements().all(|c| c.class() == Some(BODY_CELL_CLASS)));
    }
    assert_eq!(body_rows[1].text_content(), "Pear50.80");
}

#[test]
fn given_image_without_alt_when_processing_then_uses_placeholder_alt() {
    let source = Element::new("div").with_child(
        Element::new("img")
            .with_attribute("src", "https://example.com/sheet.png")
            .with_attribute("width", "40"),
    );

    let output = process(&source);
    let img = element(&output.children[0]);

    assert_eq!(img.attribute("src"), Some("https://example.com/sheet.png"));
    assert_eq!(img.attribute("alt"), Some(DEFAULT_IMAGE_ALT));
    assert_eq!(img.class(), Some(IMAGE_CLASS));
    assert_eq!(img.attribute("width"), None);
}

#[test]
fn given_image_with_alt_when_processing_then_keeps_alt() {
    let source = Element::new("div").with_child(
        Element::new("img")
            .with_attribute("src", "pivot.png")
            .with_attribute("alt", "Pivot table"),
    );

    let output = process(&source);

    assert_eq!(element(&output.children[0]).attribute("alt"), Some("Pivot table"));
}

#[test]
fn given_chart_paragraph_when_processing_then_replaces_paragraph_with_chart() {
    let source = Element::new("div")
        .with_child(Element::new("p").with_text("Before"))
        .with_child(Element::new("p").with_text("See trend [CHART:line] below"))
        .with_child(Element::new("p").with_text("After"));

    let output = process(&source);

    assert_eq!(output.children.len(), 3);
    assert_eq!(output.children[0].text_content(), "Before");
    match &output.children[1] {
        Node::Chart(spec) => assert_eq!(spec.kind, ChartKind::Line),
        other => panic!("expected chart, got {other:?}"),
    }
    assert_eq!(output.children[2].text_content(), "After");
    assert!(!output.text_content().contains("[CHART:"));
}

#[test]
fn given_unrecognised_chart_keyword_when_processing_then_uses_default_chart() {
    let source = Element::new("div").with_child(Element::new("p").with_text("[CHART:unknown]"));

    let output = process(&source);

    match &output.children[0] {
        Node::Chart(spec) => assert_eq!(spec.options.title(), "Quarterly Performance"),
        other => panic!("expected chart, got {other:?}"),
    }
}

#[test]
fn given_other_element_when_processing_then_copies_shallowly_and_recurses() {
    let source = Element::new("div").with_child(
        Element::new("blockquote")
            .with_class("note")
            .with_attribute("id", "tip")
            .with_child(
                Element::new("pre").with_child(Element::new("code").with_text("=NOW()")),
            ),
    );

    let output = process(&source);
    let quote = element(&output.children[0]);

    assert!(quote.is("blockquote"));
    assert!(quote.attributes.is_empty());
    let pre = element(&quote.children[0]);
    assert_eq!(pre.class(), Some(CODE_BLOCK_CLASS));
}

#[test]
fn given_image_inside_paragraph_when_processing_then_styles_nested_image() {
    let source = Element::new("div").with_child(
        Element::new("p")
            .with_text("Look: ")
            .with_child(Element::new("img").with_attribute("src", "a.png")),
    );

    let output = process(&source);
    let paragraph = element(&output.children[0]);
    let img = element(&paragraph.children[1]);

    assert_eq!(img.class(), Some(IMAGE_CLASS));
    assert_eq!(paragraph.children[0], Node::text("Look: "));
}

#[test]
fn given_markdown_answer_when_processing_then_top_level_order_is_preserved() {
    let markdown = "# Title\n\nIntro text.\n\n```excel\n=SUM(A1:A3)\n```\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\n[CHART:bar]\n\nDone.";
    let parsed = PulldownMarkdownConverter::new().to_tree(markdown);

    let output = process(&parsed);
    let tags: Vec<String> = output
        .children
        .iter()
        .map(|node| match node {
            Node::Element(e) => e.tag.clone(),
            Node::Chart(_) => "chart".to_string(),
            Node::Text(_) => "text".to_string(),
            Node::Html(_) => "html".to_string(),
        })
        .collect();

    assert_eq!(tags, vec!["h1", "p", "pre", "table", "chart", "p"]);
    assert_eq!(element(&output.children[2]).text_content(), "=SUM(A1:A3)\n");
}

#[test]
fn given_raw_html_node_when_processing_then_copies_it_verbatim() {
    let source = Element::new("div").with_child(
        Element::new("p")
            .with_text("a")
            .with_child(Node::Html("<br>".to_string()))
            .with_text("b"),
    );

    let output = process(&source);

    let paragraph = element(&output.children[0]);
    assert_eq!(paragraph.children[1], Node::Html("<br>".to_string()));
    assert_eq!(paragraph.text_content(), "ab");
}
