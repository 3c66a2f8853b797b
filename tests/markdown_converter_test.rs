use excelhub::application::ports::MarkdownConverter;
use excelhub::application::services::AnswerRenderer;
use excelhub::domain::{ChartKind, Element, Node};
use excelhub::infrastructure::markdown::{PulldownMarkdownConverter, inner_html};
use std::sync::Arc;

fn tree(markdown: &str) -> Element {
    PulldownMarkdownConverter::new().to_tree(markdown)
}

fn renderer() -> AnswerRenderer<dyn MarkdownConverter> {
    let converter: Arc<dyn MarkdownConverter> = Arc::new(PulldownMarkdownConverter::new());
    AnswerRenderer::new(converter)
}

#[test]
fn given_fenced_code_when_parsing_then_builds_pre_with_language_class() {
    let root = tree("```excel\n=A1*2\n```");

    let pre = root.children[0].as_element().unwrap();
    assert!(pre.is("pre"));
    let code = pre.children[0].as_element().unwrap();
    assert_eq!(code.class(), Some("language-excel"));
    assert_eq!(code.text_content(), "=A1*2\n");
}

#[test]
fn given_pipe_table_when_parsing_then_builds_thead_and_tbody() {
    let root = tree("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");

    let table = root.children[0].as_element().unwrap();
    assert!(table.is("table"));
    let sections: Vec<_> = table.child_elements().map(|e| e.tag.as_str()).collect();
    assert_eq!(sections, vec!["thead", "tbody"]);

    let head_row = table.find_descendant("tr").unwrap();
    assert!(head_row.child_elements().all(|c| c.is("th")));
    let tbody = table.child_elements().nth(1).unwrap();
    assert_eq!(tbody.child_elements().count(), 2);
    assert!(tbody.find_descendant("td").is_some());
}

#[test]
fn given_image_when_parsing_then_alt_becomes_attribute() {
    let root = tree("![Sales sheet](sheet.png)");

    let img = root.find_descendant("img").unwrap();
    assert_eq!(img.attribute("src"), Some("sheet.png"));
    assert_eq!(img.attribute("alt"), Some("Sales sheet"));
    assert!(img.children.is_empty());
}

#[test]
fn given_inline_markup_when_parsing_then_keeps_nesting() {
    let root = tree("Use **`SUMIF`** for *conditional* totals");

    let paragraph = root.children[0].as_element().unwrap();
    let strong = paragraph.find_descendant("strong").unwrap();
    assert!(strong.find_descendant("code").is_some());
    assert!(paragraph.find_descendant("em").is_some());
    assert_eq!(paragraph.text_content(), "Use SUMIF for conditional totals");
}

#[test]
fn given_markdown_when_converting_to_html_then_uses_plain_conversion() {
    let html = PulldownMarkdownConverter::new().to_html("Press **Ctrl+T**");

    assert_eq!(html.trim(), "<p>Press <strong>Ctrl+T</strong></p>");
}

#[test]
fn given_answer_with_chart_when_rendering_then_lists_charts_in_order() {
    let content = renderer().render("[CHART:pie]\n\ntext\n\n[CHART:line]");

    let kinds: Vec<_> = content.charts.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![ChartKind::Pie, ChartKind::Line]);
}

#[test]
fn given_rendered_answer_when_writing_html_then_emits_chart_canvases_and_escapes_text() {
    let content = renderer().render("A < B & C\n\n[CHART:bar]\n\n![](x.png)");

    let html = inner_html(&content.root);

    assert!(html.contains("<p>A &lt; B &amp; C</p>"));
    assert!(html.contains(
        r#"<div class="chart-container"><canvas data-chart-index="0" data-chart-type="bar"></canvas></div>"#
    ));
    assert!(html.contains(r#"alt="Excel example""#));
    assert!(!html.contains("</img>"));
}

#[test]
fn given_code_block_when_writing_html_then_text_is_escaped_not_reparsed() {
    let content = renderer().render("```\n<b>=IF(A1>0,\"yes\",\"no\")</b>\n```");

    let html = inner_html(&content.root);

    assert!(html.contains("&lt;b&gt;=IF(A1&gt;0,&quot;yes&quot;,&quot;no&quot;)&lt;/b&gt;"));
    assert!(matches!(content.root.children[0], Node::Element(_)));
}

#[test]
fn given_line_break_tag_in_table_cell_when_rendering_then_html_is_kept() {
    let content = renderer().render("| n | note |\n|---|---|\n| 1 | line one<br>line two |");

    let html = inner_html(&content.root);

    assert!(html.contains(
        r#"<td class="border border-gray-300 px-4 py-2">line one<br>line two</td>"#
    ));
    assert!(!html.contains("&lt;br&gt;"));
}

#[test]
fn given_inline_html_when_parsing_then_builds_raw_html_node() {
    let root = tree("first<br/>second");

    let paragraph = root.children[0].as_element().unwrap();
    assert!(paragraph.children.contains(&Node::Html("<br/>".to_string())));
    assert_eq!(paragraph.text_content(), "firstsecond");
}

#[test]
fn given_link_with_query_when_writing_html_then_href_is_escaped() {
    let content = renderer().render("[docs](<https://example.com/a?b=1&c=x y>)");

    let html = inner_html(&content.root);

    assert!(html.contains(r#"<a href="https://example.com/a?b=1&amp;c=x%20y">docs</a>"#));
}
