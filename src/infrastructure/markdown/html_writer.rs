use std::fmt::Write as _;

use pulldown_cmark_escape::{escape_href, escape_html};

use crate::domain::{Element, Node};

const VOID_ELEMENTS: [&str; 4] = ["br", "hr", "img", "input"];
const URL_ATTRIBUTES: [&str; 2] = ["href", "src"];

/// Serializes the children of `root`. Chart nodes become a canvas inside a
/// `chart-container` div, numbered in document order.
pub fn inner_html(root: &Element) -> String {
    let mut writer = HtmlWriter::default();
    for child in &root.children {
        writer.write_node(child);
    }
    writer.out
}

#[derive(Default)]
struct HtmlWriter {
    out: String,
    chart_count: usize,
}

impl HtmlWriter {
    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => {
                let _ = escape_html(&mut self.out, text);
            }
            Node::Html(html) => self.out.push_str(html),
            Node::Element(element) => self.write_element(element),
            Node::Chart(spec) => {
                let _ = write!(
                    self.out,
                    r#"<div class="chart-container"><canvas data-chart-index="{}" data-chart-type="{}"></canvas></div>"#,
                    self.chart_count,
                    spec.kind.as_str()
                );
                self.chart_count += 1;
            }
        }
    }

    fn write_element(&mut self, element: &Element) {
        self.out.push('<');
        self.out.push_str(&element.tag);
        for (name, value) in &element.attributes {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            // Writing into a String cannot fail.
            let _ = if URL_ATTRIBUTES.contains(&name.as_str()) {
                escape_href(&mut self.out, value)
            } else {
                escape_html(&mut self.out, value)
            };
            self.out.push('"');
        }
        self.out.push('>');

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            return;
        }

        for child in &element.children {
            self.write_node(child);
        }

        self.out.push_str("</");
        self.out.push_str(&element.tag);
        self.out.push('>');
    }
}
