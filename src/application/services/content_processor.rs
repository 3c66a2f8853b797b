use crate::domain::{Element, Node};

use super::chart_resolver::{extract_chart_keyword, resolve_chart};

pub const CODE_BLOCK_CLASS: &str = "bg-gray-900 text-gray-100 p-4 rounded-lg overflow-x-auto mb-4";
pub const TABLE_CLASS: &str = "w-full border-collapse mb-4";
pub const HEADER_CELL_CLASS: &str = "bg-gray-100 border border-gray-300 px-4 py-2 text-left font-semibold";
pub const BODY_CELL_CLASS: &str = "border border-gray-300 px-4 py-2";
pub const IMAGE_CLASS: &str = "rounded-lg shadow-md my-4 max-w-full";
pub const DEFAULT_IMAGE_ALT: &str = "Excel example";

/// Rewrites the children of `source` into `target`, in order.
///
/// Each node is handled by the first matching rule:
/// text and raw HTML are copied, `pre` blocks holding `code` become styled code blocks,
/// tables and images are rebuilt with styling classes, paragraphs carrying a
/// `[CHART:<type>]` placeholder become a chart, and any other element is
/// shallow-copied with its children processed recursively.
pub fn process_content(source: &Element, target: &mut Element) {
    for node in &source.children {
        target.push(rewrite_node(node));
    }
}

fn rewrite_node(node: &Node) -> Node {
    let element = match node {
        Node::Text(_) | Node::Html(_) | Node::Chart(_) => return node.clone(),
        Node::Element(element) => element,
    };

    if element.is("pre") {
        if let Some(code) = element.find_descendant("code") {
            return styled_code_block(&code.text_content()).into();
        }
    }

    if element.is("table") {
        return styled_table(element).into();
    }

    if element.is("img") {
        return styled_image(element).into();
    }

    if element.is("p") {
        if let Some(keyword) = extract_chart_keyword(&element.text_content()) {
            tracing::debug!(chart_type = keyword, "Expanding chart placeholder");
            return Node::Chart(resolve_chart(keyword));
        }
    }

    let mut copy = element.shallow_clone();
    process_content(element, &mut copy);
    copy.into()
}

fn styled_code_block(code: &str) -> Element {
    Element::new("pre")
        .with_class(CODE_BLOCK_CLASS)
        .with_child(Element::new("code").with_text(code))
}

fn styled_table(source: &Element) -> Element {
    let mut table = Element::new("table").with_class(TABLE_CLASS);

    for child in &source.children {
        match child {
            Node::Element(section) if section.is("thead") => {
                table.push(styled_section(section, HEADER_CELL_CLASS));
            }
            Node::Element(section) if section.is("tbody") => {
                table.push(styled_section(section, BODY_CELL_CLASS));
            }
            other => table.push(other.clone()),
        }
    }

    table
}

fn styled_section(section: &Element, cell_class: &str) -> Element {
    let mut styled = section.shallow_clone();

    for row in &section.children {
        let Node::Element(row) = row else {
            styled.push(row.clone());
            continue;
        };

        let mut styled_row = row.shallow_clone();
        for cell in &row.children {
            match cell {
                Node::Element(cell) => {
                    let mut styled_cell = cell.clone();
                    styled_cell.set_attribute("class", cell_class);
                    styled_row.push(styled_cell);
                }
                other => styled_row.push(other.clone()),
            }
        }
        styled.push(styled_row);
    }

    styled
}

fn styled_image(source: &Element) -> Element {
    let alt = source
        .attribute("alt")
        .filter(|alt| !alt.is_empty())
        .unwrap_or(DEFAULT_IMAGE_ALT);

    Element::new("img")
        .with_attribute("src", source.attribute("src").unwrap_or_default())
        .with_attribute("alt", alt)
        .with_class(IMAGE_CLASS)
}
