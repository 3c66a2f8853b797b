use std::sync::Arc;

use crate::application::ports::MarkdownConverter;
use crate::domain::{ChartSpec, Element, Node};

use super::content_processor::process_content;

/// A post-processed answer and the charts it references, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedContent {
    pub root: Element,
    pub charts: Vec<&'static ChartSpec>,
}

impl ProcessedContent {
    fn from_root(root: Element) -> Self {
        let mut charts = Vec::new();
        collect_charts(&root, &mut charts);
        Self { root, charts }
    }
}

fn collect_charts(element: &Element, charts: &mut Vec<&'static ChartSpec>) {
    for child in &element.children {
        match child {
            Node::Chart(spec) => charts.push(*spec),
            Node::Element(inner) => collect_charts(inner, charts),
            Node::Text(_) | Node::Html(_) => {}
        }
    }
}

pub struct AnswerRenderer<M>
where
    M: MarkdownConverter + ?Sized,
{
    converter: Arc<M>,
}

impl<M> Clone for AnswerRenderer<M>
where
    M: MarkdownConverter + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            converter: Arc::clone(&self.converter),
        }
    }
}

impl<M> AnswerRenderer<M>
where
    M: MarkdownConverter + ?Sized,
{
    pub fn new(converter: Arc<M>) -> Self {
        Self { converter }
    }

    pub fn render(&self, markdown: &str) -> ProcessedContent {
        let parsed = self.converter.to_tree(markdown);
        let mut container = Element::new("div");
        process_content(&parsed, &mut container);
        ProcessedContent::from_root(container)
    }

    /// Markdown to HTML without the post-processing pass.
    pub fn render_plain(&self, markdown: &str) -> String {
        self.converter.to_html(markdown)
    }
}
