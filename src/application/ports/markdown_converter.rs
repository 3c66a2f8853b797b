use crate::domain::Element;

pub trait MarkdownConverter: Send + Sync {
    /// Parses Markdown into a tree whose root is a `div` holding the top-level blocks.
    fn to_tree(&self, markdown: &str) -> Element;

    /// Plain Markdown to HTML conversion, no post-processing.
    fn to_html(&self, markdown: &str) -> String;
}
