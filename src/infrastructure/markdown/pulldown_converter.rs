use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::application::ports::MarkdownConverter;
use crate::domain::{Element, Node};

/// CommonMark plus tables, strikethrough and task lists.
pub struct PulldownMarkdownConverter {
    options: Options,
}

impl PulldownMarkdownConverter {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl Default for PulldownMarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter for PulldownMarkdownConverter {
    fn to_tree(&self, markdown: &str) -> Element {
        let mut builder = TreeBuilder::new();
        for event in Parser::new_ext(markdown, self.options) {
            builder.handle(event);
        }
        builder.finish()
    }

    fn to_html(&self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, Parser::new_ext(markdown, self.options));
        out
    }
}

struct TreeBuilder {
    stack: Vec<Element>,
    table_body_open: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Element::new("div")],
            table_body_open: false,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.append(Node::text(text.to_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.append(Node::Html(html.to_string()))
            }
            Event::Code(code) => self.append(Element::new("code").with_text(code.to_string()).into()),
            Event::SoftBreak => self.append(Node::text("\n")),
            Event::HardBreak => self.append(Element::new("br").into()),
            Event::Rule => self.append(Element::new("hr").into()),
            Event::TaskListMarker(checked) => {
                let mut checkbox = Element::new("input")
                    .with_attribute("type", "checkbox")
                    .with_attribute("disabled", "");
                if checked {
                    checkbox.set_attribute("checked", "");
                }
                self.append(checkbox.into());
            }
            Event::FootnoteReference(name) => {
                self.append(Element::new("sup").with_text(name.to_string()).into())
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open(Element::new("p")),
            Tag::Heading { level, .. } => self.open(Element::new(heading_tag(level))),
            Tag::BlockQuote(_) => self.open(Element::new("blockquote")),
            Tag::CodeBlock(kind) => {
                self.open(Element::new("pre"));
                let mut code = Element::new("code");
                if let CodeBlockKind::Fenced(lang) = kind {
                    if let Some(lang) = lang.split_whitespace().next() {
                        code.set_attribute("class", format!("language-{lang}"));
                    }
                }
                self.open(code);
            }
            Tag::List(Some(start)) => {
                let mut list = Element::new("ol");
                if start != 1 {
                    list.set_attribute("start", start.to_string());
                }
                self.open(list);
            }
            Tag::List(None) => self.open(Element::new("ul")),
            Tag::Item => self.open(Element::new("li")),
            Tag::Table(_) => {
                self.table_body_open = false;
                self.open(Element::new("table"));
            }
            Tag::TableHead => {
                self.open(Element::new("thead"));
                self.open(Element::new("tr"));
            }
            Tag::TableRow => {
                if !self.table_body_open {
                    self.table_body_open = true;
                    self.open(Element::new("tbody"));
                }
                self.open(Element::new("tr"));
            }
            Tag::TableCell => {
                let cell = if self.in_table_head() { "th" } else { "td" };
                self.open(Element::new(cell));
            }
            Tag::Emphasis => self.open(Element::new("em")),
            Tag::Strong => self.open(Element::new("strong")),
            Tag::Strikethrough => self.open(Element::new("del")),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut link = Element::new("a").with_attribute("href", dest_url.to_string());
                if !title.is_empty() {
                    link.set_attribute("title", title.to_string());
                }
                self.open(link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                let mut image = Element::new("img").with_attribute("src", dest_url.to_string());
                if !title.is_empty() {
                    image.set_attribute("title", title.to_string());
                }
                self.open(image);
            }
            _ => self.open(Element::new("div")),
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock | TagEnd::TableHead => {
                self.close();
                self.close();
            }
            TagEnd::Table => {
                if self.table_body_open {
                    self.table_body_open = false;
                    self.close();
                }
                self.close();
            }
            TagEnd::Image => {
                if let Some(image) = self.stack.last_mut() {
                    let alt = image.text_content();
                    image.children.clear();
                    image.set_attribute("alt", alt);
                }
                self.close();
            }
            _ => self.close(),
        }
    }

    fn in_table_head(&self) -> bool {
        self.stack.iter().rev().nth(1).is_some_and(|e| e.is("thead"))
    }

    fn open(&mut self, element: Element) {
        self.stack.push(element);
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(element) = self.stack.pop() {
            self.append(element.into());
        }
    }

    fn append(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.push(node);
        }
    }

    fn finish(mut self) -> Element {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack.pop().unwrap_or_else(|| Element::new("div"))
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}
