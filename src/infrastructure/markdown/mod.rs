mod html_writer;
mod pulldown_converter;

pub use html_writer::inner_html;
pub use pulldown_converter::PulldownMarkdownConverter;
