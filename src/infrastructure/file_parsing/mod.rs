mod composite_file_parser;
mod csv_parser;
mod image_encoder;
mod workbook_parser;

pub use composite_file_parser::CompositeFileParser;
pub use csv_parser::{CsvParser, parse_records};
pub use image_encoder::ImageEncoder;
pub use workbook_parser::{WorkbookParser, cell_value, parse_first_sheet};
