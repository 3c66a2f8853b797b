mod chart_spec;
mod detail_level;
mod presentation_node;
mod quick_answer;
mod relay_request;
mod uploaded_file;

pub use chart_spec::{
    ChartData, ChartKind, ChartOptions, ChartPlugins, ChartSpec, ChartTitle, Colors, Dataset,
};
pub use detail_level::DetailLevel;
pub use presentation_node::{Element, Node};
pub use quick_answer::QuickAnswer;
pub use relay_request::{FileContent, RelayRequest};
pub use uploaded_file::{FileKind, IngestedFile, UploadedFile};
