mod error_response;
mod health;
mod quick_answers;
mod relay;
mod render;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use quick_answers::{QuickAnswerView, quick_answers_handler};
pub use relay::{RelayResponse, relay_handler};
pub use render::{RenderRequest, RenderResponse, render_handler};
