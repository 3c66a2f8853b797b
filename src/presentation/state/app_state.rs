use std::sync::Arc;

use crate::application::ports::{MarkdownConverter, UpstreamTransport};
use crate::application::services::{AnswerRenderer, RelayService};
use crate::domain::QuickAnswer;

pub struct AppState<T>
where
    T: UpstreamTransport,
{
    pub relay_service: Arc<RelayService<T>>,
    pub renderer: AnswerRenderer<dyn MarkdownConverter>,
    /// `None` when the feed could not be loaded at start-up.
    pub quick_answers: Option<Arc<Vec<QuickAnswer>>>,
}

impl<T> Clone for AppState<T>
where
    T: UpstreamTransport,
{
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
            renderer: self.renderer.clone(),
            quick_answers: self.quick_answers.clone(),
        }
    }
}
