use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::RelayService;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub relay_service: Arc<RelayService<L>>,
}

impl<L> AppState<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self {
            relay_service: Arc::new(RelayService::new(llm_client)),
        }
    }
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
        }
    }
}
