use services::llm::LlmClient;

pub mod config;
pub mod modules;
pub mod popup;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
