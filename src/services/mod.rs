pub mod llm;
pub mod translation_client;
