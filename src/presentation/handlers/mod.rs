mod chat;
mod health;

pub use chat::{ChatRequest, ChatResponse, ErrorResponse, chat_handler};
pub use health::health_handler;
