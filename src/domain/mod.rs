mod chat_message;
mod message_role;
mod prompt;

pub use chat_message::ChatMessage;
pub use message_role::MessageRole;
pub use prompt::{Prompt, PromptError};
