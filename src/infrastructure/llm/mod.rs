mod gemini_client;
mod retry_policy;

pub use gemini_client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use retry_policy::{DEFAULT_BASE_DELAY, DEFAULT_MAX_RETRIES, RetryPolicy};
