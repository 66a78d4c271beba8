mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    API_KEY_ENV, GeminiSettings, LoggingSettings, RetrySettings, ServerSettings, Settings,
};
