//! Chat client: transcript state, display parsing and the relay HTTP client.

mod relay_client;
mod render;
mod segments;
mod state;
mod transcript;

pub use relay_client::{
    BUSY_BANNER, DEFAULT_RELAY_URL, RELAY_URL_ENV, RelayClient, RelayFailure,
};
pub use render::render_message;
pub use segments::{Segment, parse_segments};
pub use state::{
    BUSY_NOTICE, ChatEvent, ChatState, EMPTY_INPUT_NOTICE, FAILURE_PLACEHOLDER, Outcome, Phase,
};
pub use transcript::Transcript;
