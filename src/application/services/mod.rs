mod relay_service;

pub use relay_service::{RelayError, RelayReply, RelayService};
