use crate::domain::ChatMessage;

use super::{RelayFailure, Transcript};

pub const EMPTY_INPUT_NOTICE: &str = "Please enter a message";
pub const BUSY_NOTICE: &str = "Please wait for the current reply";
pub const FAILURE_PLACEHOLDER: &str = "Sorry, something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The input field changed.
    Edit(String),
    /// The user pressed send with this input.
    Submit(String),
    ReplyReceived(String),
    ReplyFailed(RelayFailure),
    DismissBanner,
}

/// Client-side chat state. All changes go through [`ChatState::apply`].
///
/// A submit is accepted only while idle; a second submit during an
/// in-flight send is dropped with a notice, so every accepted send adds
/// exactly one user entry followed by exactly one assistant entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    transcript: Transcript,
    input: String,
    phase: Phase,
    pending_prompt: Option<String>,
    banner: Option<String>,
    notice: Option<String>,
    last_outcome: Option<Outcome>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: ChatEvent) -> Self {
        match event {
            ChatEvent::Edit(text) => {
                self.input = text;
                self.notice = None;
            }
            ChatEvent::Submit(input) => self.submit(input),
            ChatEvent::ReplyReceived(text) => {
                if self.phase == Phase::Sending {
                    self.transcript.append(ChatMessage::assistant(text));
                    self.finish(Outcome::Succeeded);
                    self.banner = None;
                }
            }
            ChatEvent::ReplyFailed(failure) => {
                if self.phase == Phase::Sending {
                    self.banner = Some(failure.banner_text());
                    self.transcript
                        .append(ChatMessage::assistant(FAILURE_PLACEHOLDER));
                    self.finish(Outcome::Failed);
                }
            }
            ChatEvent::DismissBanner => self.banner = None,
        }
        self
    }

    fn submit(&mut self, input: String) {
        if self.phase == Phase::Sending {
            self.notice = Some(BUSY_NOTICE.to_string());
            return;
        }
        if input.trim().is_empty() {
            self.notice = Some(EMPTY_INPUT_NOTICE.to_string());
            return;
        }

        self.transcript.append(ChatMessage::user(input.clone()));
        self.input.clear();
        self.notice = None;
        self.banner = None;
        self.phase = Phase::Sending;
        self.pending_prompt = Some(input);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Idle;
        self.pending_prompt = None;
        self.last_outcome = Some(outcome);
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a relay call is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// The prompt the caller must send to the relay, set by an accepted submit.
    pub fn pending_prompt(&self) -> Option<&str> {
        self.pending_prompt.as_deref()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }
}
