/// A prompt that passed input validation: present and not blank.
///
/// The original text is kept as-is, surrounding whitespace included, since it
/// is forwarded to the provider unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("Prompt is required")]
    Missing,
    #[error("Prompt is required")]
    Blank,
}

impl Prompt {
    pub fn parse(raw: Option<String>) -> Result<Self, PromptError> {
        let raw = raw.ok_or(PromptError::Missing)?;
        if raw.trim().is_empty() {
            return Err(PromptError::Blank);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Prompt {
    type Error = PromptError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(Some(value.to_string()))
    }
}
