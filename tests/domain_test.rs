use gemini_relay::client::render_message;
use gemini_relay::domain::{ChatMessage, MessageRole, Prompt, PromptError};

#[test]
fn given_missing_or_blank_prompt_when_parsing_then_rejected() {
    assert_eq!(Prompt::parse(None), Err(PromptError::Missing));
    assert_eq!(Prompt::parse(Some(String::new())), Err(PromptError::Blank));
    assert_eq!(Prompt::parse(Some(" \t\n".to_string())), Err(PromptError::Blank));
}

#[test]
fn given_prompt_with_surrounding_whitespace_when_parsing_then_kept_verbatim() {
    let prompt = Prompt::parse(Some("  hello  ".to_string())).unwrap();
    assert_eq!(prompt.as_str(), "  hello  ");
}

#[test]
fn given_prompt_error_when_displayed_then_reads_prompt_is_required() {
    assert_eq!(PromptError::Blank.to_string(), "Prompt is required");
    assert_eq!(PromptError::Missing.to_string(), "Prompt is required");
}

#[test]
fn given_roles_when_displayed_then_use_lowercase_names() {
    assert_eq!(MessageRole::User.to_string(), "user");
    assert_eq!(MessageRole::Assistant.to_string(), "assistant");
}

#[test]
fn given_new_messages_when_created_then_role_and_content_are_set() {
    let user = ChatMessage::user("hello");
    let assistant = ChatMessage::assistant("hi");

    assert_eq!(user.role(), MessageRole::User);
    assert_eq!(user.content(), "hello");
    assert_eq!(assistant.role(), MessageRole::Assistant);
    assert!(assistant.timestamp() >= user.timestamp());
    assert_eq!(user.display_time().len(), 5);
}

#[test]
fn given_message_when_serialized_then_role_is_lowercase() {
    let json = serde_json::to_value(ChatMessage::assistant("hi")).unwrap();
    assert_eq!(json["role"], "assistant");
    assert_eq!(json["content"], "hi");
    assert!(json["timestamp"].is_string());
}

#[test]
fn given_assistant_message_with_code_when_rendering_then_code_and_prose_are_shown() {
    console::set_colors_enabled(false);
    let rendered = render_message(&ChatMessage::assistant(
        "Try this:\n```sh\ncargo run\n```",
    ));

    assert!(rendered.contains("Gemini"));
    assert!(rendered.contains("• Try this:"));
    assert!(rendered.contains("┌─ sh"));
    assert!(rendered.contains("│ cargo run"));
}
