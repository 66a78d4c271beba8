use std::time::Duration;

use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{BasicHistory, Input};
use indicatif::{ProgressBar, ProgressStyle};

use gemini_relay::client::{ChatEvent, ChatState, RelayClient, render_message};

fn print_landing(term: &Term, relay: &RelayClient) -> std::io::Result<()> {
    term.write_line(&style("Smart ChatBot").bold().to_string())?;
    term.write_line("Your AI Assistant powered by Gemini API")?;
    term.write_line(
        &style(format!(
            "Relay: {}  (/clear to clear the screen, /exit to quit)",
            relay.chat_url()
        ))
        .dim()
        .to_string(),
    )?;
    term.write_line("")
}

fn typing_indicator() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Gemini is typing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_since(term: &Term, state: &ChatState, from: usize) -> std::io::Result<()> {
    for message in state.transcript().since(from) {
        term.write_line(&render_message(message))?;
        term.write_line("")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let term = Term::stdout();
    let relay = RelayClient::from_env();
    let theme = ColorfulTheme::default();
    let mut history = BasicHistory::new().max_entries(99).no_duplicates(true);
    let mut state = ChatState::new();

    print_landing(&term, &relay)?;

    loop {
        let input = Input::<String>::with_theme(&theme)
            .with_prompt("Type your message")
            .allow_empty(true)
            .history_with(&mut history)
            .interact_text()?;

        match input.trim() {
            "/exit" | "/quit" => break,
            "/clear" => {
                term.clear_screen()?;
                continue;
            }
            _ => {}
        }

        let before = state.transcript().len();
        state = state.apply(ChatEvent::Submit(input));
        if let Some(notice) = state.notice() {
            term.write_line(&style(notice).yellow().to_string())?;
        }
        print_since(&term, &state, before)?;

        let Some(prompt) = state.pending_prompt().map(str::to_owned) else {
            continue;
        };

        let spinner = typing_indicator();
        let result = relay.send(&prompt).await;
        spinner.finish_and_clear();

        let before = state.transcript().len();
        state = state.apply(match result {
            Ok(reply) => ChatEvent::ReplyReceived(reply),
            Err(failure) => ChatEvent::ReplyFailed(failure),
        });

        if let Some(banner) = state.banner() {
            term.write_line(&style(banner).red().bold().to_string())?;
            state = state.apply(ChatEvent::DismissBanner);
        }
        print_since(&term, &state, before)?;
    }

    Ok(())
}
