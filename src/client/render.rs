use console::style;

use crate::domain::{ChatMessage, MessageRole};

use super::{Segment, parse_segments};

/// Terminal rendering of one transcript entry. User text is shown verbatim;
/// assistant text is split into prose lines and fenced code blocks.
pub fn render_message(message: &ChatMessage) -> String {
    let time = message.display_time();
    match message.role() {
        MessageRole::User => format!(
            "{} {}\n{}",
            style("You").blue().bold(),
            style(time).dim(),
            message.content()
        ),
        MessageRole::Assistant => {
            let mut out = format!("{} {}", style("Gemini").green().bold(), style(time).dim());
            for segment in parse_segments(message.content()) {
                out.push('\n');
                out.push_str(&render_segment(&segment));
            }
            out
        }
    }
}

fn render_segment(segment: &Segment) -> String {
    match segment {
        Segment::Text(line) => format!("  • {}", line),
        Segment::Code { language, code } => {
            let header = style(format!("  ┌─ {}", language.as_deref().unwrap_or("code"))).dim();
            let body = code
                .lines()
                .map(|line| format!("  │ {}", style(line).cyan()))
                .collect::<Vec<_>>()
                .join("\n");
            if body.is_empty() {
                format!("{}\n  └─", header)
            } else {
                format!("{}\n{}\n  └─", header, body)
            }
        }
    }
}
