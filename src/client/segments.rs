const FENCE: &str = "```";

/// A display unit of assistant content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// One non-blank prose line, trimmed.
    Text(String),
    /// Body of a fenced block, fence lines excluded.
    Code {
        language: Option<String>,
        code: String,
    },
}

/// Splits `content` into fenced code blocks and prose lines.
///
/// An opening fence may carry a language tag (```` ```rust ````). A fence
/// left open runs to the end of the content.
pub fn parse_segments(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut open_block: Option<(Option<String>, Vec<&str>)> = None;

    for line in content.lines() {
        if let Some(tag) = line.trim_start().strip_prefix(FENCE) {
            match open_block.take() {
                Some((language, lines)) => segments.push(Segment::Code {
                    language,
                    code: lines.join("\n"),
                }),
                None => {
                    let tag = tag.trim();
                    let language = (!tag.is_empty()).then(|| tag.to_string());
                    open_block = Some((language, Vec::new()));
                }
            }
            continue;
        }

        match open_block.as_mut() {
            Some((_, lines)) => lines.push(line),
            None => {
                let text = line.trim();
                if !text.is_empty() {
                    segments.push(Segment::Text(text.to_string()));
                }
            }
        }
    }

    if let Some((language, lines)) = open_block {
        segments.push(Segment::Code {
            language,
            code: lines.join("\n"),
        });
    }

    segments
}
