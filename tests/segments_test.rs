use gemini_relay::client::{Segment, parse_segments};

#[test]
fn given_plain_prose_when_parsing_then_returns_one_text_segment_per_non_blank_line() {
    let segments = parse_segments("First line\n\n  Second line  \n");

    assert_eq!(
        segments,
        vec![
            Segment::Text("First line".to_string()),
            Segment::Text("Second line".to_string()),
        ]
    );
}

#[test]
fn given_fenced_block_with_language_when_parsing_then_separates_code_from_prose() {
    let content = "Here you go:\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\nDone.";

    let segments = parse_segments(content);

    assert_eq!(
        segments,
        vec![
            Segment::Text("Here you go:".to_string()),
            Segment::Code {
                language: Some("rust".to_string()),
                code: "fn main() {\n    println!(\"hi\");\n}".to_string(),
            },
            Segment::Text("Done.".to_string()),
        ]
    );
}

#[test]
fn given_fence_without_language_when_parsing_then_language_is_none() {
    let segments = parse_segments("```\nls -la\n```");

    assert_eq!(
        segments,
        vec![Segment::Code {
            language: None,
            code: "ls -la".to_string(),
        }]
    );
}

#[test]
fn given_blank_lines_inside_code_when_parsing_then_they_are_preserved() {
    let segments = parse_segments("```py\na = 1\n\nb = 2\n```");

    assert_eq!(
        segments,
        vec![Segment::Code {
            language: Some("py".to_string()),
            code: "a = 1\n\nb = 2".to_string(),
        }]
    );
}

#[test]
fn given_unterminated_fence_when_parsing_then_code_runs_to_end() {
    let segments = parse_segments("Start\n```js\nconsole.log(1)");

    assert_eq!(
        segments,
        vec![
            Segment::Text("Start".to_string()),
            Segment::Code {
                language: Some("js".to_string()),
                code: "console.log(1)".to_string(),
            },
        ]
    );
}

#[test]
fn given_two_blocks_when_parsing_then_both_are_returned_in_order() {
    let segments = parse_segments("```a\n1\n```\nbetween\n```b\n2\n```");

    assert_eq!(segments.len(), 3);
    assert!(matches!(&segments[0], Segment::Code { language: Some(l), .. } if l == "a"));
    assert_eq!(segments[1], Segment::Text("between".to_string()));
    assert!(matches!(&segments[2], Segment::Code { language: Some(l), .. } if l == "b"));
}

#[test]
fn given_same_content_when_parsed_twice_then_segmentation_is_identical() {
    let content = "Intro\n```sql\nSELECT 1;\n```\n- item one\n- item two";

    assert_eq!(parse_segments(content), parse_segments(content));
}

#[test]
fn given_empty_content_when_parsing_then_returns_no_segments() {
    assert!(parse_segments("").is_empty());
}
