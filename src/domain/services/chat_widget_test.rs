use ratatui::style::Color;
use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use super::ChatWidget;
use crate::domain::models::Speaker;
use crate::domain::models::Transcript;
use crate::domain::models::Turn;

fn line_text(line: &Line) -> String {
    return line
        .spans
        .iter()
        .map(|span| {
            return span.content.to_string();
        })
        .collect::<Vec<String>>()
        .join("");
}

fn transcript_of(turns: Vec<Turn>) -> Transcript {
    let mut transcript = Transcript::default();
    for turn in turns {
        transcript.push(turn);
    }
    return transcript;
}

#[test]
fn it_shows_the_greeting_while_the_transcript_is_empty() {
    let lines = ChatWidget::transcript_lines(&Transcript::default(), 60);

    let text = lines
        .iter()
        .map(line_text)
        .collect::<Vec<String>>()
        .join(" ");
    assert!(text.contains("\"Hello! I'm Shuo's AI representative."));
    assert!(text.contains("Real-Time Rendering.\""));
}

#[test]
fn it_right_aligns_user_bubbles() {
    let transcript = transcript_of(vec![Turn::new(Speaker::User, "hi")]);
    let lines = ChatWidget::transcript_lines(&transcript, 40);

    let top = line_text(&lines[0]);
    assert!(top.starts_with(' '));
    assert!(top.trim_start().starts_with("╭You"));
    assert!(top.ends_with('╮'));
}

#[test]
fn it_left_aligns_assistant_bubbles() {
    let transcript = transcript_of(vec![Turn::new(Speaker::Assistant, "hello there")]);
    let lines = ChatWidget::transcript_lines(&transcript, 40);

    let top = line_text(&lines[0]);
    assert!(top.starts_with("╭Assistant"));
    assert!(top.trim_end().ends_with('╮'));
}

#[test]
fn it_pads_every_bubble_line_to_the_panel_width() {
    let transcript = transcript_of(vec![
        Turn::new(Speaker::Assistant, "one two three four"),
        Turn::new(Speaker::User, "人机交互"),
    ]);

    for line in ChatWidget::transcript_lines(&transcript, 40) {
        assert_eq!(UnicodeWidthStr::width(line_text(&line).as_str()), 40);
    }
}

#[test]
fn it_wraps_bubble_text_to_the_panel() {
    let transcript = transcript_of(vec![Turn::new(Speaker::Assistant, "one two three four")]);
    let lines = ChatWidget::transcript_lines(&transcript, 16);

    // Top bar, three wrapped rows, bottom bar.
    assert_eq!(lines.len(), 5);
    assert!(line_text(&lines[1]).contains("│ one two"));
    assert!(line_text(&lines[3]).contains("│ four"));
}

#[test]
fn it_cycles_the_loading_dots() {
    assert_eq!(
        line_text(&ChatWidget::loading_line(0)),
        "Synthesizing response."
    );
    assert_eq!(
        line_text(&ChatWidget::loading_line(1)),
        "Synthesizing response.."
    );
    assert_eq!(
        line_text(&ChatWidget::loading_line(2)),
        "Synthesizing response..."
    );
    assert_eq!(
        line_text(&ChatWidget::loading_line(3)),
        "Synthesizing response."
    );
}

#[test]
fn it_flags_a_degraded_backend_in_the_status_line() {
    let online = ChatWidget::status_line(true);
    assert_eq!(online.spans[0].style.fg, Some(Color::Green));
    assert_eq!(online.spans[1].content.as_ref(), "Powered by Gemini");

    let degraded = ChatWidget::status_line(false);
    assert_eq!(degraded.spans[0].style.fg, Some(Color::Yellow));
}
