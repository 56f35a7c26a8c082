#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::domain::models::wrap;
use crate::domain::models::Speaker;
use crate::domain::models::Transcript;
use crate::domain::models::Turn;

pub const ASSISTANT_TITLE: &str = "Research Assistant";
pub const INPUT_PLACEHOLDER: &str = "Type your question...";

const STATUS_TEXT: &str = "Powered by Gemini";
const GREETING: &str = "\"Hello! I'm Shuo's AI representative. Ask me about his experience in HCI, AI, or Real-Time Rendering.\"";
const LOADING_TEXT: &str = "Synthesizing response";

// The page's blue-600 accent.
const ACCENT: Color = Color::Rgb(37, 99, 235);

fn speaker_label(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => return "You",
        Speaker::Assistant => return "Assistant",
    }
}

fn bubble_style(speaker: Speaker) -> Style {
    if speaker == Speaker::User {
        return Style {
            fg: Some(ACCENT),
            ..Style::default()
        };
    }

    return Style::default();
}

/// Renders the assistant panel as plain lines: status row, transcript
/// bubbles, the synthesizing indicator. Widgets stay in the UI layer, this
/// only builds text so it can be exercised without a terminal.
pub struct ChatWidget {}

impl ChatWidget {
    pub fn status_line(backend_online: bool) -> Line<'static> {
        let mut dot_color = Color::Green;
        if !backend_online {
            dot_color = Color::Yellow;
        }

        return Line::from(vec![
            Span::styled(
                "● ".to_string(),
                Style {
                    fg: Some(dot_color),
                    ..Style::default()
                },
            ),
            Span::styled(
                STATUS_TEXT.to_string(),
                Style {
                    fg: Some(ACCENT),
                    ..Style::default()
                },
            ),
        ]);
    }

    pub fn greeting_lines(width: u16) -> Vec<Line<'static>> {
        return wrap(GREETING, usize::from(width).saturating_sub(4).max(1))
            .iter()
            .map(|line| {
                return Line::from(Span::styled(
                    format!("  {line}"),
                    Style {
                        fg: Some(Color::DarkGray),
                        add_modifier: Modifier::ITALIC,
                        ..Style::default()
                    },
                ));
            })
            .collect();
    }

    pub fn transcript_lines(transcript: &Transcript, width: u16) -> Vec<Line<'static>> {
        if transcript.is_empty() {
            return ChatWidget::greeting_lines(width);
        }

        return transcript
            .turns()
            .iter()
            .flat_map(|turn| {
                return ChatWidget::turn_lines(turn, width);
            })
            .collect();
    }

    pub fn loading_line(tick: usize) -> Line<'static> {
        let dots = [".", "..", "..."][tick % 3];

        return Line::from(Span::styled(
            format!("{LOADING_TEXT}{dots}"),
            Style {
                fg: Some(Color::DarkGray),
                add_modifier: Modifier::ITALIC,
                ..Style::default()
            },
        ));
    }

    fn turn_lines(turn: &Turn, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);

        // Keep a minimum 4% of the panel clear on the open side.
        let side_padding = ((width as f32) * 0.04).ceil() as usize;
        let wrap_width = width.saturating_sub(5 + side_padding).max(1);
        let text_lines = turn.as_string_lines(wrap_width);

        let label = speaker_label(turn.speaker);
        let mut max_line_width = text_lines
            .iter()
            .map(|line| {
                return UnicodeWidthStr::width(line.as_str());
            })
            .max()
            .unwrap_or(0);
        if max_line_width < UnicodeWidthStr::width(label) {
            max_line_width = UnicodeWidthStr::width(label);
        }

        let style = bubble_style(turn.speaker);

        // Bar math counts display columns, not bytes. The borders are
        // multibyte and the zh content is double width.
        let inner_bar = ["─"].repeat(max_line_width + 2).join("");
        let label_bar = ["─"]
            .repeat(max_line_width + 2 - UnicodeWidthStr::width(label))
            .join("");
        let top_bar = format!("╭{label}{label_bar}╮");
        let bottom_bar = format!("╰{inner_bar}╯");
        let bar_padding = [" "].repeat(width.saturating_sub(max_line_width + 4)).join("");

        let mut lines: Vec<Line> = vec![];
        let align_right = turn.speaker == Speaker::User;

        let mut push_aligned = |content: String| {
            if align_right {
                lines.push(Line::from(Span::styled(
                    format!("{bar_padding}{content}"),
                    style,
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    format!("{content}{bar_padding}"),
                    style,
                )));
            }
        };

        push_aligned(top_bar);
        for line in text_lines {
            let fill = [" "]
                .repeat(max_line_width - UnicodeWidthStr::width(line.as_str()))
                .join("");
            push_aligned(format!("│ {line}{fill} │"));
        }
        push_aligned(bottom_bar);

        return lines;
    }
}
