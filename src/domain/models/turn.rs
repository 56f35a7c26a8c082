#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::Speaker;

/// A single transcript entry. Text is stored verbatim as submitted; turns are
/// never mutated once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: &str) -> Turn {
        return Turn {
            speaker,
            text: text.to_string(),
        };
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        return wrap(&self.text, line_max_width);
    }
}

/// Greedy word wrap over display columns. Unspaced scripts (the zh content)
/// arrive as single long words and are broken by character width instead.
pub fn wrap(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if line_max_width == 0 {
        return lines;
    }

    for full_line in text.replace('\t', "  ").split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        let mut width = 0;
        let mut current: Vec<String> = vec![];

        for word in full_line.split(' ') {
            let word_width = UnicodeWidthStr::width(word);

            if word_width > line_max_width {
                if !current.is_empty() {
                    lines.push(current.join(" ").trim_end().to_string());
                    current = vec![];
                    width = 0;
                }

                let mut chunk = String::new();
                let mut chunk_width = 0;
                for ch in word.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if chunk_width + ch_width > line_max_width && !chunk.is_empty() {
                        lines.push(chunk);
                        chunk = String::new();
                        chunk_width = 0;
                    }
                    chunk.push(ch);
                    chunk_width += ch_width;
                }
                if !chunk.is_empty() {
                    width = chunk_width + 1;
                    current = vec![chunk];
                }
                continue;
            }

            if word_width + width + 1 > line_max_width {
                if !current.is_empty() {
                    lines.push(current.join(" ").trim_end().to_string());
                }
                current = vec![word.to_string()];
                width = word_width + 1;
            } else {
                current.push(word.to_string());
                width += word_width + 1;
            }
        }

        if !current.is_empty() {
            lines.push(current.join(" ").trim_end().to_string());
        }
    }

    return lines;
}
