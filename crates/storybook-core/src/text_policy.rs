//! Text shaping policies for fixed-pitch page layout.

use core::fmt::Write;

use heapless::String;

pub const LABEL_BYTES: usize = 24;

/// `"Page n"` header drawn above each page.
pub fn page_label(number: u16) -> String<LABEL_BYTES> {
    let mut out = String::new();
    let _ = write!(out, "Page {}", number);
    out
}

/// `"n of m"` indicator drawn between the navigation controls.
pub fn counter_label(current: u16, total: u16) -> String<LABEL_BYTES> {
    let mut out = String::new();
    let _ = write!(out, "{} of {}", current, total);
    out
}

/// Greedy word wrap into lines of at most `max_chars` characters.
///
/// Explicit newlines are kept; an empty source line yields an empty output
/// line. Words wider than a full line are split at character boundaries.
pub fn wrap_lines(text: &str, max_chars: usize) -> WrapLines<'_> {
    WrapLines {
        pending: Some(text),
        line_rest: None,
        max_chars,
    }
}

#[derive(Clone, Debug)]
pub struct WrapLines<'a> {
    pending: Option<&'a str>,
    line_rest: Option<&'a str>,
    max_chars: usize,
}

impl<'a> Iterator for WrapLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.max_chars == 0 {
            return None;
        }

        let rest = match self.line_rest.take() {
            Some(rest) => rest,
            None => {
                let text = self.pending?;
                let line = match text.find('\n') {
                    Some(idx) => {
                        self.pending = Some(&text[idx + 1..]);
                        &text[..idx]
                    }
                    None => {
                        self.pending = None;
                        text
                    }
                };

                let line = line.trim();
                if line.is_empty() {
                    return Some("");
                }
                line
            }
        };

        let end = fit_words(rest, self.max_chars);
        let remaining = rest[end..].trim_start();
        if !remaining.is_empty() {
            self.line_rest = Some(remaining);
        }

        Some(rest[..end].trim_end())
    }
}

/// Byte length of the longest word-aligned prefix of `text` that fits.
fn fit_words(text: &str, max_chars: usize) -> usize {
    let mut end = 0usize;
    let mut chars = 0usize;
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(text, cursor) {
        let word_start = next_cursor - word.len();
        let gap = text[end..word_start].chars().count();
        let word_chars = word.chars().count();
        let needed = if end == 0 { word_chars } else { gap + word_chars };

        if chars + needed > max_chars {
            break;
        }

        chars += needed;
        end = next_cursor;
        cursor = next_cursor;
    }

    if end == 0 {
        // Single word wider than the line.
        return text
            .char_indices()
            .nth(max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len());
    }

    end
}

fn next_word_at(text: &str, mut cursor: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    while cursor < len && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    if cursor >= len {
        return None;
    }

    let start = cursor;
    while cursor < len && !bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }

    Some((&text[start..cursor], cursor))
}
