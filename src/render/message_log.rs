//! The gameplay message log and its viewport rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use serde::{Deserialize, Serialize};

/// A single log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The message text, without the repeat counter.
    pub text: String,
    /// Display style.
    pub style: Style,
    /// How many times this message arrived in a row.
    pub count: u32,
}

impl Message {
    fn new(text: String, style: Style) -> Self {
        Self {
            text,
            style,
            count: 1,
        }
    }

    /// The text as displayed, with a `(xN)` suffix for repeats.
    #[must_use]
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Append-only ordered log of gameplay messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append a message.
    ///
    /// A message identical to the previous one bumps its repeat counter
    /// instead of adding a new entry.
    pub fn add(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if let Some(last) = self.messages.last_mut()
            && last.text == text
        {
            last.count += 1;
            return;
        }
        self.messages.push(Message::new(text, style));
    }

    /// Render the log into the given viewport, newest messages at the
    /// bottom, long messages word-wrapped, oldest lines dropped first.
    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut row = area.height;
        'messages: for message in self.messages.iter().rev() {
            let lines = wrap(&message.full_text(), usize::from(area.width));
            for line in lines.iter().rev() {
                if row == 0 {
                    break 'messages;
                }
                row -= 1;
                buf.set_string(area.x, area.y + row, line, message.style);
            }
        }
    }
}

/// Greedy word wrap. Words longer than `width` are split mid-word.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                break;
            }
            if current.is_empty() {
                // Hard-split an overlong word
                let split_at = word
                    .char_indices()
                    .nth(width)
                    .map_or(word.len(), |(idx, _)| idx);
                lines.push(word[..split_at].to_string());
                word = &word[split_at..];
                if word.is_empty() {
                    break;
                }
            } else {
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme;

    #[test]
    fn test_add_appends_in_order() {
        let mut log = MessageLog::new();
        log.add("first", theme::WELCOME);
        log.add("second", theme::WELCOME);

        let texts: Vec<&str> = log.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn test_repeated_messages_stack() {
        let mut log = MessageLog::new();
        log.add("Orc attacks Player but does no damage.", theme::ENEMY_ATTACK);
        log.add("Orc attacks Player but does no damage.", theme::ENEMY_ATTACK);
        log.add("Orc attacks Player but does no damage.", theme::ENEMY_ATTACK);

        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].count, 3);
        assert!(log.messages()[0].full_text().ends_with("(x3)"));
    }

    #[test]
    fn test_non_adjacent_repeats_do_not_stack() {
        let mut log = MessageLog::new();
        log.add("a", theme::WELCOME);
        log.add("b", theme::WELCOME);
        log.add("a", theme::WELCOME);
        assert_eq!(log.messages().len(), 3);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_splits_overlong_words() {
        let lines = wrap("antidisestablishmentarianism", 10);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), 10);
    }

    #[test]
    fn test_render_is_bottom_anchored() {
        let mut log = MessageLog::new();
        log.add("old", theme::WELCOME);
        log.add("new", theme::WELCOME);

        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        log.render(&mut buf, Rect::new(0, 5, 20, 5));

        let row = |y: u16| -> String {
            (0..20)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim_end()
                .to_string()
        };
        assert_eq!(row(9), "new");
        assert_eq!(row(8), "old");
        assert_eq!(row(7), "");
        // Nothing leaks above the viewport
        assert_eq!(row(4), "");
    }

    #[test]
    fn test_render_drops_oldest_lines_first() {
        let mut log = MessageLog::new();
        for i in 0..10 {
            log.add(format!("message number {i}"), theme::WELCOME);
        }

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 5));
        log.render(&mut buf, Rect::new(0, 0, 30, 5));

        let row = |y: u16| -> String {
            (0..30)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim_end()
                .to_string()
        };
        assert_eq!(row(4), "message number 9");
        assert_eq!(row(0), "message number 5");
    }
}
