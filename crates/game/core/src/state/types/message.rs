//! User-visible message sink.
//!
//! The core never renders; it appends `(text, color)` pairs that a frontend
//! may display however it likes.

use std::collections::VecDeque;

use crate::config::GameConfig;

/// Named palette shared by entity glyphs and message tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    LightGray,
    DarkGray,
    Red,
    DarkRed,
    Orange,
    DarkerOrange,
    Yellow,
    LightYellow,
    Green,
    LightGreen,
    DesaturatedGreen,
    DarkerGreen,
    Sky,
    Blue,
    LightBlue,
    LightCyan,
    Violet,
    LightViolet,
    Brown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: Color,
}

/// Bounded FIFO of messages; the oldest entry is dropped when full.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    capacity: usize,
    entries: VecDeque<Message>,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, text: impl Into<String>, color: Color) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Message {
            text: text.into(),
            color,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any retained message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|m| m.text.contains(needle))
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_MESSAGE_CAPACITY)
    }
}

/// Capitalizes the first character of a name for sentence starts.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.push("one", Color::White);
        log.push("two", Color::White);
        log.push("three", Color::Red);

        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.last().map(|m| m.color), Some(Color::Red));
    }

    #[test]
    fn capitalizes_names() {
        assert_eq!(capitalize("orc"), "Orc");
        assert_eq!(capitalize(""), "");
    }
}
