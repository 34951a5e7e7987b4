//! The in-world message log: every narrative combat, placement and
//! equipment event lands here.

use super::color::Color;
use super::constants::{MSG_HEIGHT, MSG_WIDTH};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub text: String,
    pub color: Color,
}

/// Bounded, word-wrapped log of colored lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    lines: VecDeque<LogLine>,
    width: usize,
    capacity: usize,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::with_dimensions(MSG_WIDTH, MSG_HEIGHT)
    }

    pub fn with_dimensions(width: usize, capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            width: width.max(1),
            capacity: capacity.max(1),
        }
    }

    /// Adds a message.
    ///
    /// With `append == false` each wrapped line is merged onto the previous
    /// log line (two spaces apart). A white merge inherits the previous colour.
    pub fn message(&mut self, text: &str, color: Color, append: bool) {
        for line in wrap(text, self.width) {
            if !append {
                if let Some(previous) = self.lines.back_mut() {
                    if color != Color::WHITE || previous.color == color {
                        previous.color = color;
                    }
                    previous.text = format!("{}  {}", previous.text, line);
                    continue;
                }
            }

            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(LogLine { text: line, color });
        }
    }

    /// Appends a white line.
    pub fn info(&mut self, text: &str) {
        self.message(text, Color::WHITE, true);
    }

    pub fn lines(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    pub fn last(&self) -> Option<&LogLine> {
        self.lines.back()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True if any retained line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy word wrap. Words longer than `width` are split hard.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
