//! Character cursor over a fully materialized buffer

use crate::error::Pos;

/// Cursor over a character buffer
///
/// Invariant: `0 <= pos <= chars.len()`. None of the operations here skip
/// whitespace or comments.
#[derive(Clone, Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    /// Create cursor from text
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// True while unread characters remain
    pub fn has_more(&self) -> bool {
        self.pos < self.chars.len()
    }

    /// Non-consuming lookahead of `text` at `at` (or the current index).
    ///
    /// Fails closed: a match whose last character would be the last
    /// character of the buffer is rejected, so this only succeeds when at
    /// least one character follows the matched region.
    pub fn matches(&self, at: Option<usize>, text: &str) -> bool {
        let start = at.unwrap_or(self.pos);
        let len = text.chars().count();
        match start.checked_add(len) {
            Some(end) if end < self.chars.len() => self
                .chars
                .get(start..end)
                .is_some_and(|window| window.iter().copied().eq(text.chars())),
            _ => false,
        }
    }

    /// Rewind by `count`; false (and no movement) if that would go below 0
    pub fn back(&mut self, count: usize) -> bool {
        match self.pos.checked_sub(count) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Character at the current index, without consuming it
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume one character
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume one character only if it equals `expected`
    pub fn next_if(&mut self, expected: char) -> Option<char> {
        match self.chars.get(self.pos) {
            Some(&c) if c == expected => {
                self.pos += 1;
                Some(c)
            }
            _ => None,
        }
    }

    /// Consume exactly `count` characters
    pub fn take(&mut self, count: usize) -> Option<String> {
        let end = self.pos.checked_add(count)?;
        let slice = self.chars.get(self.pos..end)?;
        let text = slice.iter().collect();
        self.pos = end;
        Some(text)
    }

    /// Current index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Number of unread characters
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.pos
    }

    /// Line and column of the current index, for diagnostics
    pub fn position(&self) -> Pos {
        let mut line: u32 = 1;
        let mut col: u32 = 1;
        for &c in self.chars.iter().take(self.pos) {
            if c == '\n' {
                line = line.saturating_add(1);
                col = 1;
            } else {
                col = col.saturating_add(1);
            }
        }
        Pos::new(self.pos, line, col)
    }
}
