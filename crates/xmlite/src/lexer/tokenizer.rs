//! Token-level scanning: whitespace and comment skipping, words, quoted text

use crate::error::Pos;
use crate::lexer::Cursor;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Tokenizer for one parse of one document
///
/// Raw operations (`next_char`, `next_if`, `take`, `back`) are passed
/// straight to the cursor. Token operations (`next_token`, `next_word`)
/// skip whitespace and complete comments first. Failed operations do not
/// restore the cursor unless stated otherwise.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    cursor: Cursor,
}

impl Tokenizer {
    pub fn new(text: &str) -> Self {
        Self {
            cursor: Cursor::new(text),
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    pub fn matches(&self, at: Option<usize>, text: &str) -> bool {
        self.cursor.matches(at, text)
    }

    pub fn back(&mut self, count: usize) -> bool {
        self.cursor.back(count)
    }

    pub fn next_char(&mut self) -> Option<char> {
        self.cursor.next_char()
    }

    pub fn next_if(&mut self, expected: char) -> Option<char> {
        self.cursor.next_if(expected)
    }

    pub fn take(&mut self, count: usize) -> Option<String> {
        self.cursor.take(count)
    }

    pub fn position(&self) -> Pos {
        self.cursor.position()
    }

    /// Skip whitespace and comments, then consume the next character.
    ///
    /// Returns `None` at end of input or when a comment is never closed.
    pub fn next_token(&mut self) -> Option<char> {
        loop {
            while matches!(self.cursor.peek(), Some(' ' | '\t' | '\r' | '\n')) {
                self.cursor.next_char();
            }

            if !self.cursor.matches(None, COMMENT_OPEN) {
                return self.cursor.next_char();
            }

            self.cursor.take(COMMENT_OPEN.len());
            loop {
                if self.cursor.matches(None, COMMENT_CLOSE) {
                    self.cursor.take(COMMENT_CLOSE.len());
                    break;
                }
                self.cursor.next_char()?;
            }
        }
    }

    /// Read a word: an alphabetic first character, then letters, digits and
    /// underscores. The first character is pushed back when it cannot start
    /// a word.
    pub fn next_word(&mut self) -> Option<String> {
        let first = self.next_token()?;
        if !first.is_alphabetic() {
            self.cursor.back(1);
            return None;
        }

        let mut word = String::from(first);
        while let Some(c) = self.cursor.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            word.push(c);
            self.cursor.next_char();
        }
        Some(word)
    }

    /// Read `"..."` starting at the very next character, returning the text
    /// between the quotes without entity decoding.
    ///
    /// A CR or LF before the closing quote, or end of input, fails. The
    /// cursor stays wherever scanning stopped.
    pub fn quoted_text(&mut self) -> Option<String> {
        if self.cursor.next_char()? != '"' {
            return None;
        }

        let mut text = String::new();
        loop {
            match self.cursor.next_char()? {
                '"' => return Some(text),
                '\r' | '\n' => return None,
                c => text.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_token_skips_whitespace() {
        let mut tok = Tokenizer::new(" \t\r\n <a");
        assert_eq!(tok.next_token(), Some('<'));
        assert_eq!(tok.next_token(), Some('a'));
        assert_eq!(tok.next_token(), None);
    }

    #[test]
    fn test_next_token_skips_comments() {
        let mut tok = Tokenizer::new("<!-- one --> <!--two-->\n<x");
        assert_eq!(tok.next_token(), Some('<'));
        assert_eq!(tok.next_token(), Some('x'));
    }

    #[test]
    fn test_next_token_unterminated_comment() {
        let mut tok = Tokenizer::new("<!-- never closed <a/>");
        assert_eq!(tok.next_token(), None);
    }

    #[test]
    fn test_next_token_comment_with_dashes() {
        let mut tok = Tokenizer::new("<!-- a - b -- c --->/");
        assert_eq!(tok.next_token(), Some('/'));
    }

    #[test]
    fn test_next_word() {
        let mut tok = Tokenizer::new("  name_1 rest");
        assert_eq!(tok.next_word().as_deref(), Some("name_1"));
        assert_eq!(tok.next_word().as_deref(), Some("rest"));
        assert_eq!(tok.next_word(), None);
    }

    #[test]
    fn test_next_word_rejects_digit_and_underscore_start() {
        let mut tok = Tokenizer::new("1abc");
        assert_eq!(tok.next_word(), None);
        assert_eq!(tok.next_char(), Some('1'));

        let mut tok = Tokenizer::new(" _abc");
        assert_eq!(tok.next_word(), None);
        assert_eq!(tok.next_char(), Some('_'));
    }

    #[test]
    fn test_next_word_stops_at_punctuation() {
        let mut tok = Tokenizer::new("key=\"v\"");
        assert_eq!(tok.next_word().as_deref(), Some("key"));
        assert_eq!(tok.next_char(), Some('='));
    }

    #[test]
    fn test_quoted_text() {
        let mut tok = Tokenizer::new("\"a &amp; b\" tail");
        assert_eq!(tok.quoted_text().as_deref(), Some("a &amp; b"));
        assert_eq!(tok.next_token(), Some('t'));
    }

    #[test]
    fn test_quoted_text_requires_immediate_quote() {
        let mut tok = Tokenizer::new(" \"a\"");
        assert_eq!(tok.quoted_text(), None);
    }

    #[test]
    fn test_quoted_text_unterminated() {
        let mut tok = Tokenizer::new("\"hello");
        assert_eq!(tok.quoted_text(), None);
        assert!(!tok.has_more());
    }

    #[test]
    fn test_quoted_text_rejects_newline() {
        let mut tok = Tokenizer::new("\"hel\nlo\"");
        assert_eq!(tok.quoted_text(), None);
        // cursor is left after the newline
        assert_eq!(tok.next_char(), Some('l'));
    }

    #[test]
    fn test_empty_quoted_text() {
        let mut tok = Tokenizer::new("\"\"");
        assert_eq!(tok.quoted_text().as_deref(), Some(""));
    }
}
