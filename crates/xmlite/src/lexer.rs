//! Character-level lexing

pub mod cursor;
pub mod tokenizer;

pub use cursor::Cursor;
pub use tokenizer::Tokenizer;
