//! xmlite - attributed-tree XML parser and writer
//!
//! Accepts a restricted dialect: a `<?xml ... ?>` prologue, one root
//! element, elements with double-quoted attributes and nested elements,
//! and comments. There is no text content, CDATA, DTD or namespace support.
//!
//! # Quick Start
//!
//! ```
//! use xmlite::from_str;
//! # fn main() -> Result<(), xmlite::Error> {
//! let doc = from_str(r#"<?xml version="1.0"?><config size="0x20"><item name="a"/></config>"#)?;
//! let size = doc.root.attr("size").map(|a| a.int_value()).unwrap_or_default();
//! assert_eq!(size, 32);
//! assert_eq!(doc.root.child("item").and_then(|n| n.value("name")), Some("a"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result};

pub mod input;
pub use input::Encoding;

pub mod entity;

pub mod lexer;
pub use lexer::{Cursor, Tokenizer};

pub mod xml;
pub use xml::{Attr, Config, Document, Node, Parser};

/// Parse a document (prologue plus root element) from a string
pub fn from_str(s: &str) -> Result<Document> {
    Document::parse(s)
}

/// Parse a document from bytes; a UTF-8 BOM is skipped
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    Document::from_bytes(bytes, None)
}

/// Parse a document with custom configuration
pub fn from_str_with_config(s: &str, config: Config) -> Result<Document> {
    Document::parse_with_config(s, config)
}

/// Parse a single element tree without a prologue
pub fn parse_node(s: &str) -> Result<Node> {
    Parser::new(s).parse_node()
}
