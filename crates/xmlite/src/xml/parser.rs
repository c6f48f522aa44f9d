//! Recursive-descent parser for elements and documents

use std::fmt;

use tracing::debug;

use crate::entity;
use crate::error::{Error, ErrorKind, Result};
use crate::lexer::Tokenizer;
use crate::xml::document::Document;
use crate::xml::node::Node;

const PROLOGUE_OPEN: &str = "<?xml";

/// Configuration for the XML parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl Config {
    /// Create a new config with unlimited depth
    pub const fn unlimited() -> Self {
        Self { max_depth: 0 }
    }

    pub const fn new(max_depth: u16) -> Self {
        Self { max_depth }
    }
}

/// XML parser
///
/// One parser reads one buffer. Any malformed construct anywhere in the
/// tree fails the whole parse; no partial tree is returned.
#[derive(Debug)]
pub struct Parser {
    tok: Tokenizer,
    config: Config,
    depth: u16,
}

impl Parser {
    /// Create a new parser with default configuration
    pub fn new(text: &str) -> Self {
        Self::with_config(text, Config::default())
    }

    pub fn with_config(text: &str, config: Config) -> Self {
        Self::from_tokenizer(Tokenizer::new(text), config)
    }

    /// Continue from a tokenizer that may already be partly consumed
    pub fn from_tokenizer(tok: Tokenizer, config: Config) -> Self {
        Self {
            tok,
            config,
            depth: 0,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tok
    }

    /// Parse `<?xml ... ?>` followed by exactly one root element
    pub fn load_document(&mut self) -> Result<Document> {
        if self.tok.take(PROLOGUE_OPEN.len()).as_deref() != Some(PROLOGUE_OPEN) {
            return Err(self.fail("'<?xml' prologue"));
        }

        loop {
            match self.tok.next_char() {
                Some('?') if self.tok.next_if('>').is_some() => break,
                Some(_) => {}
                None => return Err(self.fail("'?>' closing the prologue")),
            }
        }

        if self.tok.next_token() != Some('<') {
            return Err(self.fail("root element"));
        }
        self.tok.back(1);

        let root = self.parse_node()?;
        Ok(Document::new(root))
    }

    /// Parse one element and its subtree; no prologue is expected
    pub fn parse_node(&mut self) -> Result<Node> {
        self.depth = 0;
        self.parse_element()
    }

    fn parse_element(&mut self) -> Result<Node> {
        self.increment_depth()?;
        let node = self.parse_element_body();
        self.decrement_depth();
        node
    }

    fn parse_element_body(&mut self) -> Result<Node> {
        if self.tok.next_token() != Some('<') {
            return Err(self.fail("'<'"));
        }
        let name = self
            .tok
            .next_word()
            .ok_or_else(|| self.fail("element name"))?;
        let mut node = Node::new(name);

        while let Some(attr) = self.tok.next_word() {
            if self.tok.next_if('=').is_none() {
                return Err(self.fail(format_args!("'=' after attribute '{attr}'")));
            }
            let raw = self
                .tok
                .quoted_text()
                .ok_or_else(|| self.fail(format_args!("quoted value for attribute '{attr}'")))?;
            node.append(attr, entity::decode(&raw));
        }

        match self.tok.next_token() {
            Some('/') => {
                return if self.tok.next_token() == Some('>') {
                    Ok(node)
                } else {
                    Err(self.fail("'>' after '/'"))
                };
            }
            Some('>') => {}
            _ => return Err(self.fail("'/>' or '>'")),
        }

        loop {
            match self.tok.next_token() {
                Some('<') => {}
                Some(_) => return Err(self.fail("'<'")),
                None => {
                    return Err(self.fail(format_args!("closing tag '</{}>'", node.name())));
                }
            }

            match self.tok.next_char() {
                Some('/') => {
                    let close = self
                        .tok
                        .next_word()
                        .ok_or_else(|| self.fail("closing tag name"))?;
                    if close != node.name() {
                        return Err(self.fail(format_args!(
                            "'</{}>', found '</{close}>'",
                            node.name()
                        )));
                    }
                    if self.tok.next_if('>').is_none() {
                        return Err(self.fail(format_args!("'>' closing '</{close}'")));
                    }
                    return Ok(node);
                }
                Some(_) => {
                    self.tok.back(2);
                    let child = self.parse_element()?;
                    node.append_child(child);
                }
                None => return Err(self.fail("element name after '<'")),
            }
        }
    }

    fn increment_depth(&mut self) -> Result<()> {
        if self.config.max_depth > 0 && self.depth >= self.config.max_depth {
            let pos = self.tok.position();
            debug!(%pos, max = self.config.max_depth, "xml nesting too deep");
            return Err(Error::new(
                ErrorKind::MaxDepthExceeded {
                    max: self.config.max_depth,
                },
                pos,
            ));
        }
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    fn decrement_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn fail(&self, expected: impl fmt::Display) -> Error {
        let pos = self.tok.position();
        debug!(%pos, "malformed xml: expected {expected}");
        Error::malformed(pos, format!("expected {expected}"))
    }
}
