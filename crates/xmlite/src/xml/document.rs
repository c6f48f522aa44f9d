//! Document wrapper: prologue, root element, stream and file I/O

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::input::Encoding;
use crate::xml::node::Node;
use crate::xml::parser::{Config, Parser};

/// XML document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Parse text that starts with the `<?xml ... ?>` prologue
    pub fn parse(text: &str) -> Result<Self> {
        Parser::new(text).load_document()
    }

    pub fn parse_with_config(text: &str, config: Config) -> Result<Self> {
        Parser::with_config(text, config).load_document()
    }

    /// Decode `bytes` and parse them. Without an explicit encoding only a
    /// UTF-8 BOM is recognized and the rest is read as UTF-8.
    pub fn from_bytes(bytes: &[u8], encoding: Option<Encoding>) -> Result<Self> {
        Self::from_bytes_with_config(bytes, encoding, Config::default())
    }

    pub fn from_bytes_with_config(
        bytes: &[u8],
        encoding: Option<Encoding>,
        config: Config,
    ) -> Result<Self> {
        let text = match encoding {
            Some(encoding) => encoding.decode(bytes)?,
            None => Encoding::Utf8.decode(Encoding::strip_utf8_bom(bytes))?,
        };
        Self::parse_with_config(&text, config)
    }

    /// Read the whole stream, then parse it (UTF-8, optional BOM)
    pub fn load_stream<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes, None)
    }

    pub fn load_stream_with_encoding<R: Read>(mut reader: R, encoding: Encoding) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes, Some(encoding))
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        debug!("reading xml file");
        let bytes = std::fs::read(path.as_ref())?;
        let doc = Self::from_bytes(&bytes, None)?;
        info!(root = doc.root.name(), "xml file loaded");
        Ok(doc)
    }

    /// The `<?xml ... ?>` line written ahead of the root
    pub fn prologue(encoding: Encoding) -> String {
        format!("<?xml version=\"1.0\" encoding=\"{}\"?>", encoding.name())
    }

    /// Write prologue and tree in `encoding`, optionally led by its BOM
    pub fn write<W: Write>(&self, mut out: W, encoding: Encoding, bom: bool) -> Result<()> {
        if bom {
            out.write_all(encoding.bom())?;
        }
        let text = self.to_text(encoding);
        out.write_all(&encoding.encode(&text))?;
        out.flush()?;
        Ok(())
    }

    /// Indented form of the document, as written by [`log`](Self::log)
    pub fn log_string(&self) -> String {
        format!("{}\n{}", Self::prologue(Encoding::Utf8), self.root.log_string(0))
    }

    pub fn log(&self) {
        debug!("{}", Self::prologue(Encoding::Utf8));
        self.root.log(0);
    }

    fn to_text(&self, encoding: Encoding) -> String {
        format!("{}\n{}", Self::prologue(encoding), self.root)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Encoding::Utf8))
    }
}
