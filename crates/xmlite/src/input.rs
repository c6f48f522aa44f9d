//! Byte-level input and output encodings

use std::fmt;

use crate::error::{Error, ErrorKind, Pos, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF32LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const UTF32BE_BOM: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];

/// Supported document encodings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Encoding {
    pub const ALL: [Self; 5] = [
        Self::Utf8,
        Self::Utf16Le,
        Self::Utf16Be,
        Self::Utf32Le,
        Self::Utf32Be,
    ];

    /// Name written into the `encoding` pseudo-attribute of the prologue
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf32Le => "UTF-32LE",
            Self::Utf32Be => "UTF-32BE",
        }
    }

    /// Byte order mark
    pub const fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8 => UTF8_BOM,
            Self::Utf16Le => UTF16LE_BOM,
            Self::Utf16Be => UTF16BE_BOM,
            Self::Utf32Le => UTF32LE_BOM,
            Self::Utf32Be => UTF32BE_BOM,
        }
    }

    /// Strip a leading UTF-8 BOM. No other encoding is detected.
    pub fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
        bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
    }

    /// Decode `bytes`, skipping this encoding's BOM when present
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let bytes = bytes.strip_prefix(self.bom()).unwrap_or(bytes);
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| self.error(e.valid_up_to())),
            Self::Utf16Le | Self::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(self.error(bytes.len()));
                }
                let units: Vec<u16> = chunks::<2>(bytes)
                    .map(|pair| {
                        if self == Self::Utf16Le {
                            u16::from_le_bytes(pair)
                        } else {
                            u16::from_be_bytes(pair)
                        }
                    })
                    .collect();
                let mut out = String::with_capacity(units.len());
                let mut unit = 0;
                for c in char::decode_utf16(units) {
                    let c = c.map_err(|_| self.error(unit * 2))?;
                    unit += c.len_utf16();
                    out.push(c);
                }
                Ok(out)
            }
            Self::Utf32Le | Self::Utf32Be => {
                if bytes.len() % 4 != 0 {
                    return Err(self.error(bytes.len()));
                }
                chunks::<4>(bytes)
                    .enumerate()
                    .map(|(idx, quad)| {
                        let code = if self == Self::Utf32Le {
                            u32::from_le_bytes(quad)
                        } else {
                            u32::from_be_bytes(quad)
                        };
                        char::from_u32(code).ok_or_else(|| self.error(idx * 4))
                    })
                    .collect()
            }
        }
    }

    /// Encode `text` without a BOM
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Utf32Le => text
                .chars()
                .flat_map(|c| u32::from(c).to_le_bytes())
                .collect(),
            Self::Utf32Be => text
                .chars()
                .flat_map(|c| u32::from(c).to_be_bytes())
                .collect(),
        }
    }

    fn error(self, offset: usize) -> Error {
        Error::with_message(
            ErrorKind::Encoding,
            Pos::new(offset, 0, 0),
            format!("invalid {} sequence at byte {offset}", self.name()),
        )
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn chunks<const N: usize>(bytes: &[u8]) -> impl Iterator<Item = [u8; N]> + '_ {
    bytes
        .chunks_exact(N)
        .filter_map(|chunk| <[u8; N]>::try_from(chunk).ok())
}
