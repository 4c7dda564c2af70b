//! Byte decoding with a UTF-8 then Windows-1252 fallback.

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Encoding a file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// UTF-8 with a leading byte-order mark (stripped).
    Utf8Bom,
    /// Windows-1252, which also covers printable Latin-1.
    Windows1252,
}

impl SourceEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-sig",
            Self::Windows1252 => "windows-1252",
        }
    }
}

/// Decoded text and the encoding that produced it.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Decode file bytes, trying UTF-8 (with or without BOM) first and falling
/// back to Windows-1252. Never fails: Windows-1252 maps every byte.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    let (body, had_bom) = match bytes.strip_prefix(b"\xEF\xBB\xBF") {
        Some(rest) => (rest, true),
        None => (bytes, false),
    };
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(body) {
        return DecodedText {
            text: text.into_owned(),
            encoding: if had_bom {
                SourceEncoding::Utf8Bom
            } else {
                SourceEncoding::Utf8
            },
        };
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding: SourceEncoding::Windows1252,
    }
}

/// Returns the UTF-16 variant name if `bytes` starts with a UTF-16 BOM.
pub fn utf16_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes.get(0..2) {
        Some([0xFF, 0xFE]) => Some("UTF-16 LE"),
        Some([0xFE, 0xFF]) => Some("UTF-16 BE"),
        _ => None,
    }
}
