//! Single-byte code page tables
//!
//! Each code page maps every byte to at most one character. Bytes that a
//! code page leaves undefined decode to the codec's substitution character.

use crate::core::types::{CodePageId, ConversionError};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Windows-1252 assignments for 0x80..=0x9F; `None` marks the five holes
#[rustfmt::skip]
const WINDOWS_1252_HIGH: [Option<u16>; 32] = [
    Some(0x20AC), None,         Some(0x201A), Some(0x0192),
    Some(0x201E), Some(0x2026), Some(0x2020), Some(0x2021),
    Some(0x02C6), Some(0x2030), Some(0x0160), Some(0x2039),
    Some(0x0152), None,         Some(0x017D), None,
    None,         Some(0x2018), Some(0x2019), Some(0x201C),
    Some(0x201D), Some(0x2022), Some(0x2013), Some(0x2014),
    Some(0x02DC), Some(0x2122), Some(0x0161), Some(0x203A),
    Some(0x0153), None,         Some(0x017E), Some(0x0178),
];

lazy_static! {
    /// Reverse lookup for the Windows-1252 characters above U+00FF
    static ref WINDOWS_1252_REVERSE: HashMap<u16, u8> = WINDOWS_1252_HIGH
        .iter()
        .enumerate()
        .filter_map(|(offset, &unit)| unit.map(|u| (u, 0x80 + offset as u8)))
        .collect();
}

/// Supported single-byte code pages
///
/// Configuration refers to a code page by name or id string, so the textual
/// form is `Display`/`FromStr` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodePage {
    /// Windows ANSI code page for Western European locales
    #[default]
    Windows1252,
    /// ISO-8859-1, bytes map one-to-one onto U+0000..=U+00FF
    Latin1,
    /// 7-bit US-ASCII; the upper half is undefined
    Ascii,
}

impl CodePage {
    pub const ALL: [CodePage; 3] = [CodePage::Windows1252, CodePage::Latin1, CodePage::Ascii];

    /// Numeric code page identifier as used by Windows
    pub const fn id(&self) -> CodePageId {
        match self {
            CodePage::Windows1252 => 1252,
            CodePage::Latin1 => 28591,
            CodePage::Ascii => 20127,
        }
    }

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            CodePage::Windows1252 => "windows-1252",
            CodePage::Latin1 => "latin1",
            CodePage::Ascii => "ascii",
        }
    }

    pub fn from_id(id: CodePageId) -> Option<Self> {
        Self::ALL.iter().copied().find(|cp| cp.id() == id)
    }

    /// Maps a byte to its UTF-16 code unit, `None` if the byte is undefined
    pub fn decode_byte(&self, byte: u8) -> Option<u16> {
        match self {
            CodePage::Latin1 => Some(u16::from(byte)),
            CodePage::Ascii => byte.is_ascii().then_some(u16::from(byte)),
            CodePage::Windows1252 => match byte {
                0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(byte - 0x80)],
                _ => Some(u16::from(byte)),
            },
        }
    }

    /// Maps a character to its byte, `None` if it is outside the repertoire
    pub fn encode_char(&self, c: char) -> Option<u8> {
        let scalar = u32::from(c);
        match self {
            CodePage::Latin1 => u8::try_from(scalar).ok(),
            CodePage::Ascii => c.is_ascii().then_some(scalar as u8),
            CodePage::Windows1252 => match scalar {
                0x80..=0x9F => None,
                0x00..=0xFF => Some(scalar as u8),
                _ => u16::try_from(scalar)
                    .ok()
                    .and_then(|unit| WINDOWS_1252_REVERSE.get(&unit).copied()),
            },
        }
    }

    /// Whether the character round-trips through this code page
    pub fn contains(&self, c: char) -> bool {
        self.encode_char(c).is_some()
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodePage {
    type Err = ConversionError;

    /// Accepts the canonical name, common aliases or the numeric identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Ok(id) = name.parse::<CodePageId>() {
            return CodePage::from_id(id).ok_or_else(|| ConversionError::unknown_code_page(s.trim()));
        }

        match name.as_str() {
            "windows-1252" | "windows1252" | "cp1252" | "ansi" => Ok(CodePage::Windows1252),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(CodePage::Latin1),
            "ascii" | "us-ascii" => Ok(CodePage::Ascii),
            _ => Err(ConversionError::unknown_code_page(s.trim())),
        }
    }
}
