//! Conversion between wide text and single-byte code page text
//!
//! Both directions are lossy-but-total: characters the code page cannot
//! represent become the substitution character, and nothing here returns
//! an error once a codec has been built.

use super::codepage::CodePage;
use crate::config::CodecConfig;
use crate::core::types::{ConversionError, ConversionResult, EncodedText, WideText};
use tracing::{debug, trace};

/// Substitution character used when none is configured
pub const DEFAULT_SUBSTITUTION: char = '?';

/// A code page plus the character used for unmappable positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    code_page: CodePage,
    substitution: char,
}

impl Default for TextCodec {
    fn default() -> Self {
        TextCodec::new(CodePage::default())
    }
}

impl TextCodec {
    pub const fn new(code_page: CodePage) -> Self {
        TextCodec {
            code_page,
            substitution: DEFAULT_SUBSTITUTION,
        }
    }

    /// Replaces the substitution character
    ///
    /// The character must be ASCII so that it encodes to one byte in every
    /// supported code page.
    pub fn with_substitution(self, substitution: char) -> ConversionResult<Self> {
        if !substitution.is_ascii() || substitution == '\0' {
            return Err(ConversionError::InvalidSubstitution(substitution.to_string()));
        }
        Ok(TextCodec {
            substitution,
            ..self
        })
    }

    /// Builds a codec from the `[codec]` configuration section
    pub fn from_config(config: &CodecConfig) -> ConversionResult<Self> {
        let code_page: CodePage = config.code_page.parse()?;
        let substitution = parse_substitution(&config.substitution)?;
        debug!(
            code_page = %code_page,
            substitution = %substitution,
            "text codec configured"
        );
        TextCodec::new(code_page).with_substitution(substitution)
    }

    pub const fn code_page(&self) -> CodePage {
        self.code_page
    }

    pub const fn substitution(&self) -> char {
        self.substitution
    }

    /// Converts wide text to code page bytes
    ///
    /// An absent input yields an empty sequence. Otherwise the output holds
    /// exactly one byte per character: a surrogate pair is one character,
    /// and an unpaired surrogate is one unmappable character.
    pub fn wide_to_bytes(&self, input: Option<&[u16]>) -> EncodedText {
        let Some(units) = input else {
            return EncodedText::new();
        };

        let chars = char::decode_utf16(units.iter().copied()).map(Result::ok);
        self.encode_chars(chars, units.len())
    }

    /// Converts code page bytes to wide text
    ///
    /// Decoding stops at the first zero byte. Bytes the code page leaves
    /// undefined decode to the substitution character.
    pub fn bytes_to_wide(&self, input: &[u8]) -> WideText {
        let mut substituted = 0usize;
        let units: Vec<u16> = input
            .iter()
            .take_while(|&&byte| byte != 0)
            .map(|&byte| {
                self.code_page.decode_byte(byte).unwrap_or_else(|| {
                    substituted += 1;
                    self.substitution as u16
                })
            })
            .collect();

        if substituted > 0 {
            trace!(
                code_page = %self.code_page,
                substituted,
                "undefined bytes replaced while decoding"
            );
        }
        WideText(units)
    }

    /// Encodes a Rust string, one byte per character
    pub fn encode_str(&self, s: &str) -> EncodedText {
        self.encode_chars(s.chars().map(Some), s.len())
    }

    /// Decodes code page bytes into a Rust string, stopping at the first zero
    pub fn decode_to_string(&self, bytes: &[u8]) -> String {
        // Every supported code page decodes into the BMP outside the surrogate range.
        String::from_utf16_lossy(&self.bytes_to_wide(bytes))
    }

    /// Whether every character of `s` encodes without substitution
    pub fn is_representable(&self, s: &str) -> bool {
        s.chars().all(|c| self.code_page.contains(c))
    }

    fn encode_chars<I>(&self, chars: I, capacity: usize) -> EncodedText
    where
        I: Iterator<Item = Option<char>>,
    {
        let replacement = self.substitution as u8;
        let mut substituted = 0usize;
        let mut bytes = Vec::with_capacity(capacity);
        for c in chars {
            match c.and_then(|c| self.code_page.encode_char(c)) {
                Some(byte) => bytes.push(byte),
                None => {
                    substituted += 1;
                    bytes.push(replacement);
                }
            }
        }

        if substituted > 0 {
            trace!(
                code_page = %self.code_page,
                substituted,
                total = bytes.len(),
                "unmappable characters replaced while encoding"
            );
        }
        EncodedText(bytes)
    }
}

/// Parses a configured substitution string; it must be a single ASCII character
pub fn parse_substitution(value: &str) -> ConversionResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '\0' => Ok(c),
        _ => Err(ConversionError::InvalidSubstitution(value.to_string())),
    }
}

/// Converts wide text with the default codec (Windows-1252, `?`)
pub fn wide_to_bytes(input: Option<&[u16]>) -> EncodedText {
    TextCodec::default().wide_to_bytes(input)
}

/// Converts code page bytes with the default codec (Windows-1252, `?`)
pub fn bytes_to_wide(input: &[u8]) -> WideText {
    TextCodec::default().bytes_to_wide(input)
}
