//! Owned text buffers on both sides of the code page boundary

use super::error::ConversionResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Text as UTF-16 code units, the platform wide representation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WideText(pub Vec<u16>);

impl WideText {
    /// Creates an empty wide text
    pub const fn new() -> Self {
        WideText(Vec::new())
    }

    /// Returns the code units as a slice
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    /// Number of Unicode characters; unpaired surrogates count as one each
    pub fn char_count(&self) -> usize {
        char::decode_utf16(self.0.iter().copied()).count()
    }

    /// Decodes into a Rust string, replacing unpaired surrogates with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }

    /// Consumes the text and returns the raw code units
    pub fn into_vec(self) -> Vec<u16> {
        self.0
    }
}

impl Deref for WideText {
    type Target = [u16];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for WideText {
    fn from(s: &str) -> Self {
        WideText(s.encode_utf16().collect())
    }
}

impl From<Vec<u16>> for WideText {
    fn from(units: Vec<u16>) -> Self {
        WideText(units)
    }
}

impl fmt::Display for WideText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Text as single-byte code units of some code page
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedText(pub Vec<u8>);

impl EncodedText {
    /// Creates an empty encoded text
    pub const fn new() -> Self {
        EncodedText(Vec::new())
    }

    /// Returns the bytes as a slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering of the bytes
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parses hex digits back into bytes; surrounding whitespace is ignored
    pub fn from_hex(input: &str) -> ConversionResult<Self> {
        let bytes = hex::decode(input.trim())?;
        Ok(EncodedText(bytes))
    }

    /// Consumes the text and returns the raw bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for EncodedText {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for EncodedText {
    fn from(bytes: Vec<u8>) -> Self {
        EncodedText(bytes)
    }
}

impl AsRef<[u8]> for EncodedText {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
