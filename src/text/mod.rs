//! Text marshaling between wide strings and single-byte code pages
//!
//! [`TextCodec`] pairs a [`CodePage`] table with a substitution character.
//! The free functions [`wide_to_bytes`] and [`bytes_to_wide`] use the default
//! codec, Windows-1252 with `?` substitution, so their output does not
//! depend on the locale of the host.

pub mod codec;
pub mod codepage;
pub mod marshal;

// Re-export commonly used items
pub use codec::{bytes_to_wide, wide_to_bytes, TextCodec, DEFAULT_SUBSTITUTION};
pub use codepage::CodePage;
pub use marshal::{string_to_wide, to_nul_terminated, wide_to_string};
