//! Null-terminated buffers for native string interfaces

use super::codec::TextCodec;
use crate::core::types::{EncodedText, WideText};

/// Convert a Rust string to a null-terminated wide string (UTF-16)
pub fn string_to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Convert a wide string (UTF-16) to a Rust string, stopping at the first null
pub fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}

/// Copy encoded text into a null-terminated native buffer
pub fn to_nul_terminated(text: &EncodedText) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(text.len() + 1);
    buffer.extend_from_slice(text.as_bytes());
    buffer.push(0);
    buffer
}

/// Convert a wide string pointer to a Rust string
///
/// # Safety
/// The pointer must be null or point to a null-terminated UTF-16 string
pub unsafe fn wide_ptr_to_string(ptr: *const u16) -> String {
    if ptr.is_null() {
        return String::new();
    }

    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }

    let slice = std::slice::from_raw_parts(ptr, len);
    wide_to_string(slice)
}

/// Decode a null-terminated code page string owned by native code
///
/// # Safety
/// The pointer must be null or point to a null-terminated byte string
pub unsafe fn bytes_ptr_to_wide(codec: &TextCodec, ptr: *const u8) -> WideText {
    if ptr.is_null() {
        return WideText::new();
    }

    let bytes = std::ffi::CStr::from_ptr(ptr.cast()).to_bytes();
    codec.bytes_to_wide(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::CodePage;

    #[test]
    fn test_string_to_wide() {
        let wide = string_to_wide("Hello");
        assert_eq!(wide, vec![72, 101, 108, 108, 111, 0]);

        let empty = string_to_wide("");
        assert_eq!(empty, vec![0]);
    }

    #[test]
    fn test_wide_to_string() {
        let wide = vec![72, 101, 108, 108, 111, 0];
        assert_eq!(wide_to_string(&wide), "Hello");

        let no_null = vec![72, 101, 108, 108, 111];
        assert_eq!(wide_to_string(&no_null), "Hello");

        let embedded = vec![72, 0, 105];
        assert_eq!(wide_to_string(&embedded), "H");
    }

    #[test]
    fn test_unicode_strings() {
        let unicode_str = "Hello 世界 🌍";
        let wide = string_to_wide(unicode_str);
        let back = wide_to_string(&wide);
        assert_eq!(back, unicode_str);
    }

    #[test]
    fn test_to_nul_terminated() {
        let text = EncodedText::from(b"AB".to_vec());
        assert_eq!(to_nul_terminated(&text), vec![65, 66, 0]);
        assert_eq!(to_nul_terminated(&EncodedText::new()), vec![0]);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Unsafe pointer operations")]
    fn test_wide_ptr_to_string() {
        unsafe {
            assert_eq!(wide_ptr_to_string(std::ptr::null()), "");
        }

        let wide_str = vec![72u16, 101, 108, 108, 111, 0]; // "Hello\0"
        unsafe {
            assert_eq!(wide_ptr_to_string(wide_str.as_ptr()), "Hello");
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "Unsafe pointer operations")]
    fn test_bytes_ptr_to_wide() {
        let codec = TextCodec::new(CodePage::Windows1252);
        unsafe {
            assert!(bytes_ptr_to_wide(&codec, std::ptr::null()).is_empty());
        }

        let native = to_nul_terminated(&codec.encode_str("caf\u{e9}"));
        let decoded = unsafe { bytes_ptr_to_wide(&codec, native.as_ptr()) };
        assert_eq!(decoded.to_string(), "café");
    }
}
