//! Output text encodings.
//!
//! Rendered tables are plain `String`s; this module turns them into the
//! bytes of the configured encoding and back. A character the encoding
//! cannot represent becomes a single `?`, so every line keeps its width.

use encoding_rs::{Encoder, EncoderResult, Encoding, REPLACEMENT, UTF_16BE, UTF_16LE};

use crate::error::ConfigurationError;

const SUBSTITUTE: u8 = b'?';

/// Resolve an encoding label such as `"UTF-8"`, `"latin1"` or `"UTF-16BE"`.
///
/// Labels that only name a decoder (`replacement`, used for ISO-2022-KR and
/// friends) are rejected.
pub(crate) fn resolve(label: &str) -> Result<&'static Encoding, ConfigurationError> {
    match Encoding::for_label(label.trim().as_bytes()) {
        Some(encoding) if encoding != REPLACEMENT => Ok(encoding),
        _ => Err(ConfigurationError::UnsupportedEncoding(label.to_string())),
    }
}

/// Encode `text`, returning the bytes and the number of characters that
/// were replaced by `?`.
pub(crate) fn encode(encoding: &'static Encoding, text: &str) -> (Vec<u8>, usize) {
    if encoding == UTF_16LE {
        return (text.encode_utf16().flat_map(u16::to_le_bytes).collect(), 0);
    }
    if encoding == UTF_16BE {
        return (text.encode_utf16().flat_map(u16::to_be_bytes).collect(), 0);
    }
    encode_with_substitute(&mut encoding.new_encoder(), text)
}

/// Decode bytes produced by [`encode`] with the same encoding.
pub(crate) fn decode(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    text.into_owned()
}

fn encode_with_substitute(encoder: &mut Encoder, text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut buffer = [0u8; 1024];
    let mut input = text;
    let mut substituted = 0;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(input, &mut buffer, true);
        bytes.extend_from_slice(&buffer[..written]);
        input = &input[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => {
                bytes.push(SUBSTITUTE);
                substituted += 1;
            }
        }
    }
    (bytes, substituted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};

    #[test]
    fn test_resolve_labels() {
        assert_eq!(resolve("UTF-8").unwrap(), UTF_8);
        assert_eq!(resolve(" latin1 ").unwrap(), WINDOWS_1252);
        assert_eq!(resolve("utf-16").unwrap(), UTF_16LE);
        assert_eq!(resolve("UTF-16BE").unwrap(), UTF_16BE);
    }

    #[test]
    fn test_resolve_rejects_unknown_and_decode_only() {
        assert!(matches!(
            resolve("no-such-charset"),
            Err(ConfigurationError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            resolve("iso-2022-kr"),
            Err(ConfigurationError::UnsupportedEncoding(ref label)) if label == "iso-2022-kr"
        ));
    }

    #[test]
    fn test_unmappable_chars_become_one_question_mark() {
        let (bytes, substituted) = encode(WINDOWS_1252, "╔═é╗");
        assert_eq!(bytes, [b'?', b'?', 0xE9, b'?']);
        assert_eq!(substituted, 3);
    }

    #[test]
    fn test_utf8_passes_through() {
        let (bytes, substituted) = encode(UTF_8, "║ a │");
        assert_eq!(bytes, "║ a │".as_bytes());
        assert_eq!(substituted, 0);
    }

    #[test]
    fn test_utf16_byte_orders() {
        let (le, _) = encode(UTF_16LE, "+║");
        assert_eq!(le, [0x2B, 0x00, 0x51, 0x25]);
        let (be, _) = encode(UTF_16BE, "+║");
        assert_eq!(be, [0x00, 0x2B, 0x25, 0x51]);
        assert_eq!(decode(UTF_16LE, &le), "+║");
        assert_eq!(decode(UTF_16BE, &be), "+║");
    }

    #[test]
    fn test_long_text_spans_several_buffers() {
        let text = "═".repeat(2000);
        let (bytes, substituted) = encode(WINDOWS_1252, &text);
        assert_eq!(bytes.len(), 2000);
        assert_eq!(substituted, 2000);
        assert_eq!(decode(WINDOWS_1252, &bytes), "?".repeat(2000));
    }
}
