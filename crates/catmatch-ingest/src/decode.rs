//! Byte decoding for exported CSV files.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decoded file contents and the encoding that produced them.
#[derive(Debug)]
pub struct DecodedText<'a> {
    pub text: Cow<'a, str>,
    pub encoding: &'static Encoding,
}

/// Decodes CSV bytes as UTF-8, falling back to Windows-1252.
///
/// A UTF-8 BOM is stripped. UTF-16 BOMs are rejected.
pub fn decode_bytes<'a>(bytes: &'a [u8], path: &Path) -> Result<DecodedText<'a>> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(DecodedText {
            text: Cow::Borrowed(text),
            encoding: UTF_8,
        }),
        Err(_) => {
            tracing::warn!(
                path = %path.display(),
                "file is not valid UTF-8, decoding as Windows-1252"
            );
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            Ok(DecodedText {
                text,
                encoding: WINDOWS_1252,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let decoded = decode_bytes("Energía".as_bytes(), Path::new("a.csv")).unwrap();
        assert_eq!(decoded.text, "Energía");
        assert_eq!(decoded.encoding, UTF_8);
    }

    #[test]
    fn test_decode_strips_bom() {
        let decoded = decode_bytes(b"\xEF\xBB\xBFID;CATEGORY", Path::new("a.csv")).unwrap();
        assert_eq!(decoded.text, "ID;CATEGORY");
    }

    #[test]
    fn test_decode_windows_1252() {
        // "Energía" with 0xED for 'í'
        let decoded = decode_bytes(b"Energ\xEDa", Path::new("a.csv")).unwrap();
        assert_eq!(decoded.text, "Energía");
        assert_eq!(decoded.encoding, WINDOWS_1252);
    }

    #[test]
    fn test_decode_rejects_utf16() {
        let result = decode_bytes(&[0xFF, 0xFE, 0x41, 0x00], Path::new("a.csv"));
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
