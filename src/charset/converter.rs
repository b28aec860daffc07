//! Output charset selection and best-effort transcoding.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{Encoding, EUC_KR, UTF_8};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Charset that dumped request text is rendered in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Pass text through unchanged.
    #[default]
    Utf8,
    /// Legacy Korean encoding: ASCII, KS X 1001 and the UHC extension syllables.
    Euckr,
}

impl Charset {
    /// Configuration name of the charset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Charset::Utf8 => "utf8",
            Charset::Euckr => "euckr",
        }
    }

    /// Encoder backing this charset.
    pub fn encoding(&self) -> &'static Encoding {
        match self {
            Charset::Utf8 => UTF_8,
            Charset::Euckr => EUC_KR,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A charset name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported charset: {0} (expected utf8 or euckr)")]
pub struct UnsupportedCharset(pub String);

impl FromStr for Charset {
    type Err = UnsupportedCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "utf8" => Ok(Charset::Utf8),
            "euckr" => Ok(Charset::Euckr),
            other => Err(UnsupportedCharset(other.to_string())),
        }
    }
}

/// Encode `text` into `charset`.
///
/// Returns `None` if any character has no representation in the target
/// charset. UTF-8 output always borrows the input.
pub fn try_encode(text: &str, charset: Charset) -> Option<Cow<'_, [u8]>> {
    let (bytes, _, had_unmappable) = charset.encoding().encode(text);
    if had_unmappable {
        None
    } else {
        Some(bytes)
    }
}

/// Encode `text` into `charset`, falling back to the original UTF-8 bytes
/// when the text is not fully representable.
pub fn convert(text: &str, charset: Charset) -> Cow<'_, [u8]> {
    match try_encode(text, charset) {
        Some(encoded) => encoded,
        None => {
            tracing::debug!(%charset, "Unrepresentable characters; keeping UTF-8");
            Cow::Borrowed(text.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_is_identity() {
        for text in ["", "hello", "한글", "mixed 안녕 🦀", "{accept: [*/*]}"] {
            let out = convert(text, Charset::Utf8);
            assert!(matches!(out, Cow::Borrowed(_)));
            assert_eq!(out.as_ref(), text.as_bytes());
        }
    }

    #[test]
    fn test_euckr_encodes_hangul() {
        assert_eq!(convert("한글", Charset::Euckr).as_ref(), &[0xC7, 0xD1, 0xB1, 0xDB]);
        assert_eq!(convert("안녕", Charset::Euckr).as_ref(), &[0xBE, 0xC8, 0xB3, 0xE7]);
    }

    #[test]
    fn test_euckr_keeps_ascii() {
        let text = "POST /anything {\"k\": 1}";
        assert_eq!(convert(text, Charset::Euckr).as_ref(), text.as_bytes());
    }

    #[test]
    fn test_euckr_mixed_text() {
        let out = convert("hi 한", Charset::Euckr);
        assert_eq!(out.as_ref(), &[b'h', b'i', b' ', 0xC7, 0xD1]);
    }

    #[test]
    fn test_euckr_falls_back_on_unmappable() {
        let text = "안녕 🦀";
        assert!(try_encode(text, Charset::Euckr).is_none());
        assert_eq!(convert(text, Charset::Euckr).as_ref(), text.as_bytes());
    }

    #[test]
    fn test_parse_charset_names() {
        assert_eq!("utf8".parse::<Charset>(), Ok(Charset::Utf8));
        assert_eq!("euckr".parse::<Charset>(), Ok(Charset::Euckr));
        assert_eq!(
            "klingon".parse::<Charset>(),
            Err(UnsupportedCharset("klingon".to_string()))
        );
        // Names are exact; no case folding or aliases.
        assert!("EUC-KR".parse::<Charset>().is_err());
    }
}
