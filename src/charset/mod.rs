//! Charset conversion subsystem.
//!
//! # Data Flow
//! ```text
//! Request text (headers, body)
//!     → converter.rs (encode into the configured charset)
//!     → bytes handed to the dump sink verbatim
//! ```
//!
//! # Design Decisions
//! - The charset is a closed enum, validated once when configuration is parsed
//! - Conversion output is a byte sequence, never reinterpreted as text
//! - Unrepresentable input falls back to the original UTF-8 bytes

pub mod converter;

pub use converter::{convert, try_encode, Charset, UnsupportedCharset};
