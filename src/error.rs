//! Error types for TOON serialization and deserialization.
//!
//! This module provides structured error reporting with contextual information
//! to help diagnose and fix TOON format issues.
//!
//! ## Error Categories
//!
//! - **Structural errors**: always fatal, regardless of [`crate::DecodeOptions::strict`]
//!   (unterminated strings, invalid escapes, missing colons, malformed headers,
//!   length/row mismatches).
//! - **Strict-mode errors**: whitespace- and length-tightness checks that are only
//!   enforced when `strict` is `true` (tabs in indentation, non-multiple indentation,
//!   blank lines inside arrays, extra rows/items past the declared length).
//! - **Serde glue errors**: `TypeMismatch`, `UnsupportedType`, `Custom`, `Message` —
//!   raised by the `Serializer`/`Deserializer` impls rather than the line-oriented core.
//!
//! Every decode error that originates from a specific line carries its 1-based
//! line number.
//!
//! ## Examples
//!
//! ```rust
//! use toonrs::{from_str, Error, ToonValue};
//!
//! let result: Result<ToonValue, Error> = from_str("invalid: [malformed");
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error as ThisError;

/// Represents all possible errors that can occur during TOON serialization/deserialization.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// The input contained no content at all.
    #[error("empty input: nothing to decode")]
    EmptyInput,

    /// A quoted string/key was opened but never closed.
    #[error("line {line}: unterminated string: missing closing quote")]
    UnterminatedString { line: usize },

    /// A backslash was followed by a character that is not one of `n t r \\ \"`.
    #[error("line {line}: invalid escape sequence '\\{found}'")]
    InvalidEscape { line: usize, found: char },

    /// A key line had no colon separating key from value.
    #[error("line {line}: missing colon after key")]
    MissingColon { line: usize },

    /// An array header (`[N]`, `[#N]{fields}:`, ...) could not be parsed.
    #[error("line {line}: invalid array header: {msg}")]
    InvalidHeader { line: usize, msg: String },

    /// The number of decoded elements did not match the header's declared length.
    #[error("line {line}: length mismatch: declared {expected}, found {found}")]
    LengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A tabular row did not have exactly as many columns as the header's field list.
    #[error("line {line}: row width mismatch: expected {expected} columns, found {found}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// (strict) Leading whitespace was not an exact multiple of the configured indent.
    #[error("line {line}: indentation ({found} spaces) is not a multiple of the configured indent ({unit})")]
    IndentationNotMultiple {
        line: usize,
        found: usize,
        unit: usize,
    },

    /// (strict) A tab character appeared within leading whitespace.
    #[error("line {line}: tab character found in indentation")]
    TabInIndentation { line: usize },

    /// (strict) A blank line appeared between the first and last row/item of an array.
    #[error("line {line}: blank line inside array body")]
    BlankLineInsideArray { line: usize },

    /// (strict) More tabular rows were present than the header declared.
    #[error("line {line}: extra rows found after declared length")]
    ExtraRowsAfterDeclaredLength { line: usize },

    /// (strict) More list items were present than the header declared.
    #[error("line {line}: extra items found after declared length")]
    ExtraItemsAfterDeclaredLength { line: usize },

    /// Content followed the closing quote of a quoted token on the same line.
    #[error("line {line}: unexpected characters after closing quote")]
    UnexpectedCharactersAfterQuote { line: usize },

    /// Type mismatch during deserialization into a concrete Rust type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A value could not be represented (e.g. a map key that is not a string).
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised by serde during (de)serialization.
    #[error("{0}")]
    Custom(String),

    /// Generic message, used by `serde::de::Error::custom` call sites without
    /// more specific context.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// The 1-based line number this error is anchored to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnterminatedString { line }
            | Error::InvalidEscape { line, .. }
            | Error::MissingColon { line }
            | Error::InvalidHeader { line, .. }
            | Error::LengthMismatch { line, .. }
            | Error::RowWidthMismatch { line, .. }
            | Error::IndentationNotMultiple { line, .. }
            | Error::TabInIndentation { line }
            | Error::BlankLineInsideArray { line }
            | Error::ExtraRowsAfterDeclaredLength { line }
            | Error::ExtraItemsAfterDeclaredLength { line }
            | Error::UnexpectedCharactersAfterQuote { line } => Some(*line),
            _ => None,
        }
    }

    /// A short actionable hint for common mistakes, keyed off the error kind.
    /// Metadata only — never part of the correctness surface.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::TabInIndentation { .. } => Some("replace tabs with spaces, or set strict: false"),
            Error::IndentationNotMultiple { .. } => {
                Some("align indentation to a multiple of the configured indent width")
            }
            Error::BlankLineInsideArray { .. }
            | Error::ExtraRowsAfterDeclaredLength { .. }
            | Error::ExtraItemsAfterDeclaredLength { .. } => {
                Some("check the declared array length, or set strict: false")
            }
            Error::LengthMismatch { .. } | Error::RowWidthMismatch { .. } => {
                Some("the declared length must equal the number of rows/items actually present")
            }
            Error::InvalidEscape { .. } => Some(r#"only \n \t \r \\ \" are recognized escapes"#),
            Error::MissingColon { .. } => Some("every key must be followed by ':'"),
            _ => None,
        }
    }

    pub fn custom_msg<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn unsupported_type(msg: impl Into<String>) -> Self {
        Error::UnsupportedType(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_reported_for_located_errors() {
        let err = Error::MissingColon { line: 7 };
        assert_eq!(err.line(), Some(7));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn unlocated_errors_have_no_line() {
        assert_eq!(Error::EmptyInput.line(), None);
    }

    #[test]
    fn suggestions_are_present_for_strict_mode_errors() {
        assert!(Error::TabInIndentation { line: 1 }.suggestion().is_some());
    }
}
