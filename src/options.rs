//! Configuration options for TOON encoding and decoding.
//!
//! This module provides the option types both directions are configured with:
//!
//! - [`ToonOptions`]: encoder configuration (indent, delimiter, length marker)
//! - [`DecodeOptions`]: decoder configuration (indent, strict mode)
//! - [`Delimiter`]: choice of delimiter for arrays and tables (comma, tab, or pipe)
//!
//! ## Examples
//!
//! ```rust
//! use toonrs::{ToonOptions, Delimiter, to_string_with_options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! // Use pipe delimiter
//! let options = ToonOptions::new().with_delimiter(Delimiter::Pipe);
//! let toon = to_string_with_options(&data, options).unwrap();
//!
//! // Use length marker '#' for arrays
//! let options = ToonOptions::new().with_length_marker('#');
//! let toon = to_string_with_options(&vec![1, 2, 3], options).unwrap();
//! // Output: "[#3]: 1,2,3"
//! ```

/// Delimiter choice for TOON arrays and tables.
///
/// TOON supports multiple delimiters to optimize for different contexts:
///
/// - **Comma**: Default, most compact, not encoded in the header.
/// - **Tab**: Best for TSV-like output, encoded in the header as a literal tab.
/// - **Pipe**: Readable for markdown-style tables, encoded as `|`.
///
/// # Examples
///
/// ```rust
/// use toonrs::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Returns the delimiter as a single `char`.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Recovers a delimiter from the header's trailing suffix character, if any.
    pub(crate) fn from_header_suffix(c: char) -> Option<Delimiter> {
        match c {
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Configuration options for TOON encoding.
///
/// Controls formatting aspects like indentation, delimiters, and length markers.
///
/// # Examples
///
/// ```rust
/// use toonrs::{ToonOptions, Delimiter};
///
/// let options = ToonOptions::new();
///
/// let options = ToonOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_length_marker('#')
///     .with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct ToonOptions {
    pub indent: usize,
    pub delimiter: Delimiter,
    pub length_marker: Option<char>,
}

impl Default for ToonOptions {
    fn default() -> Self {
        ToonOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: None,
        }
    }
}

impl ToonOptions {
    /// Creates default options (comma delimiter, no length marker, 2-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toonrs::ToonOptions;
    ///
    /// let options = ToonOptions::new();
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level). Default is 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toonrs::ToonOptions;
    ///
    /// let options = ToonOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter for arrays and tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toonrs::{ToonOptions, Delimiter};
    ///
    /// let options = ToonOptions::new().with_delimiter(Delimiter::Pipe);
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets an optional length marker character for arrays.
    ///
    /// When set, array lengths are prefixed with this character (e.g., `[#3]` instead of `[3]`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toonrs::ToonOptions;
    ///
    /// let options = ToonOptions::new().with_length_marker('#');
    /// ```
    #[must_use]
    pub fn with_length_marker(mut self, marker: char) -> Self {
        self.length_marker = Some(marker);
        self
    }
}

/// Configuration options for TOON decoding.
///
/// # Examples
///
/// ```rust
/// use toonrs::DecodeOptions;
///
/// let options = DecodeOptions::new().with_strict(false).with_indent(4);
/// assert!(!options.strict);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    pub indent: usize,
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected indent width (spaces per depth level). Must match the
    /// producer's indent to decode unambiguously. Default is 2.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables strict mode (whitespace-tightness and
    /// length-tightness checks). Default is `true`.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let enc = ToonOptions::default();
        assert_eq!(enc.indent, 2);
        assert_eq!(enc.delimiter, Delimiter::Comma);
        assert_eq!(enc.length_marker, None);

        let dec = DecodeOptions::default();
        assert_eq!(dec.indent, 2);
        assert!(dec.strict);
    }

    #[test]
    fn builder_methods_chain() {
        let opts = ToonOptions::new()
            .with_indent(4)
            .with_delimiter(Delimiter::Pipe)
            .with_length_marker('#');
        assert_eq!(opts.indent, 4);
        assert_eq!(opts.delimiter, Delimiter::Pipe);
        assert_eq!(opts.length_marker, Some('#'));
    }
}
