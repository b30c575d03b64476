//! # toonrs
//!
//! A Serde-compatible serialization library for the TOON (Token-Oriented Object Notation) format.
//!
//! ## What is TOON?
//!
//! TOON is a compact, human-readable data format specifically designed for efficient communication
//! with Large Language Models (LLMs). It achieves 30-60% fewer tokens than equivalent JSON while
//! maintaining readability and structure.
//!
//! ## Key Features
//!
//! - **Token-Efficient**: Minimalist syntax reduces token count by eliminating unnecessary braces,
//!   brackets, and quotes
//! - **Tabular Arrays**: Homogeneous object arrays serialize as compact tables with headers
//! - **Serde Compatible**: Works seamlessly with existing Rust types via `#[derive(Serialize, Deserialize)]`
//! - **Type Safe**: Statically typed with comprehensive error reporting
//! - **No Unsafe Code**: Written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! toonrs = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toonrs::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! // Serialize to TOON format
//! let toon_string = to_string(&user).unwrap();
//! // Output: "id: 123\nname: Alice\nactive: true"
//!
//! // Deserialize back
//! let user_back: User = from_str(&toon_string).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Working with Arrays (Tabular Format)
//!
//! Arrays of homogeneous objects automatically serialize as space-efficient tables:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toonrs::to_string;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//!
//! let toon = to_string(&products).unwrap();
//! // Output: "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99"
//! ```
//!
//! ### Dynamic Values with the toon! Macro
//!
//! ```rust
//! use toonrs::{toon, ToonValue};
//!
//! let data = toon!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde", "llm"]
//! });
//!
//! if let ToonValue::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All array indexing is bounds-checked
//! - Proper error propagation with `Result` types
//! - No panics in public API (except for logic errors that indicate bugs)
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - basic serialization
//! - **`macro.rs`** - building values with the toon! macro
//! - **`tabular_arrays.rs`** - TOON's killer feature for repeated structures
//! - **`dynamic_values.rs`** - working with ToonValue dynamically
//! - **`custom_options.rs`** - customizing delimiters and formatting
//! - **`token_efficiency.rs`** - TOON vs JSON comparison

pub mod de;
pub mod error;
pub mod lex;
pub mod macros;
pub mod map;
pub mod normalize;
pub mod options;
pub mod scanner;
pub mod ser;
pub mod value;

pub use de::ValueDeserializer as Deserializer;
pub use error::{Error, Result};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, ToonOptions};
pub use ser::Serializer;
pub use value::ToonValue;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a TOON string.
///
/// # Examples
///
/// ```rust
/// use toonrs::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let toon = to_string(&point).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. unsupported types).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, ToonOptions::default())
}

/// Alias for [`to_string`]. TOON has exactly one textual form — it is always
/// line-structured with explicit indentation — so there is no separate
/// "compact" rendering to contrast it with.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string(value)
}

/// Serialize any `T: Serialize` to a TOON string with custom options.
///
/// Allows customization of delimiters, indentation, and length markers.
///
/// # Examples
///
/// ```rust
/// use toonrs::{to_string_with_options, ToonOptions, Delimiter};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let options = ToonOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_length_marker('#');
/// let toon = to_string_with_options(&point, options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: ToonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let built = crate::ser::to_toon_value(value)?;
    Ok(crate::ser::encode_value(&built, &options))
}

/// Convert any `T: Serialize` to a `ToonValue`.
///
/// Useful for working with TOON data dynamically when the structure isn't known at compile time.
///
/// # Examples
///
/// ```rust
/// use toonrs::{to_value, ToonValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: ToonValue = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<ToonValue>
where
    T: ?Sized + Serialize,
{
    crate::ser::to_toon_value(value)
}

/// Deserialize a `ToonValue` into a `T: Deserialize`, without going through text.
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: ToonValue) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    crate::de::from_toon_value(value)
}

/// Serialize any `T: Serialize` to a writer in TOON format.
///
/// # Examples
///
/// ```rust
/// use toonrs::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &point).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, ToonOptions::default())
}

/// Serialize any `T: Serialize` to a writer in TOON format with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: ToonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toon_string = to_string_with_options(value, options)?;
    writer
        .write_all(toon_string.as_bytes())
        .map_err(|e| Error::io(e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of TOON text, using
/// default [`DecodeOptions`] (2-space indent, strict mode on).
///
/// # Examples
///
/// ```rust
/// use toonrs::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon = "x: 1\ny: 2";
/// let point: Point = from_str(toon).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOON format or cannot be deserialized to type `T`.
/// Decode errors carry a 1-based line number via [`Error::line`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    from_str_with_options(s, DecodeOptions::default())
}

/// Deserialize an instance of type `T` from a string of TOON text with custom
/// [`DecodeOptions`].
///
/// # Errors
///
/// Returns an error if the input is not valid TOON format or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: DecodeOptions) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let value = crate::de::parse(s, &options)?;
    crate::de::from_toon_value(value)
}

/// Deserialize an instance of type `T` from an I/O stream of TOON.
///
/// # Examples
///
/// ```rust
/// use toonrs::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon_bytes = b"x: 1\ny: 2";
/// let cursor = Cursor::new(toon_bytes);
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid TOON,
/// or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    from_reader_with_options(&mut reader, DecodeOptions::default())
}

/// Deserialize an instance of type `T` from an I/O stream of TOON with custom
/// [`DecodeOptions`].
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid TOON,
/// or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R, T>(mut reader: R, options: DecodeOptions) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(e.to_string()))?;
    from_str_with_options(&string, options)
}

/// Deserialize an instance of type `T` from bytes of TOON text.
///
/// # Examples
///
/// ```rust
/// use toonrs::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon_bytes = b"x: 1\ny: 2";
/// let point: Point = from_slice(toon_bytes).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON format,
/// or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    from_slice_with_options(v, DecodeOptions::default())
}

/// Deserialize an instance of type `T` from bytes of TOON text with custom
/// [`DecodeOptions`].
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON format,
/// or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options<T>(v: &[u8], options: DecodeOptions) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom_msg(e))?;
    from_str_with_options(s, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn round_trips_a_struct() {
        let point = Point { x: 1, y: 2 };
        let toon = to_string(&point).unwrap();
        let point_back: Point = from_str(&toon).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn round_trips_a_struct_with_an_array_field() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let toon = to_string(&user).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn to_value_builds_an_object() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            ToonValue::Object(obj) => {
                assert_eq!(obj.get("x").and_then(|v| v.as_i64()), Some(1));
                assert_eq!(obj.get("y").and_then(|v| v.as_i64()), Some(2));
            }
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn round_trips_a_vec() {
        let numbers = vec![1, 2, 3, 4, 5];
        let toon = to_string(&numbers).unwrap();
        let numbers_back: Vec<i32> = from_str(&toon).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn custom_options_round_trip() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let options = ToonOptions::new()
            .with_delimiter(Delimiter::Tab)
            .with_length_marker('#');

        let toon = to_string_with_options(&user, options).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn strict_decode_rejects_tab_indentation() {
        let err = from_str::<Point>("x: 1\n\ty: 2").unwrap_err();
        assert!(matches!(err, Error::TabInIndentation { .. }));
    }

    #[test]
    fn non_strict_decode_tolerates_loose_indentation() {
        let point: Point = from_str_with_options(
            "x: 1\n y: 2",
            DecodeOptions::default().with_strict(false),
        )
        .unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }
}
