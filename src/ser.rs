//! TOON serialization.
//!
//! This module has two halves:
//!
//! 1. A `serde::Serializer` impl (the [`Serializer`] unit struct) that walks
//!    any `T: Serialize` and builds a normalized [`ToonValue`] tree. Every
//!    `serialize_*` call constructs the matching `ToonValue` variant
//!    directly, so the tree that comes out is already in the strict
//!    six-kind shape — no separate pass is needed beyond folding stray
//!    `-0.0`/non-finite floats (handled by [`crate::normalize`]).
//! 2. The encoder driver: the header formatter, array-shape classifier, and
//!    indentation-aware line writer that turn a normalized `ToonValue` into
//!    TOON text (§4.4–§4.6 of the format this crate implements). Keeping
//!    these two halves separate means the tricky formatting rules — tabular
//!    vs. inline vs. expanded-list, quoting, field order — are implemented
//!    exactly once, and the same logic drives `to_string`, `to_value`, and
//!    the macro-built literals alike.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use toonrs::{to_string, to_string_with_options, ToonOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//! let toon = to_string(&data).unwrap();
//! assert_eq!(toon, "x: 1\ny: 2");
//! ```

use crate::lex;
use crate::map::ToonMap;
use crate::normalize;
use crate::options::{Delimiter, ToonOptions};
use crate::value::ToonValue;
use crate::{Error, Result};
use serde::ser::{self, Serialize};

// ---------------------------------------------------------------------
// serde::Serializer: build a ToonValue tree
// ---------------------------------------------------------------------

/// Builds a [`ToonValue`] from any `T: Serialize`. Stateless — the same
/// instance can be reused for every field of a container.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer;

impl Serializer {
    pub fn new() -> Self {
        Serializer
    }
}

fn to_map_key(value: ToonValue) -> Result<String> {
    match value {
        ToonValue::String(s) => Ok(s),
        ToonValue::Integer(i) => Ok(i.to_string()),
        ToonValue::Float(f) => Ok(f.to_string()),
        ToonValue::Bool(b) => Ok(b.to_string()),
        other => Err(Error::unsupported_type(format!(
            "map keys must be strings, found {other:?}"
        ))),
    }
}

impl ser::Serializer for Serializer {
    type Ok = ToonValue;
    type Error = Error;

    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = TupleVariantSerializer;
    type SerializeMap = MapSerializer;
    type SerializeStruct = MapSerializer;
    type SerializeStructVariant = StructVariantSerializer;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(ToonValue::Bool(v))
    }
    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v))
    }
    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Ok(ToonValue::Integer(v as i64))
    }
    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(normalize::normalize(&ToonValue::Float(v as f64)))
    }
    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(normalize::normalize(&ToonValue::Float(v)))
    }
    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(ToonValue::String(v.to_string()))
    }
    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(ToonValue::String(v.to_string()))
    }
    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        Ok(ToonValue::Array(
            v.iter().map(|b| ToonValue::Integer(*b as i64)).collect(),
        ))
    }
    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(ToonValue::Null)
    }
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(ToonValue::Null)
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(ToonValue::Null)
    }
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(ToonValue::String(variant.to_string()))
    }
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        let mut map = ToonMap::new();
        map.insert(variant.to_string(), value.serialize(self)?);
        Ok(ToonValue::Object(map))
    }
    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }
    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(TupleVariantSerializer {
            variant,
            items: Vec::with_capacity(len),
        })
    }
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            map: ToonMap::new(),
            next_key: None,
        })
    }
    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct> {
        Ok(MapSerializer {
            map: ToonMap::new(),
            next_key: None,
        })
    }
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(StructVariantSerializer {
            variant,
            map: ToonMap::new(),
        })
    }
}

#[doc(hidden)]
pub struct SeqSerializer {
    items: Vec<ToonValue>,
}
impl ser::SerializeSeq for SeqSerializer {
    type Ok = ToonValue;
    type Error = Error;
    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(Serializer)?);
        Ok(())
    }
    fn end(self) -> Result<Self::Ok> {
        Ok(ToonValue::Array(self.items))
    }
}
impl ser::SerializeTuple for SeqSerializer {
    type Ok = ToonValue;
    type Error = Error;
    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }
    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}
impl ser::SerializeTupleStruct for SeqSerializer {
    type Ok = ToonValue;
    type Error = Error;
    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }
    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}

#[doc(hidden)]
pub struct TupleVariantSerializer {
    variant: &'static str,
    items: Vec<ToonValue>,
}
impl ser::SerializeTupleVariant for TupleVariantSerializer {
    type Ok = ToonValue;
    type Error = Error;
    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(Serializer)?);
        Ok(())
    }
    fn end(self) -> Result<Self::Ok> {
        let mut map = ToonMap::new();
        map.insert(self.variant.to_string(), ToonValue::Array(self.items));
        Ok(ToonValue::Object(map))
    }
}

#[doc(hidden)]
pub struct MapSerializer {
    map: ToonMap,
    next_key: Option<String>,
}
impl ser::SerializeMap for MapSerializer {
    type Ok = ToonValue;
    type Error = Error;
    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(to_map_key(key.serialize(Serializer)?)?);
        Ok(())
    }
    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::unsupported_type("serialize_value called before serialize_key"))?;
        self.map.insert(key, value.serialize(Serializer)?);
        Ok(())
    }
    fn end(self) -> Result<Self::Ok> {
        Ok(ToonValue::Object(self.map))
    }
}
impl ser::SerializeStruct for MapSerializer {
    type Ok = ToonValue;
    type Error = Error;
    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.map.insert(key.to_string(), value.serialize(Serializer)?);
        Ok(())
    }
    fn end(self) -> Result<Self::Ok> {
        Ok(ToonValue::Object(self.map))
    }
}

#[doc(hidden)]
pub struct StructVariantSerializer {
    variant: &'static str,
    map: ToonMap,
}
impl ser::SerializeStructVariant for StructVariantSerializer {
    type Ok = ToonValue;
    type Error = Error;
    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.map.insert(key.to_string(), value.serialize(Serializer)?);
        Ok(())
    }
    fn end(self) -> Result<Self::Ok> {
        let mut outer = ToonMap::new();
        outer.insert(self.variant.to_string(), ToonValue::Object(self.map));
        Ok(ToonValue::Object(outer))
    }
}

/// Convert any `T: Serialize` into a normalized [`ToonValue`] tree without
/// formatting it to text.
pub fn to_toon_value<T: ?Sized + Serialize>(value: &T) -> Result<ToonValue> {
    let built = value.serialize(Serializer)?;
    Ok(normalize::normalize(&built))
}

// ---------------------------------------------------------------------
// Encoder driver: header formatter, array-shape classifier, line writer
// ---------------------------------------------------------------------

struct LineWriter {
    lines: Vec<String>,
    indent_string: String,
}

impl LineWriter {
    fn new(indent_size: usize) -> Self {
        LineWriter {
            lines: Vec::new(),
            indent_string: " ".repeat(indent_size),
        }
    }

    fn push(&mut self, depth: usize, content: &str) {
        let mut line = self.indent_string.repeat(depth);
        line.push_str(content);
        self.lines.push(line);
    }

    fn push_list_item(&mut self, depth: usize, content: &str) {
        self.push(depth, &format!("- {content}"));
    }

    fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

fn encode_key(key: &str) -> String {
    if lex::is_valid_unquoted_key(key) {
        key.to_string()
    } else {
        format!("\"{}\"", lex::escape_string(key))
    }
}

fn encode_primitive(value: &ToonValue, delimiter: char) -> String {
    match value {
        ToonValue::Null => "null".to_string(),
        ToonValue::Bool(b) => b.to_string(),
        ToonValue::Integer(i) => i.to_string(),
        ToonValue::Float(f) => format_float(*f),
        ToonValue::String(s) => encode_string_literal(s, delimiter),
        ToonValue::Array(_) | ToonValue::Object(_) => unreachable!("encode_primitive on a container"),
    }
}

/// Finite floats never use scientific notation per the format's literal
/// stability guarantee; `f64`'s `Display` already avoids it for the
/// magnitudes this crate is expected to see.
fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.1}").trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        f.to_string()
    }
}

fn encode_string_literal(value: &str, delimiter: char) -> String {
    if lex::is_safe_unquoted_string(value, delimiter) {
        value.to_string()
    } else {
        format!("\"{}\"", lex::escape_string(value))
    }
}

fn encode_and_join_primitives(values: &[ToonValue], delimiter: char) -> String {
    values
        .iter()
        .map(|v| encode_primitive(v, delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

fn format_header(
    length: usize,
    key: Option<&str>,
    fields: Option<&[String]>,
    delimiter: Delimiter,
    length_marker: Option<char>,
) -> String {
    let mut out = String::new();
    if let Some(k) = key {
        out.push_str(&encode_key(k));
    }
    out.push('[');
    if let Some(m) = length_marker {
        out.push(m);
    }
    out.push_str(&length.to_string());
    if delimiter != Delimiter::Comma {
        out.push(delimiter.as_char());
    }
    out.push(']');
    if let Some(fields) = fields {
        out.push('{');
        out.push_str(
            &fields
                .iter()
                .map(|f| encode_key(f))
                .collect::<Vec<_>>()
                .join(delimiter.as_str()),
        );
        out.push('}');
    }
    out.push(':');
    out
}

/// Top-level entry point of the encoder driver: `encode(value, options) -> String`.
pub fn encode_value(value: &ToonValue, options: &ToonOptions) -> String {
    let value = normalize::normalize(value);
    if value.is_primitive() {
        return encode_primitive(&value, options.delimiter.as_char());
    }
    let mut writer = LineWriter::new(options.indent);
    match &value {
        ToonValue::Array(items) => encode_array(None, items, &mut writer, 0, options),
        ToonValue::Object(map) => encode_object(map, &mut writer, 0, options),
        _ => unreachable!(),
    }
    writer.into_string()
}

fn encode_object(map: &ToonMap, writer: &mut LineWriter, depth: usize, options: &ToonOptions) {
    for (key, value) in map.iter() {
        encode_key_value_pair(key, value, writer, depth, options);
    }
}

fn encode_key_value_pair(
    key: &str,
    value: &ToonValue,
    writer: &mut LineWriter,
    depth: usize,
    options: &ToonOptions,
) {
    let encoded_key = encode_key(key);
    match value {
        ToonValue::Array(items) => encode_array(Some(key), items, writer, depth, options),
        ToonValue::Object(map) => {
            if map.is_empty() {
                writer.push(depth, &format!("{encoded_key}:"));
            } else {
                writer.push(depth, &format!("{encoded_key}:"));
                encode_object(map, writer, depth + 1, options);
            }
        }
        primitive => writer.push(
            depth,
            &format!(
                "{encoded_key}: {}",
                encode_primitive(primitive, options.delimiter.as_char())
            ),
        ),
    }
}

fn encode_array(
    key: Option<&str>,
    items: &[ToonValue],
    writer: &mut LineWriter,
    depth: usize,
    options: &ToonOptions,
) {
    if items.is_empty() {
        let header = format_header(0, key, None, options.delimiter, options.length_marker);
        writer.push(depth, &header);
        return;
    }

    if normalize::is_array_of_primitives(items) {
        writer.push(
            depth,
            &encode_inline_array_line(items, options.delimiter.as_char(), key, options.length_marker),
        );
        return;
    }

    if normalize::is_array_of_arrays(items) {
        let all_primitive_arrays = items.iter().all(|v| match v {
            ToonValue::Array(inner) => normalize::is_array_of_primitives(inner),
            _ => false,
        });
        if all_primitive_arrays {
            encode_array_of_arrays_as_list_items(key, items, writer, depth, options);
            return;
        }
    }

    if normalize::is_array_of_objects(items) {
        if let Some(header_fields) = extract_tabular_header(items) {
            encode_array_of_objects_as_tabular(key, items, &header_fields, writer, depth, options);
        } else {
            encode_mixed_array_as_list_items(key, items, writer, depth, options);
        }
        return;
    }

    encode_mixed_array_as_list_items(key, items, writer, depth, options);
}

fn encode_array_of_arrays_as_list_items(
    prefix: Option<&str>,
    values: &[ToonValue],
    writer: &mut LineWriter,
    depth: usize,
    options: &ToonOptions,
) {
    let header = format_header(values.len(), prefix, None, options.delimiter, options.length_marker);
    writer.push(depth, &header);
    for item in values {
        if let ToonValue::Array(inner) = item {
            if normalize::is_array_of_primitives(inner) {
                let inline =
                    encode_inline_array_line(inner, options.delimiter.as_char(), None, options.length_marker);
                writer.push_list_item(depth + 1, &inline);
            }
        }
    }
}

fn encode_inline_array_line(
    values: &[ToonValue],
    delimiter: char,
    prefix: Option<&str>,
    length_marker: Option<char>,
) -> String {
    let delim = match delimiter {
        ',' => Delimiter::Comma,
        '\t' => Delimiter::Tab,
        '|' => Delimiter::Pipe,
        _ => Delimiter::Comma,
    };
    let header = format_header(values.len(), prefix, None, delim, length_marker);
    if values.is_empty() {
        return header;
    }
    format!("{header} {}", encode_and_join_primitives(values, delimiter))
}

fn extract_tabular_header(rows: &[ToonValue]) -> Option<Vec<String>> {
    let first = rows.first()?;
    let ToonValue::Object(first_map) = first else {
        return None;
    };
    let first_keys: Vec<String> = first_map.keys().cloned().collect();
    if first_keys.is_empty() {
        return None;
    }
    if is_tabular_array(rows, &first_keys) {
        Some(first_keys)
    } else {
        None
    }
}

fn is_tabular_array(rows: &[ToonValue], header: &[String]) -> bool {
    rows.iter().all(|row| match row {
        ToonValue::Object(map) => {
            map.len() == header.len()
                && header
                    .iter()
                    .all(|k| map.get(k).is_some_and(normalize::is_primitive))
        }
        _ => false,
    })
}

fn write_tabular_rows(
    rows: &[ToonValue],
    header: &[String],
    writer: &mut LineWriter,
    depth: usize,
    options: &ToonOptions,
) {
    for row in rows {
        if let ToonValue::Object(map) = row {
            let values: Vec<ToonValue> = header
                .iter()
                .map(|k| map.get(k).cloned().unwrap_or(ToonValue::Null))
                .collect();
            writer.push(
                depth,
                &encode_and_join_primitives(&values, options.delimiter.as_char()),
            );
        }
    }
}

fn encode_array_of_objects_as_tabular(
    prefix: Option<&str>,
    rows: &[ToonValue],
    header: &[String],
    writer: &mut LineWriter,
    depth: usize,
    options: &ToonOptions,
) {
    let formatted_header = format_header(
        rows.len(),
        prefix,
        Some(header),
        options.delimiter,
        options.length_marker,
    );
    writer.push(depth, &formatted_header);
    write_tabular_rows(rows, header, writer, depth + 1, options);
}

fn encode_mixed_array_as_list_items(
    prefix: Option<&str>,
    items: &[ToonValue],
    writer: &mut LineWriter,
    depth: usize,
    options: &ToonOptions,
) {
    let header = format_header(items.len(), prefix, None, options.delimiter, options.length_marker);
    writer.push(depth, &header);
    for item in items {
        encode_list_item_value(item, writer, depth + 1, options);
    }
}

fn encode_object_as_list_item(obj: &ToonMap, writer: &mut LineWriter, depth: usize, options: &ToonOptions) {
    if obj.is_empty() {
        writer.push(depth, "-");
        return;
    }
    let (first_key, first_value) = obj.iter().next().unwrap();
    let encoded_key = encode_key(first_key);

    match first_value {
        ToonValue::Array(items) => {
            if normalize::is_array_of_primitives(items) {
                let formatted = encode_inline_array_line(
                    items,
                    options.delimiter.as_char(),
                    Some(first_key),
                    options.length_marker,
                );
                writer.push_list_item(depth, &formatted);
            } else if normalize::is_array_of_objects(items) {
                if let Some(header) = extract_tabular_header(items) {
                    let formatted_header = format_header(
                        items.len(),
                        Some(first_key),
                        Some(&header),
                        options.delimiter,
                        options.length_marker,
                    );
                    writer.push_list_item(depth, &formatted_header);
                    write_tabular_rows(items, &header, writer, depth + 1, options);
                } else {
                    writer.push_list_item(depth, &format!("{encoded_key}[{}]:", items.len()));
                    for item in items {
                        encode_object_as_list_item(
                            item.as_object().unwrap_or(&ToonMap::new()),
                            writer,
                            depth + 1,
                            options,
                        );
                    }
                }
            } else {
                writer.push_list_item(depth, &format!("{encoded_key}[{}]:", items.len()));
                for item in items {
                    encode_list_item_value(item, writer, depth + 1, options);
                }
            }
        }
        ToonValue::Object(nested) => {
            writer.push_list_item(depth, &format!("{encoded_key}:"));
            if !nested.is_empty() {
                encode_object(nested, writer, depth + 2, options);
            }
        }
        primitive => {
            writer.push_list_item(
                depth,
                &format!(
                    "{encoded_key}: {}",
                    encode_primitive(primitive, options.delimiter.as_char())
                ),
            );
        }
    }

    for (key, value) in obj.iter().skip(1) {
        encode_key_value_pair(key, value, writer, depth + 1, options);
    }
}

fn encode_list_item_value(value: &ToonValue, writer: &mut LineWriter, depth: usize, options: &ToonOptions) {
    match value {
        ToonValue::Array(items) if normalize::is_array_of_primitives(items) => {
            let inline =
                encode_inline_array_line(items, options.delimiter.as_char(), None, options.length_marker);
            writer.push_list_item(depth, &inline);
        }
        ToonValue::Array(items) => {
            let header = format_header(items.len(), None, None, options.delimiter, options.length_marker);
            writer.push_list_item(depth, &header);
            for item in items {
                encode_list_item_value(item, writer, depth + 1, options);
            }
        }
        ToonValue::Object(map) => encode_object_as_list_item(map, writer, depth, options),
        primitive => writer.push_list_item(depth, &encode_primitive(primitive, options.delimiter.as_char())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ToonOptions;

    fn obj(pairs: Vec<(&str, ToonValue)>) -> ToonValue {
        let mut map = ToonMap::new();
        for (k, v) in pairs {
            map.insert(k.to_string(), v);
        }
        ToonValue::Object(map)
    }

    #[test]
    fn tabular_encoding_preserves_first_row_field_order() {
        let users = ToonValue::Array(vec![
            obj(vec![("id", ToonValue::Integer(1)), ("name", ToonValue::from("Alice"))]),
            obj(vec![("id", ToonValue::Integer(2)), ("name", ToonValue::from("Bob"))]),
        ]);
        let root = obj(vec![("users", users)]);
        let out = encode_value(&root, &ToonOptions::new());
        assert_eq!(out, "users[2]{id,name}:\n  1,Alice\n  2,Bob");
    }

    #[test]
    fn pipe_delimited_inline_array() {
        let tags = ToonValue::from(vec!["reading", "gaming", "coding"]);
        let root = obj(vec![("tags", tags)]);
        let opts = ToonOptions::new().with_delimiter(Delimiter::Pipe);
        let out = encode_value(&root, &opts);
        assert_eq!(out, "tags[3|]: reading|gaming|coding");
    }

    #[test]
    fn expanded_list_when_key_sets_differ() {
        let items = ToonValue::Array(vec![
            obj(vec![("id", ToonValue::Integer(1)), ("name", ToonValue::from("First"))]),
            obj(vec![
                ("id", ToonValue::Integer(2)),
                ("name", ToonValue::from("Second")),
                ("extra", ToonValue::Bool(true)),
            ]),
        ]);
        let root = obj(vec![("items", items)]);
        let out = encode_value(&root, &ToonOptions::new());
        assert_eq!(
            out,
            "items[2]:\n  - id: 1\n    name: First\n  - id: 2\n    name: Second\n    extra: true"
        );
    }

    #[test]
    fn negative_zero_and_non_finite_literals() {
        assert_eq!(encode_primitive(&ToonValue::Integer(0), ','), "0");
        assert_eq!(
            encode_value(&normalize::normalize(&ToonValue::Float(-0.0)), &ToonOptions::new()),
            "0"
        );
        assert_eq!(
            encode_value(&normalize::normalize(&ToonValue::Float(f64::NAN)), &ToonOptions::new()),
            "null"
        );
    }

    #[test]
    fn leading_zero_string_is_quoted() {
        let root = ToonValue::from("05");
        assert_eq!(encode_value(&root, &ToonOptions::new()), "\"05\"");
    }
}
