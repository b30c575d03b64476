//! TOON deserialization.
//!
//! The decoder never walks characters across line boundaries. It runs in two
//! stages:
//!
//! 1. [`crate::scanner::scan`] splits the source into [`crate::scanner::ParsedLine`]s,
//!    computing indentation depth up front and enforcing whitespace discipline
//!    in strict mode.
//! 2. The functions below walk a [`crate::scanner::LineCursor`] over those
//!    lines, building a [`ToonValue`] tree one key/row/item at a time. A
//!    single line is never re-scanned once consumed.
//!
//! `from_str`/`from_slice`/`from_reader` parse straight to a `ToonValue` and
//! then run it through a `serde::de::Deserializer` adapter ([`ValueDeserializer`])
//! to materialize the caller's target type — the same two-stage shape
//! `serde_json` uses for its `Value` type.

use crate::error::{Error, Result};
use crate::lex;
use crate::map::ToonMap;
use crate::options::DecodeOptions;
use crate::scanner::{self, LineCursor, ParsedLine};
use crate::value::ToonValue;
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess, SeqAccess,
    VariantAccess, Visitor,
};

const LIST_ITEM_PREFIX: &str = "- ";

// ---------------------------------------------------------------------
// Header parsing
// ---------------------------------------------------------------------

struct ArrayHeader {
    key: Option<String>,
    length: usize,
    delimiter: char,
    fields: Option<Vec<String>>,
}

struct ParsedHeaderLine {
    header: ArrayHeader,
    inline_values: Option<String>,
}

/// Parse an array header out of a full line's content (`key[N]{fields}: rest`).
/// Returns `None` if `content` is not shaped like a header at all (as opposed
/// to being a malformed one, which is an error).
fn parse_array_header_line(
    content: &str,
    default_delimiter: char,
    line: usize,
) -> Result<Option<ParsedHeaderLine>> {
    if content.trim_start().starts_with('"') {
        return Ok(None);
    }

    let Some(bracket_start) = content.find('[') else {
        return Ok(None);
    };
    let Some(bracket_end) = content[bracket_start..].find(']').map(|i| i + bracket_start) else {
        return Ok(None);
    };

    let colon_search_start = bracket_end + 1;
    let mut brace_end = colon_search_start;
    let brace_start = content[bracket_end..].find('{').map(|i| i + bracket_end);

    let colon_before_brace = content[bracket_end..].find(':').map(|i| i + bracket_end);
    let has_fields_segment = match (brace_start, colon_before_brace) {
        (Some(bs), Some(ci)) => bs < ci,
        (Some(_), None) => true,
        _ => false,
    };

    if has_fields_segment {
        if let Some(bs) = brace_start {
            if let Some(be) = content[bs..].find('}').map(|i| i + bs) {
                brace_end = be + 1;
            }
        }
    }

    let search_from = bracket_end.max(brace_end);
    let Some(colon_index) = content[search_from..].find(':').map(|i| i + search_from) else {
        return Ok(None);
    };

    let key = if bracket_start > 0 {
        Some(content[..bracket_start].trim().to_string())
    } else {
        None
    };
    let after_colon = content[colon_index + 1..].trim();
    let bracket_content = &content[bracket_start + 1..bracket_end];

    let (length, delimiter, _has_length_marker) =
        parse_bracket_segment(bracket_content, default_delimiter, line)?;

    let mut fields = None;
    if has_fields_segment {
        if let Some(bs) = brace_start {
            if let Some(be) = content[bs..].find('}').map(|i| i + bs) {
                if be < colon_index {
                    let fields_content = &content[bs + 1..be];
                    let mut parsed_fields = Vec::new();
                    for raw in parse_delimited_values(fields_content, delimiter) {
                        parsed_fields.push(parse_string_literal(raw.trim(), line)?);
                    }
                    fields = Some(parsed_fields);
                }
            }
        }
    }

    Ok(Some(ParsedHeaderLine {
        header: ArrayHeader {
            key,
            length,
            delimiter,
            fields,
        },
        inline_values: if after_colon.is_empty() {
            None
        } else {
            Some(after_colon.to_string())
        },
    }))
}

fn parse_bracket_segment(seg: &str, default_delimiter: char, line: usize) -> Result<(usize, char, bool)> {
    let mut content = seg;
    let has_length_marker = content.starts_with('#');
    if has_length_marker {
        content = &content[1..];
    }

    let mut delimiter = default_delimiter;
    if let Some(suffix) = content.chars().last() {
        if let Some(found) = crate::options::Delimiter::from_header_suffix(suffix) {
            delimiter = found.as_char();
            content = &content[..content.len() - suffix.len_utf8()];
        }
    }

    let length: usize = content.parse().map_err(|_| Error::InvalidHeader {
        line,
        msg: format!("invalid array length '{seg}'"),
    })?;

    Ok((length, delimiter, has_length_marker))
}

/// Split `input` on `delimiter`, honoring quoted spans (escapes inside quotes
/// are copied through untouched — unescaping happens later per-token).
fn parse_delimited_values(input: &str, delimiter: char) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\\' && in_quotes && i + 1 < chars.len() {
            current.push(c);
            current.push(chars[i + 1]);
            i += 2;
            continue;
        }
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
            i += 1;
            continue;
        }
        if c == delimiter && !in_quotes {
            values.push(current.trim().to_string());
            current = String::new();
            i += 1;
            continue;
        }
        current.push(c);
        i += 1;
    }

    if !current.is_empty() || !values.is_empty() {
        values.push(current.trim().to_string());
    }

    values
}

fn map_row_values_to_primitives(values: &[String], line: usize) -> Result<Vec<ToonValue>> {
    values.iter().map(|v| parse_primitive_token(v, line)).collect()
}

// ---------------------------------------------------------------------
// Token parsing
// ---------------------------------------------------------------------

fn parse_primitive_token(token: &str, line: usize) -> Result<ToonValue> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(ToonValue::String(String::new()));
    }
    if trimmed.starts_with('"') {
        return Ok(ToonValue::String(parse_string_literal(trimmed, line)?));
    }
    if lex::is_boolean_or_null_literal(trimmed) {
        return Ok(match trimmed {
            "true" => ToonValue::Bool(true),
            "false" => ToonValue::Bool(false),
            _ => ToonValue::Null,
        });
    }
    if lex::is_numeric_literal(trimmed) {
        if !trimmed.contains('.') && !trimmed.to_ascii_lowercase().contains('e') {
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(ToonValue::Integer(i));
            }
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Ok(ToonValue::Float(f));
        }
    }
    Ok(ToonValue::String(trimmed.to_string()))
}

fn parse_string_literal(token: &str, line: usize) -> Result<String> {
    let trimmed = token.trim();
    if trimmed.starts_with('"') {
        let closing = lex::find_closing_quote(trimmed, 0).ok_or(Error::UnterminatedString { line })?;
        if closing != trimmed.len() - 1 {
            return Err(Error::UnexpectedCharactersAfterQuote { line });
        }
        let content = &trimmed[1..closing];
        return lex::unescape_string(content).map_err(|found| Error::InvalidEscape { line, found });
    }
    Ok(trimmed.to_string())
}

fn parse_unquoted_key(content: &str, start: usize, line: usize) -> Result<(String, usize)> {
    let bytes = content.as_bytes();
    let mut end = start;
    while end < bytes.len() && bytes[end] != b':' {
        end += 1;
    }
    if end >= bytes.len() {
        return Err(Error::MissingColon { line });
    }
    let key = content[start..end].trim().to_string();
    Ok((key, end + 1))
}

fn parse_quoted_key(content: &str, start: usize, line: usize) -> Result<(String, usize)> {
    let closing = lex::find_closing_quote(content, start).ok_or(Error::UnterminatedString { line })?;
    let key_content = &content[start + 1..closing];
    let key = lex::unescape_string(key_content).map_err(|found| Error::InvalidEscape { line, found })?;
    let after = closing + 1;
    if after >= content.len() || content.as_bytes()[after] != b':' {
        return Err(Error::MissingColon { line });
    }
    Ok((key, after + 1))
}

fn parse_key_token(content: &str, start: usize, line: usize) -> Result<(String, usize)> {
    if content.as_bytes().get(start) == Some(&b'"') {
        parse_quoted_key(content, start, line)
    } else {
        parse_unquoted_key(content, start, line)
    }
}

fn is_array_header_after_hyphen(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed.starts_with('[') && lex::find_unquoted_char(content, ':', 0).is_some()
}

fn is_object_first_field_after_hyphen(content: &str) -> bool {
    lex::find_unquoted_char(content, ':', 0).is_some()
}

fn is_key_value_line(content: &str) -> bool {
    if content.starts_with('"') {
        match lex::find_closing_quote(content, 0) {
            Some(closing) => content.as_bytes().get(closing + 1) == Some(&b':'),
            None => false,
        }
    } else {
        content.contains(':')
    }
}

// ---------------------------------------------------------------------
// Strict-mode validation helpers
// ---------------------------------------------------------------------

fn assert_expected_count(actual: usize, expected: usize, line: usize) -> Result<()> {
    if actual != expected {
        Err(Error::LengthMismatch {
            line,
            expected,
            found: actual,
        })
    } else {
        Ok(())
    }
}

fn validate_no_blank_lines_in_range(
    first_line: usize,
    last_line: usize,
    cursor: &LineCursor,
    strict: bool,
) -> Result<()> {
    if !strict {
        return Ok(());
    }
    if let Some(blank_line) = cursor.first_blank_line_in_range(first_line, last_line) {
        return Err(Error::BlankLineInsideArray { line: blank_line });
    }
    Ok(())
}

fn validate_no_extra_list_items(cursor: &LineCursor, item_depth: usize) -> Result<()> {
    if let Some(line) = cursor.peek_at_depth(item_depth) {
        if line.content.starts_with(LIST_ITEM_PREFIX) {
            return Err(Error::ExtraItemsAfterDeclaredLength {
                line: line.line_number,
            });
        }
    }
    Ok(())
}

fn validate_no_extra_tabular_rows(cursor: &LineCursor, row_depth: usize) -> Result<()> {
    if let Some(line) = cursor.peek_at_depth(row_depth) {
        return Err(Error::ExtraRowsAfterDeclaredLength {
            line: line.line_number,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------
// Decoder driver
// ---------------------------------------------------------------------

/// Parse `source` into a [`ToonValue`] tree.
pub fn parse(source: &str, options: &DecodeOptions) -> Result<ToonValue> {
    let (lines, blanks) = scanner::scan(source, options.indent, options.strict)?;
    if lines.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut cursor = LineCursor::new(lines, blanks);
    decode_value_from_lines(&mut cursor, options)
}

fn decode_value_from_lines(cursor: &mut LineCursor, options: &DecodeOptions) -> Result<ToonValue> {
    let first = cursor.peek().cloned().ok_or(Error::EmptyInput)?;

    if is_array_header_after_hyphen(&first.content) {
        if let Some(parsed) = parse_array_header_line(&first.content, ',', first.line_number)? {
            cursor.advance();
            return decode_array_from_header(
                parsed.header,
                parsed.inline_values.as_deref(),
                cursor,
                0,
                options,
                first.line_number,
            );
        }
    }

    if cursor.len() == 1 && !is_key_value_line(&first.content) {
        return parse_primitive_token(first.content.trim(), first.line_number);
    }

    Ok(ToonValue::Object(decode_object(cursor, 0, options)?))
}

fn decode_object(cursor: &mut LineCursor, base_depth: usize, options: &DecodeOptions) -> Result<ToonMap> {
    let mut obj = ToonMap::new();

    loop {
        let Some(line) = cursor.peek().cloned() else {
            break;
        };
        if line.depth < base_depth {
            break;
        }
        if line.depth == base_depth {
            let (key, value) = decode_key_value_pair(&line, cursor, base_depth, options)?;
            obj.insert(key, value);
        } else {
            break;
        }
    }

    Ok(obj)
}

struct DecodedKeyValue {
    key: String,
    value: ToonValue,
    follow_depth: usize,
}

fn decode_key_value(
    content: &str,
    line_number: usize,
    cursor: &mut LineCursor,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<DecodedKeyValue> {
    if let Some(parsed) = parse_array_header_line(content, ',', line_number)? {
        if let Some(key) = parsed.header.key.clone() {
            let value = decode_array_from_header(
                parsed.header,
                parsed.inline_values.as_deref(),
                cursor,
                base_depth,
                options,
                line_number,
            )?;
            return Ok(DecodedKeyValue {
                key,
                value,
                follow_depth: base_depth + 1,
            });
        }
    }

    let (key, end) = parse_key_token(content, 0, line_number)?;
    let rest = content[end..].trim();

    if rest.is_empty() {
        let next_is_nested = cursor.peek().is_some_and(|l| l.depth > base_depth);
        if next_is_nested {
            let nested = decode_object(cursor, base_depth + 1, options)?;
            return Ok(DecodedKeyValue {
                key,
                value: ToonValue::Object(nested),
                follow_depth: base_depth + 1,
            });
        }
        return Ok(DecodedKeyValue {
            key,
            value: ToonValue::Object(ToonMap::new()),
            follow_depth: base_depth + 1,
        });
    }

    let value = parse_primitive_token(rest, line_number)?;
    Ok(DecodedKeyValue {
        key,
        value,
        follow_depth: base_depth + 1,
    })
}

fn decode_key_value_pair(
    line: &ParsedLine,
    cursor: &mut LineCursor,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<(String, ToonValue)> {
    cursor.advance();
    let result = decode_key_value(&line.content, line.line_number, cursor, base_depth, options)?;
    Ok((result.key, result.value))
}

fn decode_array_from_header(
    header: ArrayHeader,
    inline_values: Option<&str>,
    cursor: &mut LineCursor,
    base_depth: usize,
    options: &DecodeOptions,
    line_number: usize,
) -> Result<ToonValue> {
    if let Some(inline) = inline_values {
        return decode_inline_primitive_array(&header, inline, line_number);
    }
    if let Some(fields) = &header.fields {
        if !fields.is_empty() {
            return decode_tabular_array(&header, cursor, base_depth, options, line_number);
        }
    }
    decode_list_array(&header, cursor, base_depth, options, line_number)
}

fn decode_inline_primitive_array(
    header: &ArrayHeader,
    inline_values: &str,
    line_number: usize,
) -> Result<ToonValue> {
    if inline_values.trim().is_empty() {
        assert_expected_count(0, header.length, line_number)?;
        return Ok(ToonValue::Array(Vec::new()));
    }

    let values = parse_delimited_values(inline_values, header.delimiter);
    let primitives = map_row_values_to_primitives(&values, line_number)?;
    assert_expected_count(primitives.len(), header.length, line_number)?;
    Ok(ToonValue::Array(primitives))
}

fn decode_list_array(
    header: &ArrayHeader,
    cursor: &mut LineCursor,
    base_depth: usize,
    options: &DecodeOptions,
    header_line: usize,
) -> Result<ToonValue> {
    let mut items = Vec::new();
    let item_depth = base_depth + 1;
    let mut start_line: Option<usize> = None;
    let mut end_line: Option<usize> = None;

    while !cursor.at_end() && items.len() < header.length {
        let Some(line) = cursor.peek().cloned() else {
            break;
        };
        if line.depth < item_depth {
            break;
        }
        if line.depth == item_depth && line.content.starts_with(LIST_ITEM_PREFIX) {
            if start_line.is_none() {
                start_line = Some(line.line_number);
            }
            end_line = Some(line.line_number);

            let item = decode_list_item(cursor, item_depth, options)?;
            items.push(item);

            if let Some(current) = cursor.current() {
                end_line = Some(current.line_number);
            }
        } else {
            break;
        }
    }

    assert_expected_count(items.len(), header.length, header_line)?;

    if let (Some(s), Some(e)) = (start_line, end_line) {
        validate_no_blank_lines_in_range(s, e, cursor, options.strict)?;
    }
    if options.strict {
        validate_no_extra_list_items(cursor, item_depth)?;
    }

    Ok(ToonValue::Array(items))
}

fn decode_tabular_array(
    header: &ArrayHeader,
    cursor: &mut LineCursor,
    base_depth: usize,
    options: &DecodeOptions,
    header_line: usize,
) -> Result<ToonValue> {
    let fields = header.fields.as_ref().expect("tabular header always carries fields");
    let mut objects = Vec::new();
    let row_depth = base_depth + 1;
    let mut start_line: Option<usize> = None;
    let mut end_line: Option<usize> = None;

    while !cursor.at_end() && objects.len() < header.length {
        let Some(line) = cursor.peek().cloned() else {
            break;
        };
        if line.depth != row_depth {
            break;
        }

        if start_line.is_none() {
            start_line = Some(line.line_number);
        }
        end_line = Some(line.line_number);

        cursor.advance();
        let values = parse_delimited_values(&line.content, header.delimiter);
        if values.len() != fields.len() {
            return Err(Error::RowWidthMismatch {
                line: line.line_number,
                expected: fields.len(),
                found: values.len(),
            });
        }

        let primitives = map_row_values_to_primitives(&values, line.line_number)?;
        let mut obj = ToonMap::with_capacity(fields.len());
        for (field, value) in fields.iter().zip(primitives) {
            obj.insert(field.clone(), value);
        }
        objects.push(ToonValue::Object(obj));
    }

    assert_expected_count(objects.len(), header.length, header_line)?;

    if let (Some(s), Some(e)) = (start_line, end_line) {
        validate_no_blank_lines_in_range(s, e, cursor, options.strict)?;
    }
    if options.strict {
        validate_no_extra_tabular_rows(cursor, row_depth)?;
    }

    Ok(ToonValue::Array(objects))
}

fn decode_list_item(cursor: &mut LineCursor, base_depth: usize, options: &DecodeOptions) -> Result<ToonValue> {
    let line = cursor.next().ok_or_else(|| Error::InvalidHeader {
        line: 0,
        msg: "expected list item".to_string(),
    })?;
    let after_hyphen = &line.content[LIST_ITEM_PREFIX.len()..];

    if is_array_header_after_hyphen(after_hyphen) {
        if let Some(parsed) = parse_array_header_line(after_hyphen, ',', line.line_number)? {
            return decode_array_from_header(
                parsed.header,
                parsed.inline_values.as_deref(),
                cursor,
                base_depth,
                options,
                line.line_number,
            );
        }
    }

    if is_object_first_field_after_hyphen(after_hyphen) {
        return decode_object_from_list_item(&line, after_hyphen, cursor, base_depth, options);
    }

    parse_primitive_token(after_hyphen, line.line_number)
}

fn decode_object_from_list_item(
    first_line: &ParsedLine,
    after_hyphen: &str,
    cursor: &mut LineCursor,
    base_depth: usize,
    options: &DecodeOptions,
) -> Result<ToonValue> {
    let result = decode_key_value(after_hyphen, first_line.line_number, cursor, base_depth, options)?;
    let mut obj = ToonMap::new();
    obj.insert(result.key, result.value);

    loop {
        let Some(line) = cursor.peek().cloned() else {
            break;
        };
        if line.depth < result.follow_depth {
            break;
        }
        if line.depth == result.follow_depth && !line.content.starts_with(LIST_ITEM_PREFIX) {
            let (key, value) = decode_key_value_pair(&line, cursor, result.follow_depth, options)?;
            obj.insert(key, value);
        } else {
            break;
        }
    }

    Ok(ToonValue::Object(obj))
}

// ---------------------------------------------------------------------
// serde::Deserializer adapter over a decoded ToonValue
// ---------------------------------------------------------------------

/// Deserialize any `T: DeserializeOwned` from an already-decoded value.
pub fn from_toon_value<T: DeserializeOwned>(value: ToonValue) -> Result<T> {
    T::deserialize(ValueDeserializer { value })
}

/// A `serde::Deserializer` over an owned [`ToonValue`] tree — the same
/// two-stage shape `serde_json` uses for its dynamic `Value` type.
pub struct ValueDeserializer {
    value: ToonValue,
}

impl ValueDeserializer {
    pub fn new(value: ToonValue) -> Self {
        ValueDeserializer { value }
    }

    /// Parse `s` with default [`DecodeOptions`] and build a deserializer over it.
    pub fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_options(s, DecodeOptions::default())
    }

    /// Parse `s` with the given [`DecodeOptions`] and build a deserializer over it.
    pub fn from_str_with_options(s: &str, options: DecodeOptions) -> Result<Self> {
        Ok(ValueDeserializer { value: parse(s, &options)? })
    }
}

macro_rules! deserialize_forwarding_to_any {
    ($($method:ident)*) => {
        $(fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
            self.deserialize_any(visitor)
        })*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.value {
            ToonValue::Null => visitor.visit_unit(),
            ToonValue::Bool(b) => visitor.visit_bool(b),
            ToonValue::Integer(i) => visitor.visit_i64(i),
            ToonValue::Float(f) => visitor.visit_f64(f),
            ToonValue::String(s) => visitor.visit_string(s),
            ToonValue::Array(items) => visitor.visit_seq(SeqDeserializer {
                iter: items.into_iter(),
            }),
            ToonValue::Object(map) => visitor.visit_map(MapDeserializer {
                iter: map.into_iter(),
                value: None,
            }),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.value {
            ToonValue::Null => visitor.visit_none(),
            other => visitor.visit_some(ValueDeserializer { value: other }),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        match self.value {
            ToonValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            ToonValue::Object(map) => {
                if map.len() != 1 {
                    return Err(Error::unsupported_type(
                        "enum representation must be a single-key object or a string",
                    ));
                }
                let (variant, value) = map.into_iter().next().unwrap();
                visitor.visit_enum(EnumDeserializer { variant, value })
            }
            other => Err(Error::unsupported_type(format!(
                "cannot deserialize enum from {other:?}"
            ))),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    deserialize_forwarding_to_any! {
        deserialize_bool deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_unit deserialize_seq deserialize_map
        deserialize_identifier deserialize_ignored_any
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(self, _name: &'static str, visitor: V) -> Result<V::Value> {
        self.deserialize_unit(visitor)
    }
    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value> {
        self.deserialize_seq(visitor)
    }
    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_seq(visitor)
    }
    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_map(visitor)
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<ToonValue>,
}

impl<'de> SeqAccess<'de> for SeqDeserializer {
    type Error = Error;
    fn next_element_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>> {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer { value }).map(Some),
            None => Ok(None),
        }
    }
    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, ToonValue>,
    value: Option<ToonValue>,
}

impl<'de> MapAccess<'de> for MapDeserializer {
    type Error = Error;
    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        match self.iter.next() {
            Some((k, v)) => {
                self.value = Some(v);
                seed.deserialize(k.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }
    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value> {
        let value = self.value.take().expect("next_value_seed called before next_key_seed");
        seed.deserialize(ValueDeserializer { value })
    }
}

struct EnumDeserializer {
    variant: String,
    value: ToonValue,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = ValueDeserializer;
    fn variant_seed<V: DeserializeSeed<'de>>(self, seed: V) -> Result<(V::Value, Self::Variant)> {
        let variant = seed.deserialize(self.variant.into_deserializer())?;
        Ok((variant, ValueDeserializer { value: self.value }))
    }
}

impl<'de> VariantAccess<'de> for ValueDeserializer {
    type Error = Error;
    fn unit_variant(self) -> Result<()> {
        Ok(())
    }
    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value> {
        seed.deserialize(self)
    }
    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value> {
        de::Deserializer::deserialize_seq(self, visitor)
    }
    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        de::Deserializer::deserialize_map(self, visitor)
    }
}
