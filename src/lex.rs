//! Lexical predicates and the escape codec.
//!
//! These are the primitive building blocks the quoting engine (encode side) and
//! the token parser (decode side) are built on top of. Kept free of any
//! `Value`/`ToonValue` dependency so they can be unit tested in isolation.

/// `s` is exactly one of the three reserved literals.
pub fn is_boolean_or_null_literal(s: &str) -> bool {
    matches!(s, "true" | "false" | "null")
}

/// Broad numeric-looking check used to decide whether a string needs quoting
/// on the encode side. Deliberately also matches ambiguous leading-zero
/// shapes (`"05"`, `"007"`) so they get quoted even though they will not be
/// parsed back as numbers by [`is_numeric_literal`].
pub fn is_numeric_like(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if is_plain_numeric_pattern(s) {
        return true;
    }
    is_leading_zero_pattern(s)
}

/// Strict numeric-literal check used only on the decode side to decide
/// whether an unquoted token should be parsed as a number. Matches
/// `-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?` exactly — no leading `+`, no
/// bare trailing dot, no leading zero unless the token is exactly `"0"` or
/// starts with `"0."`. Deliberately narrower than `str::parse::<f64>`, which
/// accepts both of those shapes.
pub fn is_numeric_literal(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let bytes = s.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' && bytes[1] != b'.' {
        return false;
    }
    is_plain_numeric_pattern(s)
}

fn is_plain_numeric_pattern(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    if chars.peek() == Some(&'-') {
        chars.next();
    }
    let mut saw_digit = false;
    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        chars.next();
        saw_digit = true;
    }
    if !saw_digit {
        return false;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut saw_frac_digit = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            saw_frac_digit = true;
        }
        if !saw_frac_digit {
            return false;
        }
    }
    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut saw_exp_digit = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            saw_exp_digit = true;
        }
        if !saw_exp_digit {
            return false;
        }
    }
    chars.next().is_none()
}

fn is_leading_zero_pattern(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && bytes[1..].iter().all(|b| b.is_ascii_digit())
}

/// `UnquotedKey := [A-Za-z_][A-Za-z0-9_.]*`
pub fn is_valid_unquoted_key(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// A string is safe to emit without surrounding quotes when none of the
/// quoting triggers apply: emptiness, surrounding whitespace, literal-like
/// content, structural characters, or the active delimiter.
pub fn is_safe_unquoted_string(s: &str, delimiter: char) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.trim() != s {
        return false;
    }
    if is_boolean_or_null_literal(s) || is_numeric_like(s) {
        return false;
    }
    if s.contains(':') || s.contains('"') || s.contains('\\') {
        return false;
    }
    if s.contains(['[', ']', '{', '}']) {
        return false;
    }
    if s.contains(['\n', '\r', '\t']) {
        return false;
    }
    if s.contains(delimiter) {
        return false;
    }
    if s.starts_with('-') {
        return false;
    }
    true
}

/// Escape exactly the five characters the format recognizes. All other
/// bytes/code points, including every non-ASCII scalar value, pass through.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Unescape the body of a quoted string (without surrounding quotes).
/// Any escape other than `\n \t \r \\ \"` is an error; a trailing lone
/// backslash is an error.
pub fn unescape_string(value: &str) -> Result<String, char> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => return Err(other),
            None => return Err('\0'),
        }
    }
    Ok(out)
}

/// Find the index (byte offset) of the closing quote for a quoted string
/// starting at `start` (the position of the opening `"`). Escaped
/// characters inside the quotes are skipped. Returns `None` if unterminated.
pub fn find_closing_quote(content: &str, start: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut i = start + 1;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            i += 2;
            continue;
        }
        if bytes[i] == b'"' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Find the index of `needle` outside of any quoted span, honoring escapes
/// inside quotes. Returns `None` if not found unquoted.
pub fn find_unquoted_char(content: &str, needle: char, start: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut in_quotes = false;
    let mut i = start;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c == '\\' && i + 1 < bytes.len() && in_quotes {
            i += 2;
            continue;
        }
        if c == '"' {
            in_quotes = !in_quotes;
            i += 1;
            continue;
        }
        if c == needle && !in_quotes {
            return Some(i);
        }
        i += 1;
    }
    None
}
