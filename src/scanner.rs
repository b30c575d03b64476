//! The line scanner and line cursor.
//!
//! The decoder never walks raw characters across line boundaries: the scanner
//! splits the source into [`ParsedLine`]s up front (computing indentation
//! depth and enforcing whitespace discipline in strict mode), and every later
//! stage consumes that list through a [`LineCursor`]. This keeps indentation
//! logic centralized here instead of scattered through the recursive-descent
//! parser.

use crate::error::{Error, Result};

/// Non-negative nesting depth, computed from leading whitespace.
pub type Depth = usize;

/// A single non-blank source line after scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub raw: String,
    pub indent: usize,
    pub content: String,
    pub depth: Depth,
    pub line_number: usize,
}

/// A blank (whitespace-only) line, tracked separately so array-body
/// validation can check for interior blank lines without losing their
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct BlankLineInfo {
    pub line_number: usize,
    pub indent: usize,
    pub depth: Depth,
}

/// Split `source` into parsed lines and blank-line records.
///
/// `indent_size` is the configured indent width; `strict` enables the two
/// whitespace-discipline checks (no tabs in leading whitespace, leading-space
/// count an exact multiple of `indent_size`).
pub fn scan(source: &str, indent_size: usize, strict: bool) -> Result<(Vec<ParsedLine>, Vec<BlankLineInfo>)> {
    if source.trim().is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let mut parsed = Vec::new();
    let mut blanks = Vec::new();

    for (i, raw) in source.split('\n').enumerate() {
        let line_number = i + 1;
        let indent = raw.chars().take_while(|&c| c == ' ').count();
        let content: String = raw.chars().skip(indent).collect();

        if content.trim().is_empty() {
            let depth = indent / indent_size.max(1);
            blanks.push(BlankLineInfo {
                line_number,
                indent,
                depth,
            });
            continue;
        }

        let depth = indent / indent_size.max(1);

        if strict {
            let ws_end = raw
                .chars()
                .take_while(|&c| c == ' ' || c == '\t')
                .count();
            let leading_ws: String = raw.chars().take(ws_end).collect();
            if leading_ws.contains('\t') {
                return Err(Error::TabInIndentation { line: line_number });
            }
            if indent > 0 && indent % indent_size != 0 {
                return Err(Error::IndentationNotMultiple {
                    line: line_number,
                    found: indent,
                    unit: indent_size,
                });
            }
        }

        parsed.push(ParsedLine {
            raw: raw.to_string(),
            indent,
            content,
            depth,
            line_number,
        });
    }

    Ok((parsed, blanks))
}

/// A cursor over [`ParsedLine`]s, consumed one whole line at a time.
#[derive(Debug, Clone)]
pub struct LineCursor {
    lines: Vec<ParsedLine>,
    index: usize,
    blank_lines: Vec<BlankLineInfo>,
}

impl LineCursor {
    pub fn new(lines: Vec<ParsedLine>, blank_lines: Vec<BlankLineInfo>) -> Self {
        LineCursor {
            lines,
            index: 0,
            blank_lines,
        }
    }

    /// Look at the current line without advancing.
    pub fn peek(&self) -> Option<&ParsedLine> {
        self.lines.get(self.index)
    }

    /// Return the current line and advance the cursor.
    pub fn next(&mut self) -> Option<ParsedLine> {
        let line = self.lines.get(self.index).cloned();
        if line.is_some() {
            self.index += 1;
        }
        line
    }

    /// Advance the cursor without returning the line.
    pub fn advance(&mut self) {
        if self.index < self.lines.len() {
            self.index += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn blank_lines(&self) -> &[BlankLineInfo] {
        &self.blank_lines
    }

    /// The line most recently returned by [`LineCursor::next`].
    pub fn current(&self) -> Option<&ParsedLine> {
        if self.index > 0 {
            self.lines.get(self.index - 1)
        } else {
            None
        }
    }

    /// Peek at the current line only if it sits at exactly `target_depth`.
    pub fn peek_at_depth(&self, target_depth: Depth) -> Option<&ParsedLine> {
        match self.peek() {
            Some(line) if line.depth == target_depth => Some(line),
            _ => None,
        }
    }

    pub fn has_more_at_depth(&self, target_depth: Depth) -> bool {
        self.peek_at_depth(target_depth).is_some()
    }

    /// The first recorded blank line strictly between `first_line` and
    /// `last_line` (both 1-based), if any.
    pub fn first_blank_line_in_range(&self, first_line: usize, last_line: usize) -> Option<usize> {
        self.blank_lines
            .iter()
            .filter(|b| b.line_number > first_line && b.line_number < last_line)
            .map(|b| b.line_number)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_indent_and_depth() {
        let (lines, blanks) = scan("a:\n  b: 1\n\n  c: 2", 2, true).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].depth, 0);
        assert_eq!(lines[1].depth, 1);
        assert_eq!(lines[1].content, "b: 1");
        assert_eq!(blanks.len(), 1);
        assert_eq!(blanks[0].line_number, 3);
    }

    #[test]
    fn strict_mode_rejects_tabs() {
        let err = scan("a:\n\tb: 1", 2, true).unwrap_err();
        assert!(matches!(err, Error::TabInIndentation { line: 2 }));
    }

    #[test]
    fn strict_mode_rejects_non_multiple_indent() {
        let err = scan("a:\n   b: 1", 2, true).unwrap_err();
        assert!(matches!(err, Error::IndentationNotMultiple { line: 2, .. }));
    }

    #[test]
    fn non_strict_tolerates_odd_indentation() {
        let (lines, _) = scan("a:\n   b: 1", 2, false).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn empty_input_scans_to_nothing() {
        let (lines, blanks) = scan("   \n  ", 2, true).unwrap();
        assert!(lines.is_empty());
        assert!(blanks.is_empty());
    }

    #[test]
    fn cursor_peek_at_depth() {
        let (lines, blanks) = scan("a:\n  b: 1", 2, true).unwrap();
        let cursor = LineCursor::new(lines, blanks);
        assert!(cursor.has_more_at_depth(0));
        assert!(!cursor.has_more_at_depth(1));
    }
}
