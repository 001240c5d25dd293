//! Source text view
//!
//! Borrowed lines of the annotated source for one parse call. Nothing is
//! cached between calls; each call may see different content.

/// Lines of the annotated source file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceText<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceText<'a> {
    /// Split whole-file text on `\n`.
    ///
    /// One trailing `\r` per line is dropped so CRLF files measure the same
    /// as LF files.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').map(strip_cr).collect(),
        }
    }

    /// Wrap lines that were already split by the caller, kept verbatim
    pub fn from_lines<L: AsRef<str>>(lines: &'a [L]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref()).collect(),
        }
    }

    /// Line at a 0-based index, `None` when out of range
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
