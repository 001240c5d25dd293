//! End-column resolution for highlighted spans
//!
//! Columns are counted in chars (Unicode scalar values). The trace gives only
//! a start point, so the end of the span comes from the line text and the
//! configured `EndPolicy`.

use crate::config::EndPolicy;

/// Closes a span that starts at a 1-based column of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionResolver {
    policy: EndPolicy,
}

impl PositionResolver {
    pub fn new(policy: EndPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EndPolicy {
        self.policy
    }

    /// 0-based end column of the span starting at `start_column` (1-based).
    ///
    /// Never exceeds the line length; an empty line resolves to 0.
    pub fn resolve_end(&self, line_text: &str, start_column: u32) -> u32 {
        let line_len = line_text.chars().count();

        let end = match self.policy {
            EndPolicy::LineEnd => line_len,
            EndPolicy::NextBoundary => {
                let start = start_column.saturating_sub(1) as usize;
                if start >= line_len {
                    line_len
                } else {
                    line_text
                        .chars()
                        .skip(start)
                        .position(is_boundary)
                        .map_or(line_len, |offset| start + offset)
                }
            }
        };

        to_column(end)
    }
}

fn is_boundary(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn to_column(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
