//! Trace parser - taint flow trace text to highlight regions
//!
//! Pure function over already-read text: no I/O, no state kept between
//! calls. Every failure is local to its segment; the loop records it and
//! moves on.

use tracing::debug;

use super::position_resolver::PositionResolver;
use super::segment::{parse_segment, split_segments};
use crate::config::{EndPolicy, HighlightConfig};
use crate::features::taint_trace::domain::{
    HighlightRegion, SegmentError, SourceText, TraceAnchor,
};
use crate::features::taint_trace::ports::{ParseReport, SkipReason, SkippedSegment};

/// Turns trace text into ordered highlight regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceParser {
    resolver: PositionResolver,
    label_prefix: String,
}

impl Default for TraceParser {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

impl TraceParser {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            resolver: PositionResolver::new(config.end_policy),
            label_prefix: config.label_prefix.clone(),
        }
    }

    /// Default labels, given end policy
    pub fn with_policy(policy: EndPolicy) -> Self {
        Self::new(&HighlightConfig::default().end_policy(policy))
    }

    pub fn policy(&self) -> EndPolicy {
        self.resolver.policy()
    }

    /// Per-segment anchors, in trace order, with failures kept as `Err`.
    ///
    /// Empty segments between delimiters are not yielded.
    pub fn anchors(
        trace_text: &str,
    ) -> impl Iterator<Item = (usize, &str, Result<TraceAnchor, SegmentError>)> {
        split_segments(trace_text).map(|(index, segment)| (index, segment, parse_segment(segment)))
    }

    /// Regions for `source_lines`, in trace order
    pub fn parse<L: AsRef<str>>(&self, trace_text: &str, source_lines: &[L]) -> Vec<HighlightRegion> {
        self.parse_source(trace_text, &SourceText::from_lines(source_lines))
    }

    pub fn parse_source(&self, trace_text: &str, source: &SourceText<'_>) -> Vec<HighlightRegion> {
        self.parse_source_with_report(trace_text, source).regions
    }

    /// Like `parse`, also returning the segments that were dropped
    pub fn parse_with_report<L: AsRef<str>>(
        &self,
        trace_text: &str,
        source_lines: &[L],
    ) -> ParseReport {
        self.parse_source_with_report(trace_text, &SourceText::from_lines(source_lines))
    }

    pub fn parse_source_with_report(&self, trace_text: &str, source: &SourceText<'_>) -> ParseReport {
        let mut report = ParseReport::default();

        for (index, segment, parsed) in Self::anchors(trace_text) {
            let reason = match parsed {
                Ok(anchor) => match self.close(&anchor, source) {
                    Some(region) => {
                        report.regions.push(region);
                        continue;
                    }
                    None => SkipReason::LineOutOfRange {
                        line: anchor.line(),
                        available: source.len(),
                    },
                },
                Err(err) => SkipReason::Malformed(err),
            };

            debug!("Skipping trace segment #{} ({}): {:?}", index, reason, segment);
            report.skipped.push(SkippedSegment {
                index,
                text: segment.to_string(),
                reason,
            });
        }

        debug!(
            "Parsed taint trace: {} regions, {} skipped segments (policy={})",
            report.regions.len(),
            report.skipped.len(),
            self.policy()
        );

        report
    }

    /// Close an anchor into a region; `None` when its line is not in `source`
    fn close(&self, anchor: &TraceAnchor, source: &SourceText<'_>) -> Option<HighlightRegion> {
        let line_text = source.line(anchor.line_index())?;
        let column_end = self.resolver.resolve_end(line_text, anchor.column());
        Some(HighlightRegion::from_anchor(
            anchor,
            column_end,
            &self.label_prefix,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: [&str; 3] = ["int a;", "int b;", "int c = tainted + 1;"];

    fn region(line: u32, start: u32, end: u32) -> (u32, u32, u32) {
        (line, start, end)
    }

    fn coords(regions: &[HighlightRegion]) -> Vec<(u32, u32, u32)> {
        regions
            .iter()
            .map(|r| (r.line(), r.column_start(), r.column_end()))
            .collect()
    }

    #[test]
    fn test_single_segment_next_boundary() {
        let parser = TraceParser::with_policy(EndPolicy::NextBoundary);
        let regions = parser.parse("{ ln: 3 cl: 5 fl: foo.c }", &SOURCE);

        assert_eq!(coords(&regions), vec![region(2, 4, 5)]);
        assert_eq!(regions[0].label(), "Tainted Path Segment: foo.c:3:5");
    }

    #[test]
    fn test_single_segment_inside_word() {
        let parser = TraceParser::with_policy(EndPolicy::NextBoundary);
        let regions = parser.parse("{ ln: 3 cl: 9 fl: foo.c }", &SOURCE);
        assert_eq!(coords(&regions), vec![region(2, 8, 15)]);
    }

    #[test]
    fn test_single_segment_line_end() {
        let parser = TraceParser::with_policy(EndPolicy::LineEnd);
        let regions = parser.parse("{ ln: 3 cl: 5 fl: foo.c }", &SOURCE);
        assert_eq!(coords(&regions), vec![region(2, 4, 20)]);
    }

    #[test]
    fn test_segments_keep_trace_order() {
        let trace = "{ ln: 3 cl: 9 fl: foo.c } --> { ln: 1 cl: 5 fl: foo.c } --> { ln: 2 cl: 1 fl: foo.c }";
        let regions = TraceParser::default().parse(trace, &SOURCE);

        assert_eq!(
            coords(&regions),
            vec![region(2, 8, 15), region(0, 4, 6), region(1, 0, 3)]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let trace = "{ ln: 1 cl: 1 fl: a.c } --> { ln: 1 cl: 1 fl: a.c }";
        let regions = TraceParser::default().parse(trace, &SOURCE);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], regions[1]);
    }

    #[test]
    fn test_out_of_range_line_is_dropped() {
        let trace = "{ ln: 1 cl: 1 fl: a.c } --> { ln: 4 cl: 1 fl: a.c } --> { ln: 2 cl: 1 fl: a.c }";
        let report = TraceParser::default().parse_with_report(trace, &SOURCE);

        assert_eq!(coords(&report.regions), vec![region(0, 0, 3), region(1, 0, 3)]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::LineOutOfRange {
                line: 4,
                available: 3
            }
        );
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let trace = "garbage --> { ln: 1 cl: 2 } --> { ln: 2 cl: 1 fl: a.c } --> { ln: 1 cl: 1 fl: a.c";
        let report = TraceParser::default().parse_with_report(trace, &SOURCE);

        assert_eq!(coords(&report.regions), vec![region(1, 0, 3)]);
        let reasons: Vec<_> = report.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::Malformed(SegmentError::NotBracketed),
                SkipReason::Malformed(SegmentError::PatternMismatch),
                SkipReason::Malformed(SegmentError::NotBracketed),
            ]
        );
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        let parser = TraceParser::default();
        assert!(parser.parse("", &SOURCE).is_empty());
        assert!(parser.parse("   \n", &SOURCE).is_empty());
        assert!(parser.parse("-->-->", &SOURCE).is_empty());
        assert!(parser.parse("no segments here", &SOURCE).is_empty());

        let report = parser.parse_with_report("-->  -->", &SOURCE);
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_source() {
        let no_lines: [&str; 0] = [];
        let parser = TraceParser::default();
        assert!(parser.parse("{ ln: 1 cl: 1 fl: a.c }", &no_lines).is_empty());
    }

    #[test]
    fn test_parse_source_text() {
        let source = SourceText::new("int a;\r\nchar *p = getenv(\"X\");\r\n");
        let regions = TraceParser::with_policy(EndPolicy::LineEnd)
            .parse_source("{ ln: 2 cl: 7 fl: a.c }", &source);
        assert_eq!(coords(&regions), vec![region(1, 6, 22)]);
    }

    #[test]
    fn test_caller_split_lines_measured_verbatim() {
        let lines = ["abc\r"];
        let regions = TraceParser::with_policy(EndPolicy::LineEnd)
            .parse("{ ln: 1 cl: 1 fl: a.c }", &lines);
        assert_eq!(coords(&regions), vec![region(0, 0, 4)]);
    }

    #[test]
    fn test_custom_label_prefix() {
        let config = HighlightConfig::default().label_prefix("Taint");
        let regions = TraceParser::new(&config).parse("{ ln: 2 cl: 5 fl: lib/x.c }", &SOURCE);
        assert_eq!(regions[0].label(), "Taint: lib/x.c:2:5");
    }

    #[test]
    fn test_anchors_expose_per_segment_results() {
        let results: Vec<_> = TraceParser::anchors("{ ln: 1 cl: 1 fl: a.c } --> oops")
            .map(|(index, _, parsed)| (index, parsed.is_ok()))
            .collect();
        assert_eq!(results, vec![(0, true), (1, false)]);
    }

    #[test]
    fn test_parse_is_repeatable() {
        let trace = "{ ln: 3 cl: 9 fl: foo.c } --> bad --> { ln: 1 cl: 1 fl: foo.c }";
        let parser = TraceParser::default();
        assert_eq!(
            parser.parse_with_report(trace, &SOURCE),
            parser.parse_with_report(trace, &SOURCE)
        );
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TraceParser>();
        assert_send_sync::<PositionResolver>();
    }
}
