#![no_main]

use libfuzzer_sys::fuzz_target;
use taint_highlight::{EndPolicy, SourceText, TraceParser};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // First half is the trace, second half the source
    let split = text
        .char_indices()
        .nth(text.chars().count() / 2)
        .map_or(text.len(), |(i, _)| i);
    let (trace, source) = text.split_at(split);
    let source = SourceText::new(source);

    for policy in [EndPolicy::NextBoundary, EndPolicy::LineEnd] {
        let report = TraceParser::with_policy(policy).parse_source_with_report(trace, &source);
        for region in &report.regions {
            assert!(region.column_start() <= region.column_end());
            assert!((region.line() as usize) < source.len());
        }
    }
});
