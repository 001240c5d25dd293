//! Performance benchmarks for trace parsing
//!
//! Traces from real analysis runs reach a few thousand segments; parsing
//! must stay well below editor-interaction latency.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use taint_highlight::{EndPolicy, PositionResolver, SourceText, TraceParser};

fn synthetic_source(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("    int v{i} = tainted_{i} + compute(v{i}, buffer);\n"))
        .collect()
}

fn synthetic_trace(segments: usize, lines: usize) -> String {
    (0..segments)
        .map(|i| format!("{{ ln: {} cl: {} fl: src/file.c }}", i % lines + 1, 9 + i % 20))
        .collect::<Vec<_>>()
        .join(" --> ")
}

// ============================================================================
// Parse Loop
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let source = synthetic_source(2000);
    let source_text = SourceText::new(&source);

    for segments in [10usize, 100, 1000, 5000] {
        let trace = synthetic_trace(segments, 2000);
        group.throughput(Throughput::Elements(segments as u64));

        for policy in [EndPolicy::NextBoundary, EndPolicy::LineEnd] {
            let parser = TraceParser::with_policy(policy);
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), segments),
                &trace,
                |b, trace| b.iter(|| black_box(parser.parse_source(trace, &source_text))),
            );
        }
    }

    group.finish();
}

fn bench_malformed_heavy(c: &mut Criterion) {
    let source = synthetic_source(100);
    let source_text = SourceText::new(&source);
    let trace = (0..1000)
        .map(|i| {
            if i % 2 == 0 {
                format!("{{ ln: {} cl: 3 }}", i % 100 + 1)
            } else {
                format!("{{ ln: {} cl: 3 fl: a.c }}", i % 100 + 1)
            }
        })
        .collect::<Vec<_>>()
        .join(" --> ");
    let parser = TraceParser::default();

    c.bench_function("parse_with_report_half_malformed", |b| {
        b.iter(|| black_box(parser.parse_source_with_report(&trace, &source_text)))
    });
}

// ============================================================================
// Resolver
// ============================================================================

fn bench_resolver(c: &mut Criterion) {
    let line = "x".repeat(4000);
    let resolver = PositionResolver::new(EndPolicy::NextBoundary);

    c.bench_function("resolve_end_long_line", |b| {
        b.iter(|| black_box(resolver.resolve_end(black_box(&line), 1)))
    });
}

criterion_group!(benches, bench_parse, bench_malformed_heavy, bench_resolver);
criterion_main!(benches);
