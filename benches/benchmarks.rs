//! Benchmark suite for Reframe.
//!
//! This module provides performance benchmarks for:
//! - Command and code-block extraction from a single document
//! - Full analysis over generated document trees
//! - Guide rendering
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench -- --save-baseline main
//! cargo bench -- --baseline main
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reframe::analyzer::{extract_code_examples, ContentAnalyzer, MentionPattern};
use reframe::config::ReframeConfig;
use reframe::domains::COMMAND_DOMAINS;
use reframe::generator::render_guide;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Fixtures
// ============================================================================

/// A document declaring `commands` tools, each followed by a code block.
fn document(commands: usize) -> String {
    let mut content = String::from("# Commands to Master\n\n");
    for (name, _) in COMMAND_DOMAINS.iter().cycle().take(commands) {
        content.push_str(&format!("- `{name}` - what {name} does\n"));
        content.push_str(&format!("\n```bash\n{name} --help\n{name} -v\n```\n\n"));
    }
    content
}

fn create_topics(files: usize) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for i in 0..files {
        let path = temp.path().join(format!("topics/section-{}/doc-{i}.md", i % 5));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, document(8)).unwrap();
    }
    temp
}

// ============================================================================
// Extraction Benchmarks
// ============================================================================

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let pattern = MentionPattern::new().unwrap();

    for commands in [10, 50, 200] {
        let content = document(commands);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("commands", commands),
            &content,
            |b, content| {
                b.iter(|| black_box(pattern.extract(black_box(content), Path::new("a.md"))))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("code_examples", commands),
            &content,
            |b, content| b.iter(|| black_box(extract_code_examples(black_box(content)))),
        );
    }

    group.finish();
}

// ============================================================================
// Analysis Benchmarks
// ============================================================================

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for files in [10, 50, 100] {
        let temp = create_topics(files);
        let config = ReframeConfig::default().with_source_dir(temp.path().join("topics"));

        group.throughput(Throughput::Elements(files as u64));
        group.bench_with_input(BenchmarkId::new("analyze", files), &config, |b, config| {
            b.iter(|| {
                let analyzer = ContentAnalyzer::new(config.clone());
                black_box(analyzer.analyze().unwrap())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let temp = create_topics(20);
    let config = ReframeConfig::default().with_source_dir(temp.path().join("topics"));
    let analysis = ContentAnalyzer::new(config).analyze().unwrap();

    c.bench_function("render_all_guides", |b| {
        b.iter(|| {
            for domain in analysis.domains.values() {
                black_box(render_guide(domain));
            }
        });
    });
}

criterion_group!(benches, bench_extraction, bench_analysis, bench_rendering);
criterion_main!(benches);
