use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use logo_grid_editor::core::HandleIndex;
use logo_grid_editor::path_data::{interpret, tokenize};
use logo_grid_editor::{handle_move, parse_path_data, parse_svg_document, ParsedSvg, Point, ViewBox};
use std::hint::black_box;
use std::sync::Arc;

fn bench_svg_parsing(c: &mut Criterion) {
    let svg_content = include_str!("../tests/fixtures/simple_logo.svg");

    c.bench_function("svg_parse_simple_logo", |b| {
        b.iter(|| {
            let doc = parse_svg_document(black_box(svg_content)).expect("SVG parse failed");
            black_box(doc.total_points())
        })
    });
}

/// Langer Pfad aus abwechselnden kubischen und glatten Kurven.
fn build_synthetic_path(curve_count: usize) -> String {
    let mut d = String::from("M0 0");
    for index in 0..curve_count {
        let x = index as f64 * 10.0;
        if index % 2 == 0 {
            d.push_str(&format!(" C{} 5 {} 5 {} 0", x + 3.0, x + 7.0, x + 10.0));
        } else {
            d.push_str(&format!(" s{} -5 {} 0", 7.0, 10.0));
        }
    }
    d
}

fn build_document(curve_count: usize) -> ParsedSvg {
    ParsedSvg {
        raw_svg: Arc::from(""),
        view_box: ViewBox::new(0.0, -10.0, curve_count as f64 * 10.0, 20.0),
        width: curve_count as f64 * 10.0,
        height: 20.0,
        paths: vec![Arc::new(parse_path_data(&build_synthetic_path(curve_count)))],
    }
}

fn bench_path_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_engine");

    for &curve_count in &[100usize, 10_000usize] {
        let d = build_synthetic_path(curve_count);
        let doc = build_document(curve_count);

        group.bench_with_input(BenchmarkId::new("tokenize", curve_count), &d, |b, d| {
            b.iter(|| black_box(tokenize(black_box(d)).len()))
        });

        let tokens = tokenize(&d);
        group.bench_with_input(
            BenchmarkId::new("interpret", curve_count),
            &tokens,
            |b, tokens| b.iter(|| black_box(interpret(black_box(tokens)).points.len())),
        );

        group.bench_with_input(
            BenchmarkId::new("handle_move", curve_count),
            &doc,
            |b, doc| {
                b.iter(|| {
                    let moved = handle_move(doc, 0, black_box(1), Point::new(4.0, 8.0));
                    black_box(moved.total_handles())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("handle_pick", curve_count),
            &doc,
            |b, doc| {
                let index = HandleIndex::from_document(doc);
                b.iter(|| black_box(index.pick(black_box(Point::new(503.0, 4.0)), 4.0)))
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_svg_parsing, bench_path_engine);
criterion_main!(core_benches);
