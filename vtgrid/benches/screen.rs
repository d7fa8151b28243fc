//! Engine benchmarks: byte streams through the full render path

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vtgrid::{Dimensions, KeyEncoding, NullSink, Terminal};

fn engine() -> Terminal<NullSink> {
    Terminal::new(Dimensions::default(), KeyEncoding::Vt100, NullSink).expect("dimensions")
}

fn bench_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    let text = "Hello, World! ".repeat(100);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("print_chars", |b| {
        b.iter(|| {
            let mut term = engine();
            term.render(black_box(text.as_bytes()));
            black_box(term)
        })
    });

    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    let mut input = String::new();
    for i in 0..100 {
        input.push_str(&format!("Line {}: Some text content here\r\n", i));
    }
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("scroll", |b| {
        b.iter(|| {
            let mut term = engine();
            term.render(black_box(input.as_bytes()));
            black_box(term)
        })
    });

    group.finish();
}

fn bench_csi_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    let input = "\x1b[H\x1b[2J\x1b[1;31mHello\x1b[0m".repeat(100);
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("csi_apply", |b| {
        b.iter(|| {
            let mut term = engine();
            term.render(black_box(input.as_bytes()));
            black_box(term)
        })
    });

    group.finish();
}

fn bench_full_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen");

    // A full-screen repaint the way a fullscreen application produces one:
    // position to each row, then overwrite it end to end.
    let mut input = String::new();
    for row in 1..=25 {
        input.push_str(&format!("\x1b[{};1H", row));
        input.push_str(&"X".repeat(80));
    }
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("full_redraw", |b| {
        b.iter(|| {
            let mut term = engine();
            term.render(black_box(input.as_bytes()));
            black_box(term)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_print,
    bench_scroll,
    bench_csi_apply,
    bench_full_redraw
);

criterion_main!(benches);
