use criterion::{black_box, criterion_group, criterion_main, Criterion};

use maskkit_curves::{fill_curve, generate, interpret, CurveFamily, CurveSpec};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_hex_order_4", |b| {
        b.iter(|| generate(black_box(CurveFamily::Hex), black_box(4)).unwrap())
    });
}

fn bench_interpret(c: &mut Criterion) {
    let symbols = generate(CurveFamily::Hex, 4).unwrap();
    c.bench_function("interpret_hex_order_4", |b| {
        b.iter(|| interpret(black_box(&symbols), CurveFamily::Hex, 2.0).unwrap())
    });
}

fn bench_fill_curve(c: &mut Criterion) {
    let spec = CurveSpec {
        family: CurveFamily::Hex,
        order: 3,
        step: 2.0,
        trace_width: 0.8,
    };
    c.bench_function("fill_curve_hex_order_3", |b| {
        b.iter(|| fill_curve(black_box(&spec)).unwrap())
    });
}

criterion_group!(benches, bench_generate, bench_interpret, bench_fill_curve);
criterion_main!(benches);
