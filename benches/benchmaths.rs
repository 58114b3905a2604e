use criterion::{black_box, criterion_group, criterion_main, Criterion};
use calc::evaluate_expression;
use calc::test_impls::scan_eval;

pub fn maths1_benchmark(c: &mut Criterion) {
    c.bench_function("(1 + 2) * 4", |b| {
        b.iter(|| evaluate_expression(black_box("(1 + 2) * 4")))
    });

    let long = vec!["12 * (3 + 4) / 5"; 200].join(" - ");
    c.bench_function("long chain", |b| b.iter(|| scan_eval(black_box(&long))));
}
criterion_group!(benches, maths1_benchmark);
criterion_main!(benches);
