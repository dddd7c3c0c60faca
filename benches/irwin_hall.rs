use criterion::{criterion_group, criterion_main, Criterion};
use uniform_sum::stats::irwin_hall::{cumulative_probability, density};
use uniform_sum::{ContinuousDistribution, IrwinHall};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn points(n: u64, count: usize) -> Vec<f64> {
    (0..count).map(|i| n as f64 * (i as f64 + 0.5) / count as f64).collect()
}

// ---------------------------------------------------------------------------
// Pointwise
// ---------------------------------------------------------------------------

fn pointwise(c: &mut Criterion) {
    let mut g = c.benchmark_group("pointwise");

    for n in [2u64, 10, 30] {
        let d = IrwinHall::<f64>::new(n).unwrap();
        let x = n as f64 * 0.4;
        g.bench_function(format!("pdf_n{n}"), |b| {
            b.iter(|| d.pdf(std::hint::black_box(x)))
        });
        g.bench_function(format!("cdf_n{n}"), |b| {
            b.iter(|| d.cdf(std::hint::black_box(x)))
        });
    }

    g.bench_function("quantile_n10", |b| {
        let d = IrwinHall::<f64>::new(10).unwrap();
        b.iter(|| d.quantile(std::hint::black_box(0.9)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Slice-level
// ---------------------------------------------------------------------------

fn slices(c: &mut Criterion) {
    let mut g = c.benchmark_group("slice_1000");

    let xs = points(10, 1000);
    g.bench_function("density_n10", |b| {
        b.iter(|| density(std::hint::black_box(&xs), 10).unwrap())
    });
    g.bench_function("cumulative_probability_n10", |b| {
        b.iter(|| cumulative_probability(std::hint::black_box(&xs), 10).unwrap())
    });

    g.finish();
}

criterion_group!(benches, pointwise, slices);
criterion_main!(benches);
