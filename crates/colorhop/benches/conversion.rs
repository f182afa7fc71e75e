use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colorhop::{Color, ColorModel, ConvertibleColor, Lchuv, Rgb};

pub fn run_benchmarks(c: &mut Criterion) {
    let blue = Rgb::new(0.19215686274509805, 0.47058823529411764, 0.9176470588235294);
    let lchuv = Lchuv::new(52.38930398582019, 100.87558261737823, 255.3574037066164);

    let mut group = c.benchmark_group("conversion");

    group.bench_function("rgb-to-lchuv", |b| b.iter(|| black_box(blue).to_lchuv()));
    group.bench_function("lchuv-to-rgb", |b| b.iter(|| black_box(lchuv).to_rgb()));
    group.bench_function("lchuv-to-hsl", |b| b.iter(|| black_box(lchuv).to_hsl()));
    group.bench_function("rgb-to-ansi256", |b| {
        b.iter(|| black_box(blue).to_ansi256())
    });

    let color = Color::from(lchuv);
    group.bench_function("dynamic-all-models", |b| {
        b.iter(|| {
            for target in ColorModel::ALL {
                black_box(black_box(color).to(target));
            }
        })
    });

    group.bench_function("parse-hex", |b| {
        b.iter(|| black_box("#3178ea").parse::<Rgb>())
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
