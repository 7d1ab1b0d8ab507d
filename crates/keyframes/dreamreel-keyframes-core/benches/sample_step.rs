use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dreamreel_keyframes_core::{Interpolator, Keyframe};

/// Dense-ish timeline: `frames` keyframes, each touching a rotating subset of
/// `fields` fields so forward-fill is exercised.
fn timeline(frames: usize, fields: usize) -> Interpolator {
    let keyframes: Vec<Keyframe> = (0..frames)
        .map(|i| {
            let mut kf = Keyframe::new(i as f64 * 0.1);
            for f in (0..fields).filter(|f| (f + i) % 3 != 0) {
                kf.set(format!("field_{f}"), (i * f) as f64);
            }
            kf
        })
        .collect();
    Interpolator::new(&keyframes).expect("bench timeline should build")
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for &frames in &[4usize, 64, 1024] {
        let interp = timeline(frames, 16);
        let end = interp.end();

        group.bench_with_input(BenchmarkId::new("map", frames), &interp, |b, interp| {
            let mut t = 0.0;
            b.iter(|| {
                t = (t + 0.013) % end;
                black_box(interp.sample(black_box(t)))
            })
        });

        group.bench_with_input(BenchmarkId::new("into", frames), &interp, |b, interp| {
            let mut t = 0.0;
            let mut row = Vec::with_capacity(interp.field_count());
            b.iter(|| {
                t = (t + 0.013) % end;
                interp.sample_into(black_box(t), &mut row);
                black_box(row.as_slice());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
