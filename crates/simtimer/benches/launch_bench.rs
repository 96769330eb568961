//! Criterion benchmark for launcher overhead on a no-op child.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p simtimer

use criterion::{criterion_group, criterion_main, Criterion};
use simtimer::prelude::*;

fn noop() -> LaunchSpec {
    if cfg!(windows) {
        LaunchSpec::new("cmd").args(["/C", "exit 0"])
    } else {
        LaunchSpec::new("true")
    }
}

fn bench_launch(c: &mut Criterion) {
    let mut group = c.benchmark_group("launch");
    group.sample_size(20);
    let spec = noop();
    group.bench_function("run_noop", |b| {
        let mut launcher = TimedLauncher::new(StdPlatform::new());
        b.iter(|| {
            let m = launcher.run(&spec).unwrap();
            criterion::black_box(m.elapsed_seconds)
        })
    });
    group.bench_function("spawn_failure", |b| {
        let mut launcher = TimedLauncher::new(StdPlatform::new());
        let missing = LaunchSpec::new("simtimer-no-such-simulator");
        b.iter(|| launcher.run(&missing).is_err())
    });
    group.finish();
}

criterion_group!(benches, bench_launch);
criterion_main!(benches);
