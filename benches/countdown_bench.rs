// Benchmark for countdown ticks
// Measures the per-tick cost of calculating, formatting and offset parsing

use chrono::{Duration, TimeZone, Utc};
use countdown_page::services::countdown::{
    calculate_time_remaining, format_time_remaining, resolve_target,
};
use countdown_page::utils::date::split_offset;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    for days in [0i64, 3, 400].iter() {
        let target = now + Duration::days(*days) + Duration::seconds(3_723);
        group.bench_with_input(BenchmarkId::from_parameter(days), &target, |b, &target| {
            b.iter(|| {
                let remaining = calculate_time_remaining(black_box(target), black_box(now));
                format_time_remaining(&remaining, black_box(true))
            });
        });
    }

    group.finish();
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("offsets");

    for raw in ["2025-06-01T10:00:00+05:30", "2025-06-01T10:00:00Z", "2025-06-01T10:00:00"].iter() {
        group.bench_with_input(BenchmarkId::new("split", raw), raw, |b, raw| {
            b.iter(|| split_offset(black_box(raw)));
        });
        group.bench_with_input(BenchmarkId::new("resolve", raw), raw, |b, raw| {
            b.iter(|| resolve_target(black_box(raw), &Utc));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_offsets);
criterion_main!(benches);
