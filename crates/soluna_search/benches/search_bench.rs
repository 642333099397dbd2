use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use soluna_core::GeoLocation;
use soluna_search::{DEFAULT_SUN_TIMES, MoonTimesConfig, moon_crossing_hours, moon_times, sun_times};

fn sun_times_bench(c: &mut Criterion) {
    let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let location = GeoLocation::new(50.5, 30.5, 0.0);

    let mut group = c.benchmark_group("search_sun_times");
    group.bench_function("default_table", |b| {
        b.iter(|| {
            sun_times(
                black_box(&instant),
                black_box(&location),
                black_box(&DEFAULT_SUN_TIMES),
            )
            .expect("should succeed")
        })
    });
    group.finish();
}

fn moon_times_bench(c: &mut Criterion) {
    let day = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
    let location = GeoLocation::new(50.5, 30.5, 0.0);
    let config = MoonTimesConfig::default();

    let mut group = c.benchmark_group("search_moon_times");
    group.bench_function("moon_times", |b| {
        b.iter(|| {
            moon_times(black_box(&day), black_box(&location), black_box(&config))
                .expect("should succeed")
        })
    });
    group.bench_function("crossing_scan_synthetic", |b| {
        b.iter(|| moon_crossing_hours(|h| black_box(h - 12.3) * 0.01))
    });
    group.finish();
}

criterion_group!(benches, sun_times_bench, moon_times_bench);
criterion_main!(benches);
