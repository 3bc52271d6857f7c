use cadence_core::models::{Ordinal, WeekdaySet};
use cadence_core::ordinal::{classify, next_occurrence, resolve};
use cadence_core::schedule::nearest_future_date;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn year_of_dates() -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..366).map(|offset| start + Duration::days(offset)).collect()
}

fn bench_resolve(c: &mut Criterion) {
    let month = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let mut group = c.benchmark_group("resolve");
    for ordinal in [Ordinal::First, Ordinal::Third, Ordinal::Last] {
        group.bench_with_input(
            BenchmarkId::new("ordinal", ordinal),
            &ordinal,
            |b, ordinal| {
                b.iter(|| resolve(black_box(month), black_box(*ordinal), black_box(Weekday::Wed)))
            },
        );
    }
    group.finish();
}

fn bench_classify_year(c: &mut Criterion) {
    let dates = year_of_dates();

    c.bench_function("classify_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(classify(black_box(*date), date.weekday()));
            }
        })
    });
}

fn bench_next_occurrence(c: &mut Criterion) {
    let from = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();

    c.bench_function("next_occurrence", |b| {
        b.iter(|| {
            next_occurrence(
                black_box(from),
                black_box(Ordinal::Third),
                black_box(Weekday::Wed),
            )
        })
    });
}

fn bench_nearest_future_date(c: &mut Criterion) {
    let from = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
    let days: WeekdaySet = vec![Weekday::Mon, Weekday::Fri].into_iter().collect();

    c.bench_function("nearest_future_date", |b| {
        b.iter(|| nearest_future_date(black_box(from), black_box(days)))
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_classify_year,
    bench_next_occurrence,
    bench_nearest_future_date
);
criterion_main!(benches);
