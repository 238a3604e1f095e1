use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_calendar::LocalCalendar;
use sizhu_core::{BirthInput, Gender, analyze, compute_chart, month_pillar, year_pillar};
use sizhu_tables::Pillar;

fn pillar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillars");
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(1993))));
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(1993), black_box(7)))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let pillars = [
        Pillar::from_sexagenary(16),
        Pillar::from_sexagenary(27),
        Pillar::from_sexagenary(54),
        Pillar::from_sexagenary(3),
    ];
    c.bench_function("analyze", |b| b.iter(|| analyze(black_box(&pillars))));
}

fn chart_bench(c: &mut Criterion) {
    let cal = LocalCalendar::new();
    let input = BirthInput {
        year: 1993,
        month: 7,
        day: 21,
        hour: 4,
        gender: Gender::Female,
        time_unknown: false,
    };
    c.bench_function("compute_chart_local", |b| {
        b.iter(|| compute_chart(&cal, black_box(&input)))
    });
}

criterion_group!(benches, pillar_bench, analysis_bench, chart_bench);
criterion_main!(benches);
