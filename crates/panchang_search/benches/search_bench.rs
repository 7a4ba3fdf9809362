use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_core::AnalyticEphemeris;
use panchang_search::{
    PanchangConfig, SearchDirection, SearchError, TransitionConfig, find_new_moon,
    find_transition, masa_for_moment, panchang_at_default_location,
};
use panchang_time::Moment;
use panchang_vedic_base::{Element, SiderealCalculator};

const JD: f64 = 2_461_004.270_83;

fn transition_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let calc = SiderealCalculator::new(&eph);
    let config = TransitionConfig::default();
    let elong = |jd: f64| -> Result<f64, SearchError> { Ok(calc.elongation(jd)?) };

    let mut group = c.benchmark_group("search_transition");
    group.sample_size(30);
    group.bench_function("tithi_end", |b| {
        b.iter(|| find_transition(black_box(JD), Element::Tithi, &elong, 5, &config))
    });
    group.bench_function("new_moon_backward", |b| {
        b.iter(|| find_new_moon(&calc, black_box(JD), SearchDirection::Backward, &config))
    });
    group.bench_function("masa", |b| {
        b.iter(|| masa_for_moment(&calc, black_box(JD), &config))
    });
    group.finish();
}

fn panchang_bench(c: &mut Criterion) {
    let config = PanchangConfig::default();
    let eph = config.ephemeris();

    let mut group = c.benchmark_group("panchang");
    group.sample_size(20);
    group.bench_function("panchang_for_moment", |b| {
        b.iter(|| panchang_at_default_location(&eph, black_box(Moment::from_jd_ut(JD)), &config))
    });
    let no_masa = PanchangConfig {
        include_masa: false,
        ..config
    };
    group.bench_function("panchang_without_masa", |b| {
        b.iter(|| panchang_at_default_location(&eph, black_box(Moment::from_jd_ut(JD)), &no_masa))
    });
    group.finish();
}

criterion_group!(benches, transition_bench, panchang_bench);
criterion_main!(benches);
