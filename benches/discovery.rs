//! Cost of one accepted discovery run, and of one rejected candidate.
//!
//! Run with: cargo bench --bench discovery

use criterion::{Criterion, criterion_group, criterion_main};
use fractals::core::discovery::interestingness::is_interesting;
use fractals::core::discovery::request::DiscoveryRequest;
use fractals::{ConfigurationSearch, DiscoveryLimits};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn request() -> DiscoveryRequest {
    DiscoveryRequest {
        current_palette: 0,
        drawable_width: 1280,
        drawable_height: 720,
    }
}

fn bench_discover(c: &mut Criterion) {
    let mut search =
        ConfigurationSearch::new(StdRng::seed_from_u64(7), DiscoveryLimits::default(), 5)
            .expect("default limits are valid");
    let request = request();

    c.bench_function("discovery/discover", |b| {
        b.iter(|| black_box(search.discover(&request)))
    });
}

fn bench_candidate_test(c: &mut Criterion) {
    let limits = DiscoveryLimits::default();
    let mut search = ConfigurationSearch::new(StdRng::seed_from_u64(11), limits, 5)
        .expect("default limits are valid");
    let request = request();

    c.bench_function("discovery/candidate_and_test", |b| {
        b.iter(|| {
            let candidate = search.candidate(&request);
            black_box(is_interesting(
                &candidate,
                limits.sample_grid,
                limits.min_distinct_ratio,
            ))
        })
    });
}

criterion_group!(benches, bench_discover, bench_candidate_test);
criterion_main!(benches);
