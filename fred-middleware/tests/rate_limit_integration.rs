use std::sync::Arc;
use std::time::Duration;

use fred_core::{Endpoint, FredApi, QueryParams};
use fred_middleware::{ApiBuilder, RateGate, RateLimitedApi};
use fred_mock::MockFred;
use fred_types::RateLimitConfig;
use tokio::time::Instant;

fn gate(capacity: u32, secs: u64) -> Arc<RateGate> {
    Arc::new(RateGate::new(RateLimitConfig::per_seconds(capacity, secs)))
}

#[tokio::test(start_paused = true)]
async fn extra_admission_waits_for_oldest_to_age_out() {
    let g = gate(3, 10);
    let start = Instant::now();

    for _ in 0..3 {
        assert_eq!(g.admit().await, Duration::ZERO);
    }
    tokio::time::advance(Duration::from_secs(4)).await;

    let waited = g.admit().await;
    let elapsed = start.elapsed();

    // The first admission was 4s ago; it leaves the window 6s from now.
    assert_eq!(waited, Duration::from_secs(6));
    assert!(elapsed >= Duration::from_secs(10));
    assert!(elapsed <= Duration::from_secs(10) + Duration::from_millis(5));
    // All three earlier admissions aged out together.
    assert_eq!(g.in_flight_window().await, 1);
}

#[tokio::test(start_paused = true)]
async fn concurrent_callers_are_spread_over_windows() {
    let g = gate(2, 1);
    let start = Instant::now();

    let mut handles = Vec::new();
    for _ in 0..5 {
        let g = Arc::clone(&g);
        handles.push(tokio::spawn(async move {
            g.admit().await;
            Instant::now()
        }));
    }
    let mut times = Vec::new();
    for h in handles {
        times.push(h.await.unwrap().duration_since(start));
    }
    times.sort();

    assert_eq!(times[0], Duration::ZERO);
    assert_eq!(times[1], Duration::ZERO);
    assert_eq!(times[2], Duration::from_secs(1));
    assert_eq!(times[3], Duration::from_secs(1));
    assert_eq!(times[4], Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn wrapper_gates_every_request() {
    let mock = Arc::new(MockFred::new());
    let g = gate(1, 30);
    let api = RateLimitedApi::new(mock.clone(), Arc::clone(&g));
    let start = Instant::now();

    api.request(Endpoint::Releases, QueryParams::new()).await.unwrap();
    api.fetch_series_info("GDP").await.unwrap();

    assert!(start.elapsed() >= Duration::from_secs(30));
    assert_eq!(mock.calls().await.len(), 2);
    assert_eq!(api.name(), "fred-mock");
}

#[tokio::test(start_paused = true)]
async fn builder_layers_and_shared_gate() {
    let mock = Arc::new(MockFred::new());
    let g = gate(2, 60);

    let builder = ApiBuilder::new(mock.clone())
        .with_rate_limit(RateLimitConfig::per_seconds(50, 1))
        .with_gate(Arc::clone(&g));
    let layers = builder.describe();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].0, "RateLimitedApi");
    assert_eq!(layers[0].1["capacity"], 2);
    assert_eq!(layers[1].0, "RawClient");

    let api = builder.build();
    api.request(Endpoint::Releases, QueryParams::new()).await.unwrap();
    assert_eq!(g.in_flight_window().await, 1);

    let bare = ApiBuilder::new(mock.clone()).with_rate_limit(RateLimitConfig::default()).without_rate_limit();
    assert_eq!(bare.describe().len(), 1);
}
