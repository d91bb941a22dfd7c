//! TTL behavior across the whole pipeline with a hand-stepped clock.

#[path = "../common/fixtures.rs"]
mod fixtures;

use ember_dns_infrastructure::dns::wire::Message;
use ember_dns_infrastructure::dns::{RecordCache, Resolver};
use fixtures::{a_record, init_tracing, query_packet, ManualClock, TestDomains, TestIps, UpstreamMock};
use std::sync::Arc;

#[tokio::test]
async fn test_entry_expires_at_ttl_boundary() {
    init_tracing();

    let clock = ManualClock::at(50_000);
    let resolver = Resolver::new(Arc::new(RecordCache::new(clock.clone())));
    let upstream = UpstreamMock::answering(vec![a_record(
        TestDomains::example(),
        300,
        TestIps::example_ip(),
    )]);
    let request = Message::decode(&query_packet(1, TestDomains::example())).unwrap();

    resolver.resolve(&request, &upstream).await.unwrap();
    assert_eq!(upstream.calls(), 1);

    // One second before expiry: still served from cache.
    clock.advance(299);
    resolver.resolve(&request, &upstream).await.unwrap();
    assert_eq!(upstream.calls(), 1);

    // Past expiry: entry is evicted and the upstream is asked again.
    clock.advance(2);
    resolver.resolve(&request, &upstream).await.unwrap();
    assert_eq!(upstream.calls(), 2);
    assert_eq!(
        resolver.cache().metrics().lazy_evictions.load(std::sync::atomic::Ordering::Relaxed),
        1
    );
}

#[tokio::test]
async fn test_zero_ttl_answer_is_never_served_from_cache() {
    init_tracing();

    let clock = ManualClock::at(50_000);
    let resolver = Resolver::new(Arc::new(RecordCache::new(clock)));
    let upstream = UpstreamMock::answering(vec![a_record(
        TestDomains::example(),
        0,
        TestIps::example_ip(),
    )]);
    let request = Message::decode(&query_packet(1, TestDomains::example())).unwrap();

    resolver.resolve(&request, &upstream).await.unwrap();
    resolver.resolve(&request, &upstream).await.unwrap();
    assert_eq!(upstream.calls(), 2);
}

#[tokio::test]
async fn test_refreshed_entry_restarts_its_ttl() {
    init_tracing();

    let clock = ManualClock::at(50_000);
    let resolver = Resolver::new(Arc::new(RecordCache::new(clock.clone())));
    let upstream = UpstreamMock::answering(vec![a_record(
        TestDomains::example(),
        300,
        TestIps::example_ip(),
    )]);
    let request = Message::decode(&query_packet(1, TestDomains::example())).unwrap();

    resolver.resolve(&request, &upstream).await.unwrap();
    clock.advance(301);
    // Miss refills the cache with a fresh 300s lease...
    resolver.resolve(&request, &upstream).await.unwrap();
    assert_eq!(upstream.calls(), 2);

    // ...so a lookup 299s later is a hit again.
    clock.advance(299);
    resolver.resolve(&request, &upstream).await.unwrap();
    assert_eq!(upstream.calls(), 2);
}
