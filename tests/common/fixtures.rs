#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ember_dns_application::ports::{Clock, DnsForwarder};
use ember_dns_domain::question::{QCLASS_IN, QTYPE_A};
use ember_dns_domain::{DnsError, Question, ResourceRecord};
use ember_dns_infrastructure::dns::wire::TRAILER_LEN;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn example() -> &'static str {
        "example.com"
    }

    pub fn cloudflare() -> &'static str {
        "cloudflare.com"
    }
}

/// Common test addresses (TEST-NET-3 and documentation ranges)
pub struct TestIps;

impl TestIps {
    pub fn example_ip() -> [u8; 4] {
        [93, 184, 216, 34]
    }

    pub fn cloudflare_ip() -> [u8; 4] {
        [104, 16, 132, 229]
    }
}

/// Deterministic clock the flows advance by hand.
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn at(secs: u64) -> Arc<Self> {
        Arc::new(Self(AtomicU64::new(secs)))
    }

    pub fn advance(&self, secs: u64) {
        self.0.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Upstream double standing in for the socket-owning forwarder.
pub struct UpstreamMock {
    answers: Vec<ResourceRecord>,
    calls: AtomicUsize,
}

impl UpstreamMock {
    pub fn answering(answers: Vec<ResourceRecord>) -> Self {
        Self {
            answers,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsForwarder for UpstreamMock {
    async fn forward(&self, _question: &Question) -> Result<Vec<ResourceRecord>, DnsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answers.clone())
    }
}

pub fn a_question(name: &str) -> Question {
    Question::new(name.parse().unwrap(), QTYPE_A, QCLASS_IN)
}

pub fn a_record(name: &str, ttl: u32, addr: [u8; 4]) -> ResourceRecord {
    ResourceRecord::new(
        name.parse().unwrap(),
        QTYPE_A,
        QCLASS_IN,
        ttl,
        Bytes::copy_from_slice(&addr),
    )
}

/// One well-formed A query datagram, RD set, zeroed trailer.
pub fn query_packet(id: u16, name: &str) -> Vec<u8> {
    let mut wire = Vec::new();
    wire.extend_from_slice(&id.to_be_bytes());
    wire.extend_from_slice(&[0x01, 0x00]);
    wire.extend_from_slice(&[0x00, 0x01]);
    wire.extend_from_slice(&[0x00, 0x00]);
    wire.extend_from_slice(&[0x00, 0x00]);
    wire.extend_from_slice(&[0x00, 0x00]);
    for label in name.split('.') {
        wire.push(label.len() as u8);
        wire.extend_from_slice(label.as_bytes());
    }
    wire.push(0);
    wire.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    wire.extend_from_slice(&[0u8; TRAILER_LEN]);
    wire
}

/// Install a compact subscriber so flow logs are visible under
/// `RUST_LOG=debug`; safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
