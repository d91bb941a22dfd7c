use async_trait::async_trait;
use ember_dns_domain::{DnsError, Question, ResourceRecord};

/// Upstream forwarding port.
///
/// Implementations own the socket, timeout and retry policy; the resolver
/// only awaits the outcome. This is the single suspension point in the
/// core. Failures must surface as an error (normally
/// [`DnsError::ForwardFailed`]) so the caller can decide whether to drop
/// or retry the query; the core never swallows them.
#[async_trait]
pub trait DnsForwarder: Send + Sync {
    /// Resolve `question` upstream, returning zero or more answer records.
    async fn forward(&self, question: &Question) -> Result<Vec<ResourceRecord>, DnsError>;
}
