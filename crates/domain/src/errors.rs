use thiserror::Error;

/// Errors surfaced by the DNS core.
///
/// Decode errors are terminal for the message that produced them. The core
/// never panics on hostile input; callers decide per kind whether to drop
/// the packet, retry, or propagate.
#[derive(Error, Debug)]
pub enum DnsError {
    /// The buffer ended before the sections declared by the header were read.
    #[error("Truncated message: {0}")]
    TruncatedMessage(&'static str),

    /// Structurally invalid wire data: bad label length, unrecognized label
    /// code, cyclic or out-of-range compression pointer, missing question.
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// The upstream forwarding collaborator failed or timed out. Surfaced
    /// as-is; the core performs no retries.
    #[error("Upstream forward failed: {0}")]
    ForwardFailed(String),
}

impl DnsError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedMessage(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedMessage(_))
    }
}
