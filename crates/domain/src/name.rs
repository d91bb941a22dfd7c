use crate::errors::DnsError;
use std::fmt;
use std::str::FromStr;

/// Longest label the wire format can carry (6-bit length field).
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, per RFC 1035 section 2.3.4.
pub const MAX_NAME_LEN: usize = 255;

/// A domain name as an ordered sequence of ASCII labels.
///
/// The empty sequence is the root name. Comparison is case-sensitive, which
/// also makes cache keys case-sensitive; see `Question`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    /// The root name (zero labels).
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Build a name from raw labels, validating each one.
    ///
    /// Labels must be 1-63 bytes of ASCII. The decoder funnels everything it
    /// reads off the wire through here so the invariant holds crate-wide.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, DnsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut encoded_len = 1; // terminating zero byte
        for label in &labels {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(DnsError::MalformedMessage(format!(
                    "label length {} outside 1..={}",
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            if !label.is_ascii() {
                return Err(DnsError::MalformedMessage(format!(
                    "non-ascii bytes in label {label:?}"
                )));
            }
            encoded_len += 1 + label.len();
        }
        if encoded_len > MAX_NAME_LEN {
            return Err(DnsError::MalformedMessage(format!(
                "name length {encoded_len} exceeds {MAX_NAME_LEN}"
            )));
        }
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Bytes this name occupies when written without compression.
    pub fn encoded_len(&self) -> usize {
        1 + self
            .labels
            .iter()
            .map(|label| 1 + label.len())
            .sum::<usize>()
    }
}

impl fmt::Display for DomainName {
    /// Dotted form without a trailing dot; the root name prints empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for label in &self.labels {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{label}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = DnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        Self::from_labels(trimmed.split('.'))
    }
}
