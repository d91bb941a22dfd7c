use crate::name::DomainName;
use bytes::Bytes;

/// A resource record with its rdata kept as raw wire bytes.
///
/// The rdata is opaque to the core: address records, CNAMEs and anything
/// else pass through unexamined. Its length must fit the 16-bit RDLENGTH
/// wire field; the decoder guarantees this for anything read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rtype: u16,
    pub rclass: u16,
    /// Remaining validity in seconds at the time the record was received.
    pub ttl: u32,
    pub rdata: Bytes,
}

impl ResourceRecord {
    pub fn new(name: DomainName, rtype: u16, rclass: u16, ttl: u32, rdata: Bytes) -> Self {
        debug_assert!(rdata.len() <= u16::MAX as usize);
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        }
    }

    /// Records with empty rdata carry no answer data and are not cached.
    pub fn has_data(&self) -> bool {
        !self.rdata.is_empty()
    }

    /// Whether the record is past its TTL, `elapsed_secs` after creation.
    pub fn is_expired(&self, elapsed_secs: u64) -> bool {
        elapsed_secs >= u64::from(self.ttl)
    }
}
