use super::cursor::ByteCursor;
use super::name::{self, CompressionMap};
use bytes::Bytes;
use ember_dns_domain::{DnsError, ResourceRecord};

/// Read one resource record.
///
/// The TTL is clamped to `max_ttl` so a hostile or misconfigured upstream
/// cannot pin a cache entry for an unbounded time.
pub fn read_record(cursor: &mut ByteCursor<'_>, max_ttl: u32) -> Result<ResourceRecord, DnsError> {
    let rname = name::read_name(cursor)?;
    let rtype = cursor.read_u16()?;
    let rclass = cursor.read_u16()?;
    let ttl = cursor.read_u32()?.min(max_ttl);
    let rdlength = usize::from(cursor.read_u16()?);
    let rdata = Bytes::copy_from_slice(cursor.read_slice(rdlength)?);
    Ok(ResourceRecord::new(rname, rtype, rclass, ttl, rdata))
}

pub fn write_record(record: &ResourceRecord, compression: &mut CompressionMap, out: &mut Vec<u8>) {
    name::write_name(&record.name, compression, out);
    out.extend_from_slice(&record.rtype.to_be_bytes());
    out.extend_from_slice(&record.rclass.to_be_bytes());
    out.extend_from_slice(&record.ttl.to_be_bytes());
    out.extend_from_slice(&(record.rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(&record.rdata);
}
