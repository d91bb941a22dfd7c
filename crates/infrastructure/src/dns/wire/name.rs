use super::cursor::ByteCursor;
use ember_dns_domain::{DnsError, DomainName};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Both high bits set marks a 2-byte compression pointer.
const POINTER_TAG: u8 = 0b1100_0000;

/// Largest offset a 14-bit pointer can address.
const MAX_POINTER_TARGET: usize = 0x3FFF;

/// Offsets of names already written into one output buffer, keyed by their
/// dotted form. Shared across all sections of a message so a name repeated
/// in question and answer compresses to the same back-reference.
pub type CompressionMap = FxHashMap<String, u16>;

/// Read a length-prefixed label sequence, following compression pointers.
///
/// The caller's cursor advances past exactly the bytes the name occupies in
/// place: for a pointered name that is the 2 pointer bytes, regardless of
/// how much earlier message data the pointer chain walks.
///
/// Two guards keep hostile chains from looping forever: a pointer must
/// target an offset strictly below its own, and no offset may be visited
/// twice while reading one name. Violations are `MalformedMessage`.
pub fn read_name<'a>(cursor: &mut ByteCursor<'a>) -> Result<DomainName, DnsError> {
    let mut labels: Vec<String> = Vec::new();
    let mut visited: SmallVec<[usize; 8]> = SmallVec::new();
    let mut jumped: Option<ByteCursor<'a>> = None;

    loop {
        let cur: &mut ByteCursor<'a> = match jumped.as_mut() {
            Some(inner) => inner,
            None => &mut *cursor,
        };

        let len_pos = cur.position();
        let len = cur.read_u8()?;

        if len == 0 {
            break;
        }

        if len & POINTER_TAG == POINTER_TAG {
            let low = cur.read_u8()?;
            let target = usize::from(len & !POINTER_TAG) << 8 | usize::from(low);
            if target >= len_pos {
                return Err(DnsError::MalformedMessage(format!(
                    "compression pointer at offset {len_pos} targets {target}, not prior data"
                )));
            }
            if visited.contains(&target) {
                return Err(DnsError::MalformedMessage(format!(
                    "compression pointer chain revisits offset {target}"
                )));
            }
            visited.push(target);
            let next = cur.seek_to(target)?;
            jumped = Some(next);
            continue;
        }

        if len & POINTER_TAG != 0 {
            return Err(DnsError::MalformedMessage(format!(
                "unrecognized label code {len:#04x} at offset {len_pos}"
            )));
        }

        let raw = cur.read_slice(usize::from(len))?;
        if !raw.is_ascii() {
            return Err(DnsError::MalformedMessage(format!(
                "non-ascii bytes in label at offset {len_pos}"
            )));
        }
        labels.push(String::from_utf8_lossy(raw).into_owned());
    }

    DomainName::from_labels(labels)
}

/// Write `name` to `out`, compressing against `compression`.
///
/// A name whose dotted form was already written is emitted as a 2-byte
/// pointer. Otherwise the labels go out length-prefixed with a zero
/// terminator, and the name is registered at its starting offset. Offsets
/// beyond 14 bits cannot be pointed to, so names starting there stay
/// unregistered and later occurrences are written in full again.
pub fn write_name(name: &DomainName, compression: &mut CompressionMap, out: &mut Vec<u8>) {
    if name.is_root() {
        out.push(0);
        return;
    }

    let dotted = name.to_string();
    if let Some(&offset) = compression.get(&dotted) {
        out.push(POINTER_TAG | (offset >> 8) as u8);
        out.push((offset & 0xFF) as u8);
        return;
    }

    let position = out.len();
    for label in name.labels() {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);

    if position <= MAX_POINTER_TARGET {
        compression.insert(dotted, position as u16);
    }
}
