use super::cursor::ByteCursor;
use ember_dns_domain::DnsError;

/// The fixed header is always 12 bytes.
pub const HEADER_LEN: usize = 12;

/// QR bit: query (0) or response (1).
const FLAG_QR: u16 = 0x8000;
/// RA bit: recursion available.
const FLAG_RA: u16 = 0x0080;

/// The six big-endian 16-bit fields of the message header.
///
/// Authority and additional counts are carried through unexamined; the
/// sections they describe are opaque to this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, DnsError> {
        Ok(Self {
            id: cursor.read_u16()?,
            flags: cursor.read_u16()?,
            question_count: cursor.read_u16()?,
            answer_count: cursor.read_u16()?,
            authority_count: cursor.read_u16()?,
            additional_count: cursor.read_u16()?,
        })
    }

    /// Derive the header of a response to `request`.
    ///
    /// The id, question count and pass-through counts are copied; QR and RA
    /// are raised (a standard recursion-desired query yields the 0x81 0x80
    /// flag bytes); the answer count is rewritten to the number of answers
    /// actually included, never copied from the request.
    pub fn response_to(request: &Header, answer_count: u16) -> Self {
        Self {
            id: request.id,
            flags: request.flags | FLAG_QR | FLAG_RA,
            question_count: request.question_count,
            answer_count,
            authority_count: request.authority_count,
            additional_count: request.additional_count,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&self.question_count.to_be_bytes());
        out.extend_from_slice(&self.answer_count.to_be_bytes());
        out.extend_from_slice(&self.authority_count.to_be_bytes());
        out.extend_from_slice(&self.additional_count.to_be_bytes());
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }
}
