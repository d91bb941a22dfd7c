use ember_dns_domain::DnsError;

/// Sequential reader over one fixed message buffer.
///
/// Keeps the whole buffer alongside the unread tail so compression pointers
/// can re-enter the message at an absolute offset without copying.
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    remaining: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            remaining: buffer,
        }
    }

    /// Absolute offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.buffer.len() - self.remaining.len()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// A cursor over the same buffer positioned at `offset`.
    ///
    /// Compression jumps go through here; the original cursor is untouched.
    pub fn seek_to(&self, offset: usize) -> Result<ByteCursor<'a>, DnsError> {
        if offset >= self.buffer.len() {
            return Err(DnsError::MalformedMessage(format!(
                "offset {offset} outside message of {} bytes",
                self.buffer.len()
            )));
        }
        Ok(ByteCursor {
            buffer: self.buffer,
            remaining: &self.buffer[offset..],
        })
    }

    pub fn read_u8(&mut self) -> Result<u8, DnsError> {
        let (first, rest) = self
            .remaining
            .split_first()
            .ok_or(DnsError::TruncatedMessage("unexpected end of input"))?;
        self.remaining = rest;
        Ok(*first)
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], DnsError> {
        if len > self.remaining.len() {
            return Err(DnsError::TruncatedMessage("unexpected end of input"));
        }
        let (head, rest) = self.remaining.split_at(len);
        self.remaining = rest;
        Ok(head)
    }

    pub fn read_u16(&mut self) -> Result<u16, DnsError> {
        let bytes = self.read_slice(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DnsError> {
        let bytes = self.read_slice(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
