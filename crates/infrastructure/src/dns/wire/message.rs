use super::cursor::ByteCursor;
use super::header::{Header, HEADER_LEN};
use super::name::CompressionMap;
use super::{question, record};
use bytes::Bytes;
use ember_dns_domain::{DnsConfig, DnsError, Question, ResourceRecord};

/// Length of the opaque additional-records trailer every message in this
/// deployment carries. Copied through unparsed and unmodified.
pub const TRAILER_LEN: usize = 11;

/// Bounds applied while decoding untrusted wire data.
#[derive(Debug, Clone, Copy)]
pub struct DecodeLimits {
    /// Ceiling for record TTLs; larger wire values are clamped.
    pub max_record_ttl: u32,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_record_ttl: DnsConfig::default().max_record_ttl,
        }
    }
}

impl From<&DnsConfig> for DecodeLimits {
    fn from(config: &DnsConfig) -> Self {
        Self {
            max_record_ttl: config.max_record_ttl,
        }
    }
}

/// A decoded DNS message: header, questions, answers, opaque trailer, and
/// the raw buffer it was decoded from.
///
/// The raw buffer is what compression pointers resolve against during
/// decode; responses inherit it (and the trailer) from their request.
/// Messages are never mutated after construction; a response is a fresh
/// message derived via [`Message::build_response`].
#[derive(Debug, Clone)]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<ResourceRecord>,
    trailer: Bytes,
    raw: Bytes,
}

impl Message {
    /// Decode one datagram payload with default limits.
    pub fn decode(bytes: &[u8]) -> Result<Self, DnsError> {
        Self::decode_with(bytes, DecodeLimits::default())
    }

    /// Decode one datagram payload.
    ///
    /// Sections are read in wire order: header, exactly `question_count`
    /// questions, exactly `answer_count` answers, then the fixed-length
    /// trailer. Running out of buffer inside any declared section is
    /// `TruncatedMessage`; bytes past the trailer are datagram slack and
    /// ignored.
    pub fn decode_with(bytes: &[u8], limits: DecodeLimits) -> Result<Self, DnsError> {
        let mut cursor = ByteCursor::new(bytes);
        let header = Header::read_from(&mut cursor)?;

        // Counts are attacker-controlled; cap the pre-allocation.
        let mut questions = Vec::with_capacity(usize::from(header.question_count).min(16));
        for _ in 0..header.question_count {
            questions.push(question::read_question(&mut cursor)?);
        }

        let mut answers = Vec::with_capacity(usize::from(header.answer_count).min(16));
        for _ in 0..header.answer_count {
            answers.push(record::read_record(&mut cursor, limits.max_record_ttl)?);
        }

        let trailer = Bytes::copy_from_slice(cursor.read_slice(TRAILER_LEN)?);

        Ok(Self {
            header,
            questions,
            answers,
            trailer,
            raw: Bytes::copy_from_slice(bytes),
        })
    }

    /// Build the response to `request` carrying `answers`.
    ///
    /// Questions and the trailer are taken from the request verbatim; the
    /// header is derived with QR/RA raised and the answer count rewritten;
    /// the request's raw buffer is carried along as the back-reference base.
    pub fn build_response(request: &Message, answers: Vec<ResourceRecord>) -> Self {
        let header = Header::response_to(&request.header, answers.len() as u16);
        Self {
            header,
            questions: request.questions.clone(),
            answers,
            trailer: request.trailer.clone(),
            raw: request.raw.clone(),
        }
    }

    /// Encode to wire bytes.
    ///
    /// One compression table spans the whole message, so a name repeated
    /// across the question and answer sections is emitted once and then
    /// back-referenced.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.raw.len().max(HEADER_LEN + TRAILER_LEN));
        let mut compression = CompressionMap::default();

        self.header.write_to(&mut out);
        for q in &self.questions {
            question::write_question(q, &mut compression, &mut out);
        }
        for answer in &self.answers {
            record::write_record(answer, &mut compression, &mut out);
        }
        out.extend_from_slice(&self.trailer);
        out
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    pub fn trailer(&self) -> &Bytes {
        &self.trailer
    }

    /// The buffer this message was decoded from (or, for a response, the
    /// request's buffer).
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }
}
