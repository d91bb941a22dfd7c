use super::cursor::ByteCursor;
use super::name::{self, CompressionMap};
use ember_dns_domain::{DnsError, Question};

pub fn read_question(cursor: &mut ByteCursor<'_>) -> Result<Question, DnsError> {
    let qname = name::read_name(cursor)?;
    let qtype = cursor.read_u16()?;
    let qclass = cursor.read_u16()?;
    Ok(Question::new(qname, qtype, qclass))
}

pub fn write_question(question: &Question, compression: &mut CompressionMap, out: &mut Vec<u8>) {
    name::write_name(&question.name, compression, out);
    out.extend_from_slice(&question.qtype.to_be_bytes());
    out.extend_from_slice(&question.qclass.to_be_bytes());
}
