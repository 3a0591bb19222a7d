use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;
use warmdns_domain::{DomainError, RecordType};

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    /// TTLs of answer records of the queried type, in answer order.
    pub matching_ttls: Vec<u32>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a response and keeps only the TTLs of answers whose type
    /// matches `record_type`. CNAMEs and other answer types are skipped.
    pub fn parse(response_bytes: &[u8], record_type: &RecordType) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        // Parsing succeeded, so the 12-byte header is present.
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        let rcode = message.response_code();
        let truncated = message.truncated();

        let matching_ttls: Vec<u32> = message
            .answers()
            .iter()
            .filter(|record| RecordTypeMapper::matches(record_type, record.record_type()))
            .map(|record| record.ttl())
            .collect();

        debug!(
            rcode = ?rcode,
            answers = message.answers().len(),
            matching = matching_ttls.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            rcode,
            matching_ttls,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
