use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warmdns_application::use_cases::EntryRequest;
use warmdns_domain::RecordType;

pub const SUCCESS: &str = "success";

/// One name/type pair on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainDto {
    pub domain: String,
    #[serde(rename = "type")]
    pub record_type: String,
}

impl From<DomainDto> for EntryRequest {
    fn from(dto: DomainDto) -> Self {
        Self {
            name: dto.domain,
            record_type: dto.record_type,
        }
    }
}

impl From<(Arc<str>, RecordType)> for DomainDto {
    fn from((name, record_type): (Arc<str>, RecordType)) -> Self {
        Self {
            domain: name.to_string(),
            record_type: record_type.as_str().to_string(),
        }
    }
}

/// Request DTO for adding domains
#[derive(Debug, Clone, Deserialize)]
pub struct AddDomainsRequest {
    pub domains: Vec<DomainDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeResponse {
    pub message: String,
    pub size: usize,
}

impl SizeResponse {
    pub fn success(size: usize) -> Self {
        Self {
            message: SUCCESS.to_string(),
            size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainsResponse {
    pub message: String,
    pub domains: Vec<DomainDto>,
}

impl DomainsResponse {
    pub fn success(domains: Vec<DomainDto>) -> Self {
        Self {
            message: SUCCESS.to_string(),
            domains,
        }
    }
}

/// Query string of the random bulk add. `count` stays raw so a non-numeric
/// value can be reported with its own message.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomQuery {
    pub count: Option<String>,
}
