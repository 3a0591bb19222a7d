use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown type {record_type} for domain {name}")]
    UnsupportedRecordType { name: String, record_type: String },

    #[error("Malformed seed line {line}: '{content}'")]
    MalformedSeedLine { line: usize, content: String },

    #[error("Invalid count: {0}")]
    InvalidCount(String),

    #[error("Received no {record_type} records for {name}")]
    NoMatchingRecords { name: String, record_type: String },

    #[error("Cannot derive parent zone from '{0}'")]
    InsufficientLabels(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Refresh queue is closed")]
    QueueClosed,
}

impl DomainError {
    /// Errors that a resolution strategy recovers from by falling through.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            DomainError::NoMatchingRecords { .. }
                | DomainError::InsufficientLabels(_)
                | DomainError::InvalidDomainName(_)
                | DomainError::InvalidDnsResponse(_)
                | DomainError::QueryTimeout
                | DomainError::Transport(_)
        )
    }
}
