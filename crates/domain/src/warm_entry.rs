use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// Current wall-clock time as Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A name/type pair kept warm by the refresh scheduler.
///
/// `position` belongs to [`DueQueue`](crate::DueQueue): it is `Some(index)` while
/// the entry sits in the heap and `None` once it has been popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmEntry {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub due_at: i64,
    pub(crate) position: Option<usize>,
}

impl WarmEntry {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, due_at: i64) -> Self {
        Self {
            name: name.into(),
            record_type,
            due_at,
            position: None,
        }
    }

    /// Entry that is due immediately.
    pub fn due_now(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(name, record_type, now_millis())
    }

    /// Parses an API/seed pair, rejecting unknown record types.
    pub fn parse(name: &str, record_type: &str, due_at: i64) -> Result<Self, super::DomainError> {
        let rt = record_type
            .parse::<RecordType>()
            .map_err(|_| super::DomainError::UnsupportedRecordType {
                name: name.to_string(),
                record_type: record_type.to_string(),
            })?;
        Ok(Self::new(name, rt, due_at))
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn refresh_in_seconds(&mut self, seconds: u32) {
        self.refresh_in_seconds_from(now_millis(), seconds);
    }

    pub fn refresh_in_seconds_from(&mut self, now_ms: i64, seconds: u32) {
        self.due_at = now_ms + i64::from(seconds) * 1000;
    }

    /// Signed: negative when the entry is overdue.
    pub fn millis_until_due(&self, now_ms: i64) -> i64 {
        self.due_at - now_ms
    }
}

impl fmt::Display for WarmEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IN {}", self.name, self.record_type)
    }
}
