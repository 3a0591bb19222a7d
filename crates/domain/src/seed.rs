use super::{DomainError, RecordType};
use std::sync::Arc;

/// One validated `<name> <record-type>` line of a seed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl SeedEntry {
    /// Parses a seed line. Fields must be separated by a single space and the
    /// record type must be a known mnemonic. `line` is 1-based and only used
    /// for the error.
    pub fn parse_line(raw: &str, line: usize) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedSeedLine {
            line,
            content: raw.to_string(),
        };

        let mut fields = raw.split(' ');
        let (name, record_type) = match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(record_type), None) => (name, record_type),
            _ => return Err(malformed()),
        };
        if name.is_empty() || record_type.is_empty() {
            return Err(malformed());
        }

        let record_type = record_type
            .parse::<RecordType>()
            .map_err(|_| DomainError::UnsupportedRecordType {
                name: name.to_string(),
                record_type: record_type.to_string(),
            })?;

        Ok(Self {
            name: Arc::from(name),
            record_type,
        })
    }
}

/// Non-blank lines of a seed list, each paired with its 1-based line number
/// in the source, so diagnostics point at the real file line.
pub fn numbered_lines<'a, S: AsRef<str>>(
    lines: &'a [S],
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.as_ref()))
        .filter(|(_, line)| !line.trim().is_empty())
}
