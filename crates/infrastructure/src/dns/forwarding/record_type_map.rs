use hickory_proto::rr::RecordType as HickoryRecordType;
use warmdns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    ///
    /// Goes through the wire number so types hickory models as `Unknown`
    /// still round-trip.
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Whether an answer record of `hickory_type` satisfies a query for
    /// `record_type`. An `ANY` query is satisfied by every answer.
    pub fn matches(record_type: &RecordType, hickory_type: HickoryRecordType) -> bool {
        *record_type == RecordType::ANY || u16::from(hickory_type) == record_type.to_u16()
    }
}
