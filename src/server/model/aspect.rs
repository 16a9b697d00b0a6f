/// Contribution counters for one guild member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectRecord {
    pub uuid: String,
    pub aspects: i64,
    pub emeralds: i64,
    pub raids: i64,
}

impl AspectRecord {
    pub fn from_entity(entity: entity::aspect::Model) -> Self {
        Self {
            uuid: entity.uuid,
            aspects: entity.aspects,
            emeralds: entity.emeralds,
            raids: entity.raids,
        }
    }
}
