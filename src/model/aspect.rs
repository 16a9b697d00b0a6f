use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AspectDto {
    pub uuid: String,
    pub aspects: i64,
    pub emeralds: i64,
    pub raids: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AdjustAspectsDto {
    pub delta: i64,
}

/// Members who each received one aspect.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct GiveAspectsDto {
    pub users: Vec<String>,
}
