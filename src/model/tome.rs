use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TomeDto {
    pub username: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AddTomeDto {
    pub username: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TomePositionDto {
    pub username: String,
    pub position: u64,
}
