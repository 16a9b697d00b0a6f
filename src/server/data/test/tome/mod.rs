use crate::server::{data::tome::TomeCollection, model::tome::TomeEntry};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::tome::TomeFactory};

mod count_added_before;
mod delete;
mod find;
mod insert;
mod list;

/// Fixed reference point so ordering tests do not depend on the clock.
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}
