use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, IntoCondition},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tome::TomeEntry;

/// Handle to the `tome` collection of one guild database.
///
/// Usernames are matched case-insensitively.
#[derive(Debug)]
pub struct TomeCollection {
    db: DatabaseConnection,
}

fn username_matches(username: &str) -> impl IntoCondition {
    Expr::expr(Func::lower(Expr::col(entity::tome::Column::Username)))
        .eq(username.to_lowercase())
}

/// Older first, then lower id, matching the order of `TomeCollection::list`.
fn listed_before(date_added: DateTime<Utc>, id: i32) -> Condition {
    Condition::any()
        .add(entity::tome::Column::DateAdded.lt(date_added))
        .add(
            Condition::all()
                .add(entity::tome::Column::DateAdded.eq(date_added))
                .add(entity::tome::Column::Id.lt(id)),
        )
}

impl TomeCollection {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every entry, oldest first.
    pub async fn list(&self) -> Result<Vec<TomeEntry>, DbErr> {
        let entries = entity::prelude::Tome::find()
            .order_by_asc(entity::tome::Column::DateAdded)
            .order_by_asc(entity::tome::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entries.into_iter().map(TomeEntry::from_entity).collect())
    }

    pub async fn find(&self, username: &str) -> Result<Option<TomeEntry>, DbErr> {
        let entry = entity::prelude::Tome::find()
            .filter(username_matches(username))
            .one(&self.db)
            .await?;

        Ok(entry.map(TomeEntry::from_entity))
    }

    /// Appends a player to the end of the list.
    ///
    /// In a guild database the username column is unique regardless of case, so adding a
    /// listed player fails with a unique constraint violation.
    pub async fn insert(&self, username: &str) -> Result<TomeEntry, DbErr> {
        let entry = entity::tome::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            date_added: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(TomeEntry::from_entity(entry))
    }

    /// Counts entries listed ahead of `entry`, using the same order as `list`.
    pub async fn count_added_before(&self, entry: &TomeEntry) -> Result<u64, DbErr> {
        entity::prelude::Tome::find()
            .filter(listed_before(entry.date_added, entry.id))
            .count(&self.db)
            .await
    }

    /// Removes a player from the list.
    ///
    /// # Returns
    /// - `Ok(true)` - An entry was removed
    /// - `Ok(false)` - No entry matched the username
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, username: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Tome::delete_many()
            .filter(username_matches(username))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
