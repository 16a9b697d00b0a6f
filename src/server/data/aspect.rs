use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::aspect::AspectRecord;

/// Handle to the `aspects` collection of one guild database.
#[derive(Debug)]
pub struct AspectCollection {
    db: DatabaseConnection,
}

impl AspectCollection {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns up to `limit` members with the highest aspect counts.
    pub async fn top(&self, limit: u64) -> Result<Vec<AspectRecord>, DbErr> {
        let records = entity::prelude::Aspect::find()
            .order_by_desc(entity::aspect::Column::Aspects)
            .order_by_asc(entity::aspect::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(records.into_iter().map(AspectRecord::from_entity).collect())
    }

    pub async fn find(&self, uuid: &str) -> Result<Option<AspectRecord>, DbErr> {
        let record = entity::prelude::Aspect::find()
            .filter(entity::aspect::Column::Uuid.eq(uuid))
            .one(&self.db)
            .await?;

        Ok(record.map(AspectRecord::from_entity))
    }

    /// Adjusts a member's aspect count by `delta`, creating the member with zeroed
    /// counters first if they have no record yet.
    pub async fn add_aspects(&self, uuid: &str, delta: i64) -> Result<AspectRecord, DbErr> {
        let txn = self.db.begin().await?;

        let record = upsert_aspects(&txn, uuid, delta).await?;

        txn.commit().await?;

        Ok(record)
    }

    /// Hands one aspect to each listed member, which lowers their owed count by one.
    ///
    /// All members are updated in one transaction; a member listed twice receives two.
    ///
    /// # Returns
    /// - `Ok(Vec<AspectRecord>)` - Updated record of each listed member, in list order
    /// - `Err(DbErr)` - Database error; no member was updated
    pub async fn give_aspects(&self, uuids: &[String]) -> Result<Vec<AspectRecord>, DbErr> {
        let txn = self.db.begin().await?;

        let mut records = Vec::with_capacity(uuids.len());
        for uuid in uuids {
            records.push(upsert_aspects(&txn, uuid, -1).await?);
        }

        txn.commit().await?;

        Ok(records)
    }
}

async fn upsert_aspects<C: ConnectionTrait>(
    conn: &C,
    uuid: &str,
    delta: i64,
) -> Result<AspectRecord, DbErr> {
    let updated = entity::prelude::Aspect::update_many()
        .col_expr(
            entity::aspect::Column::Aspects,
            Expr::col(entity::aspect::Column::Aspects).add(delta),
        )
        .filter(entity::aspect::Column::Uuid.eq(uuid))
        .exec(conn)
        .await?;

    if updated.rows_affected == 0 {
        entity::aspect::ActiveModel {
            uuid: ActiveValue::Set(uuid.to_string()),
            aspects: ActiveValue::Set(delta),
            emeralds: ActiveValue::Set(0),
            raids: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    let record = entity::prelude::Aspect::find()
        .filter(entity::aspect::Column::Uuid.eq(uuid))
        .one(conn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("aspect record for {}", uuid)))?;

    Ok(AspectRecord::from_entity(record))
}
