use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{model::guild::GuildIdentity, tenant::provisioner::ValidationSource};

/// Reads the shared validation record set.
#[derive(Debug, Clone)]
pub struct ValidationRepository {
    db: DatabaseConnection,
}

impl ValidationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every validation record in insertion order.
    pub async fn get_all(&self) -> Result<Vec<GuildIdentity>, DbErr> {
        let records = entity::prelude::Validation::find()
            .order_by_asc(entity::validation::Column::Id)
            .all(&self.db)
            .await?;

        Ok(records.into_iter().map(GuildIdentity::from_entity).collect())
    }
}

#[async_trait]
impl ValidationSource for ValidationRepository {
    async fn read_all(&self) -> Result<Vec<GuildIdentity>, DbErr> {
        self.get_all().await
    }
}
