use sea_orm::entity::prelude::*;

/// A guild known to the service and allowed to own a tenant database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "validation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub wynn_guild_name: String,
    #[sea_orm(unique)]
    pub wynn_guild_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
