use crate::server::data::aspect::AspectCollection;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::aspect::AspectFactory};

mod add_aspects;
mod find;
mod give_aspects;
mod top;
