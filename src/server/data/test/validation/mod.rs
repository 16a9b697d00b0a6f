use crate::server::{data::validation::ValidationRepository, tenant::provisioner::ValidationSource};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
