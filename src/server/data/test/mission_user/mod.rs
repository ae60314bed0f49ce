use crate::server::data::mission_user::MissionUserRepository;
use entity::sea_orm_active_enums::Status;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
