use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::sea_orm_active_enums::Status;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod name_exists;
mod set_status;
mod update_name;
