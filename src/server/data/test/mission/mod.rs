use crate::server::{data::mission::MissionRepository, model::mission::CreateMissionParams};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::Status;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_category;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
