use crate::server::{
    error::{mission::MissionError, AppError},
    model::mission::CreateMissionParams,
    service::mission::MissionService,
};
use chrono::{Days, NaiveDate, TimeZone, Utc};
use entity::sea_orm_active_enums::Status;
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
mod get_detail;
mod get_mission;
mod get_schedule;
mod history;
mod join;
mod list_mine;
mod report;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
