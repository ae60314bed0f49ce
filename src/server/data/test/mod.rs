mod category;
mod mission;
mod mission_user;
mod schedule;
mod user;
