use super::*;

mod require_active_user;
mod require_admin;
