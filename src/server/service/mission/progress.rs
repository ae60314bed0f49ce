//! Mission progress rules.
//!
//! Pure functions over domain models that decide participation eligibility, the
//! per-mission day budget, whether a participant is still on track, which missions
//! still count as running, and how a finished mission turned out. Nothing here
//! touches the database; the lifecycle service loads the inputs and applies these
//! rules inside its transactions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::server::{
    error::mission::MissionError,
    model::{
        mission::{Mission, MissionOutcome, MissionProgress},
        participation::MissionParticipation,
    },
};

/// Whole days between the mission's start and end dates.
///
/// A mission running from 2024-07-01 to 2024-07-10 has a target of 9.
pub fn target_day_count(mission: &Mission) -> i64 {
    (mission.end_at - mission.start_at).num_days()
}

/// Maximum number of logged days a participant may have, one per calendar day
/// of the mission including both ends.
pub fn day_budget(mission: &Mission) -> i64 {
    target_day_count(mission) + 1
}

/// Whether a participant with `logged_days` entries is still within the day budget.
///
/// A participant stays on track until their logged count reaches the day budget.
/// Zero logged days is always on track.
pub fn is_on_track(mission: &Mission, logged_days: u64) -> bool {
    let logged = i64::try_from(logged_days).unwrap_or(i64::MAX);

    logged < day_budget(mission)
}

/// Progress summary for a participant.
pub fn progress(mission: &Mission, logged_days: u64) -> MissionProgress {
    MissionProgress {
        day_budget: day_budget(mission),
        logged_days,
        on_track: is_on_track(mission, logged_days),
    }
}

/// Rejects a join when the user already participates in the mission.
pub fn can_join(existing: Option<&MissionParticipation>) -> Result<(), MissionError> {
    match existing {
        Some(_) => Err(MissionError::AlreadyJoined),
        None => Ok(()),
    }
}

/// Rejects a report when the user already reported the same target.
pub fn can_report(already_reported: bool) -> Result<(), MissionError> {
    if already_reported {
        return Err(MissionError::AlreadyReported);
    }

    Ok(())
}

/// Rejects a mission whose start date falls after its end date.
pub fn validate_date_range(start_at: NaiveDate, end_at: NaiveDate) -> Result<(), MissionError> {
    if start_at > end_at {
        return Err(MissionError::InvalidDateRange { start_at, end_at });
    }

    Ok(())
}

/// Keeps the missions still running at `now`.
///
/// A mission keeps running until the start of its end date: one ending 2024-07-10 is
/// dropped from 2024-07-10T00:00:00Z onwards. Input order is preserved.
pub fn filter_active_for_user(missions: Vec<Mission>, now: DateTime<Utc>) -> Vec<Mission> {
    missions
        .into_iter()
        .filter(|mission| mission.end_at.and_time(NaiveTime::MIN).and_utc() > now)
        .collect()
}

/// Outcome of a mission for a participant, or `None` while it has not ended.
///
/// A mission ends once `today` is past its end date. An ended mission succeeded when
/// the participant logged the full day budget, which is exactly when they are no
/// longer counted as on track.
pub fn classify_outcome(
    mission: &Mission,
    logged_days: u64,
    today: NaiveDate,
) -> Option<MissionOutcome> {
    if mission.end_at >= today {
        return None;
    }

    if is_on_track(mission, logged_days) {
        Some(MissionOutcome::Failed)
    } else {
        Some(MissionOutcome::Succeeded)
    }
}
