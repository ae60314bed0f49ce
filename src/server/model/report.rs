//! Report domain models.
//!
//! A report is a user's flag on exactly one piece of content. Storage keeps one
//! nullable column per target kind; the domain model collapses them into
//! `ReportTarget` so a report can never point at zero or several targets.

use entity::sea_orm_active_enums::Status;
use sea_orm::DbErr;

use crate::server::model::timestamps::Timestamps;

/// The single piece of content a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget {
    Article(i32),
    Comment(i32),
    MissionProof(i32),
    Mission(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i32,
    /// User who filed the report.
    pub user_id: i32,
    pub target: ReportTarget,
    pub status: Status,
    pub timestamps: Timestamps,
}

impl Report {
    /// Converts an entity model to a report domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Report)` - Exactly one target column was populated
    /// - `Err(DbErr::Custom)` - The row has zero or several target columns set
    pub fn from_entity(entity: entity::report::Model) -> Result<Self, DbErr> {
        let targets = [
            entity.article_id.map(ReportTarget::Article),
            entity.comment_id.map(ReportTarget::Comment),
            entity.mission_proof_id.map(ReportTarget::MissionProof),
            entity.mission_id.map(ReportTarget::Mission),
        ];
        let mut populated = targets.into_iter().flatten();

        let (Some(target), None) = (populated.next(), populated.next()) else {
            return Err(DbErr::Custom(format!(
                "Report {} must reference exactly one target",
                entity.id
            )));
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            target,
            status: entity.status,
            timestamps: Timestamps::new(entity.created_at, entity.updated_at),
        })
    }
}

/// Parameters for filing a new report.
#[derive(Debug, Clone)]
pub struct CreateReportParams {
    pub user_id: i32,
    pub target: ReportTarget,
}
