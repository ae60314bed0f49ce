use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::report::{CreateReportParams, Report, ReportTarget};

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the user already reported the given target.
    ///
    /// # Returns
    /// - `Ok(true)` - A report by this user on this target exists
    /// - `Ok(false)` - No such report
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, user_id: i32, target: ReportTarget) -> Result<bool, DbErr> {
        let (column, target_id) = target_column(target);
        let count = entity::prelude::Report::find()
            .filter(entity::report::Column::UserId.eq(user_id))
            .filter(column.eq(target_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Files a new ACTIVE report.
    ///
    /// # Returns
    /// - `Ok(Report)` - The created report
    /// - `Err(DbErr)` - Database error, including a unique violation when the same
    ///   user already reported the same target
    pub async fn create(&self, params: CreateReportParams) -> Result<Report, DbErr> {
        let now = Utc::now();
        let mut model = entity::report::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            status: ActiveValue::Set(Status::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        match params.target {
            ReportTarget::Article(id) => model.article_id = ActiveValue::Set(Some(id)),
            ReportTarget::Comment(id) => model.comment_id = ActiveValue::Set(Some(id)),
            ReportTarget::MissionProof(id) => model.mission_proof_id = ActiveValue::Set(Some(id)),
            ReportTarget::Mission(id) => model.mission_id = ActiveValue::Set(Some(id)),
        }

        let entity = model.insert(self.db).await?;

        Report::from_entity(entity)
    }
}

fn target_column(target: ReportTarget) -> (entity::report::Column, i32) {
    match target {
        ReportTarget::Article(id) => (entity::report::Column::ArticleId, id),
        ReportTarget::Comment(id) => (entity::report::Column::CommentId, id),
        ReportTarget::MissionProof(id) => (entity::report::Column::MissionProofId, id),
        ReportTarget::Mission(id) => (entity::report::Column::MissionId, id),
    }
}
