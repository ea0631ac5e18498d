use std::future::Future;
use std::pin::Pin;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use uuid::Uuid;

use crate::jurimetry::{CaseAnalysisRequest, CaseAnalysisResult, JudgeProfile};
use crate::models::CaseAnalysisRecord;

mod analyses;
mod judges;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
}

/// Persistence seen by the analysis pipeline and the HTTP layer.
///
/// A missing judge or analysis is `Ok(None)`, never an error.
pub trait CaseRecordStore: Send + Sync {
    fn ping(&self) -> StoreFuture<'_, ()>;

    fn get_judge_profile(&self, judge_id: Uuid) -> StoreFuture<'_, Option<JudgeProfile>>;

    fn persist_analysis<'a>(
        &'a self,
        case_id: Option<Uuid>,
        request: &'a CaseAnalysisRequest,
        result: &'a CaseAnalysisResult,
    ) -> StoreFuture<'a, Uuid>;

    fn get_analysis(&self, analysis_id: Uuid) -> StoreFuture<'_, Option<CaseAnalysisRecord>>;

    fn list_case_analyses(&self, case_id: Uuid) -> StoreFuture<'_, Vec<CaseAnalysisRecord>>;
}

#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let _: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

impl CaseRecordStore for Store {
    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(Store::ping(self))
    }

    fn get_judge_profile(&self, judge_id: Uuid) -> StoreFuture<'_, Option<JudgeProfile>> {
        Box::pin(self.fetch_judge_profile(judge_id))
    }

    fn persist_analysis<'a>(
        &'a self,
        case_id: Option<Uuid>,
        request: &'a CaseAnalysisRequest,
        result: &'a CaseAnalysisResult,
    ) -> StoreFuture<'a, Uuid> {
        Box::pin(self.insert_case_analysis(case_id, request, result))
    }

    fn get_analysis(&self, analysis_id: Uuid) -> StoreFuture<'_, Option<CaseAnalysisRecord>> {
        Box::pin(self.fetch_case_analysis(analysis_id))
    }

    fn list_case_analyses(&self, case_id: Uuid) -> StoreFuture<'_, Vec<CaseAnalysisRecord>> {
        Box::pin(self.fetch_case_analyses(case_id))
    }
}
