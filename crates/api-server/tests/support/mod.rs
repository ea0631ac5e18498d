#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api_server::http::{AppState, build_router};
use chrono::{Duration, Utc};
use shared::jurimetry::{
    CaseAnalysisRequest, CaseAnalysisResult, CaseOutcome, JudgeProfile, JurimetryService,
    SimilarCase, SimilarCaseCriteria, SimilarCaseProvider, SimilarCasesFuture,
};
use shared::models::CaseAnalysisRecord;
use shared::repos::{CaseRecordStore, StoreError, StoreFuture};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryStore {
    pub judges: Mutex<HashMap<Uuid, JudgeProfile>>,
    pub analyses: Mutex<Vec<CaseAnalysisRecord>>,
    pub fail_judge_lookup: bool,
    pub fail_writes: bool,
    pub fail_ping: bool,
}

impl InMemoryStore {
    pub fn with_judge(judge_id: Uuid, profile: JudgeProfile) -> Self {
        let store = Self::default();
        store
            .judges
            .lock()
            .expect("judges lock should not be poisoned")
            .insert(judge_id, profile);
        store
    }

    pub fn stored_analyses(&self) -> Vec<CaseAnalysisRecord> {
        self.analyses
            .lock()
            .expect("analyses lock should not be poisoned")
            .clone()
    }
}

impl CaseRecordStore for InMemoryStore {
    fn ping(&self) -> StoreFuture<'_, ()> {
        let result = if self.fail_ping {
            Err(StoreError::InvalidData("connection refused".to_string()))
        } else {
            Ok(())
        };
        Box::pin(async move { result })
    }

    fn get_judge_profile(&self, judge_id: Uuid) -> StoreFuture<'_, Option<JudgeProfile>> {
        if self.fail_judge_lookup {
            return Box::pin(async {
                Err(StoreError::InvalidData("judges row 42 is corrupt".to_string()))
            });
        }

        let profile = self
            .judges
            .lock()
            .expect("judges lock should not be poisoned")
            .get(&judge_id)
            .cloned();
        Box::pin(async move { Ok(profile) })
    }

    fn persist_analysis<'a>(
        &'a self,
        case_id: Option<Uuid>,
        request: &'a CaseAnalysisRequest,
        result: &'a CaseAnalysisResult,
    ) -> StoreFuture<'a, Uuid> {
        if self.fail_writes {
            return Box::pin(async {
                Err(StoreError::InvalidData(
                    "relation case_analyses does not exist".to_string(),
                ))
            });
        }

        let mut analyses = self
            .analyses
            .lock()
            .expect("analyses lock should not be poisoned");
        let id = Uuid::new_v4();
        let created_at = Utc::now() + Duration::milliseconds(analyses.len() as i64);
        analyses.push(CaseAnalysisRecord {
            id,
            case_id,
            request: request.clone(),
            result: result.clone(),
            created_at,
        });

        Box::pin(async move { Ok(id) })
    }

    fn get_analysis(&self, analysis_id: Uuid) -> StoreFuture<'_, Option<CaseAnalysisRecord>> {
        let record = self
            .stored_analyses()
            .into_iter()
            .find(|record| record.id == analysis_id);
        Box::pin(async move { Ok(record) })
    }

    fn list_case_analyses(&self, case_id: Uuid) -> StoreFuture<'_, Vec<CaseAnalysisRecord>> {
        let mut records = self
            .stored_analyses()
            .into_iter()
            .filter(|record| record.case_id == Some(case_id))
            .collect::<Vec<_>>();
        records.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Box::pin(async move { Ok(records) })
    }
}

pub struct FixedCases {
    cases: Vec<SimilarCase>,
}

impl SimilarCaseProvider for FixedCases {
    fn fetch_similar_cases<'a>(&'a self, _criteria: SimilarCaseCriteria) -> SimilarCasesFuture<'a> {
        let cases = self.cases.clone();
        Box::pin(async move { cases })
    }
}

pub fn fixed_cases(cases: Vec<SimilarCase>) -> Arc<FixedCases> {
    Arc::new(FixedCases { cases })
}

pub fn history(total: usize, favorable: usize, duration_days: f64, value: f64) -> Vec<SimilarCase> {
    (0..total)
        .map(|index| SimilarCase {
            outcome: if index < favorable {
                CaseOutcome::Favorable
            } else {
                CaseOutcome::Unfavorable
            },
            duration_days: Some(duration_days),
            compensation_value: Some(value),
        })
        .collect()
}

pub fn build_test_router(store: Arc<InMemoryStore>, provider: Arc<FixedCases>) -> axum::Router {
    let jurimetry = JurimetryService::new(store.clone(), provider);
    build_router(AppState {
        store,
        jurimetry: Arc::new(jurimetry),
    })
}
