use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use super::prediction::PredictionEngine;
use super::provider::SimilarCaseProvider;
use super::settlement::SettlementAdvisor;
use super::types::{
    AnalysisData, CaseAnalysisRequest, CaseAnalysisResult, DataQuality, JudgeProfile,
    SimilarCaseCriteria,
};
use crate::repos::{CaseRecordStore, StoreError};

const HIGH_QUALITY_MIN_CASES: usize = 100;
const MEDIUM_QUALITY_MIN_CASES: usize = 30;

pub const ANALYSIS_FAILED_MESSAGE: &str = "Case analysis could not be completed";

/// The only error callers of [`JurimetryService::analyze_case`] ever see. The
/// underlying cause is logged, not carried.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    AnalysisFailed,
}

#[derive(Debug, Error)]
enum AnalysisStepError {
    #[error("judge profile lookup failed: {0}")]
    JudgeLookup(#[source] StoreError),
    #[error("analysis produced a non-finite {0}")]
    NonFiniteFigure(&'static str),
}

#[derive(Clone)]
pub struct JurimetryService {
    records: Arc<dyn CaseRecordStore>,
    similar_cases: Arc<dyn SimilarCaseProvider>,
    prediction_engine: PredictionEngine,
    settlement_advisor: SettlementAdvisor,
}

impl JurimetryService {
    pub fn new(
        records: Arc<dyn CaseRecordStore>,
        similar_cases: Arc<dyn SimilarCaseProvider>,
    ) -> Self {
        Self {
            records,
            similar_cases,
            prediction_engine: PredictionEngine::default(),
            settlement_advisor: SettlementAdvisor::default(),
        }
    }

    pub async fn analyze_case(
        &self,
        request: &CaseAnalysisRequest,
    ) -> Result<CaseAnalysisResult, AnalysisError> {
        match self.run_analysis(request).await {
            Ok(result) => {
                debug!(
                    case_type = %request.case_type,
                    similar_cases = result.analysis_data.similar_cases_count,
                    confidence = result.analysis_data.confidence_level.as_str(),
                    data_quality = result.analysis_data.data_quality.as_str(),
                    "case analysis completed"
                );
                Ok(result)
            }
            Err(err) => {
                error!(
                    case_type = %request.case_type,
                    judge_id = ?request.judge_id,
                    "case analysis failed: {err}"
                );
                Err(AnalysisError::AnalysisFailed)
            }
        }
    }

    async fn run_analysis(
        &self,
        request: &CaseAnalysisRequest,
    ) -> Result<CaseAnalysisResult, AnalysisStepError> {
        let judge_profile = self.lookup_judge(request).await?;

        let similar_cases = self
            .similar_cases
            .fetch_similar_cases(SimilarCaseCriteria::for_request(request))
            .await;

        let prediction = self
            .prediction_engine
            .compute(&similar_cases, judge_profile.as_ref());
        let settlement_suggestion = self.settlement_advisor.recommend(
            &prediction,
            judge_profile.as_ref(),
            &similar_cases,
        );

        let result = CaseAnalysisResult {
            success_rate: prediction.success_rate,
            average_duration: prediction.average_duration,
            average_value: prediction.average_value,
            settlement_suggestion,
            analysis_data: AnalysisData {
                similar_cases_count: similar_cases.len(),
                data_quality: assess_data_quality(similar_cases.len()),
                confidence_level: prediction.confidence_level,
            },
        };

        ensure_finite(&result)?;
        Ok(result)
    }

    async fn lookup_judge(
        &self,
        request: &CaseAnalysisRequest,
    ) -> Result<Option<JudgeProfile>, AnalysisStepError> {
        let Some(judge_id) = request.judge_id else {
            return Ok(None);
        };

        let profile = self
            .records
            .get_judge_profile(judge_id)
            .await
            .map_err(AnalysisStepError::JudgeLookup)?;

        if profile.is_none() {
            debug!(%judge_id, "judge not found, using neutral profile");
        }

        Ok(profile)
    }
}

/// Sample-size grading, independent of the prediction's confidence level.
pub fn assess_data_quality(similar_cases_count: usize) -> DataQuality {
    if similar_cases_count >= HIGH_QUALITY_MIN_CASES {
        DataQuality::High
    } else if similar_cases_count >= MEDIUM_QUALITY_MIN_CASES {
        DataQuality::Medium
    } else {
        DataQuality::Low
    }
}

fn ensure_finite(result: &CaseAnalysisResult) -> Result<(), AnalysisStepError> {
    let range = &result.settlement_suggestion.recommended_range;
    let figures = [
        ("success rate", result.success_rate),
        ("average value", result.average_value),
        ("settlement minimum", range.min),
        ("settlement maximum", range.max),
    ];

    match figures.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, _)) => Err(AnalysisStepError::NonFiniteFigure(*name)),
        None => Ok(()),
    }
}
