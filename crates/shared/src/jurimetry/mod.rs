//! Jurimetry: outcome prediction and settlement advice for a legal thesis,
//! derived from similar historical cases and the assigned judge's profile.

mod judge;
mod prediction;
mod provider;
mod rounding;
mod service;
mod settlement;
mod similar_cases;
mod types;

pub use judge::{
    NEUTRAL_MULTIPLIER, favorability_multiplier, is_settlement_friendly,
    preferred_settlement_days, settlement_multiplier,
};
pub use prediction::{PredictionEngine, confidence_level, default_prediction};
pub use provider::{SimilarCaseProvider, SimilarCasesFuture};
pub use rounding::{RoundingMode, SCORE_ROUNDING};
pub use service::{ANALYSIS_FAILED_MESSAGE, AnalysisError, JurimetryService, assess_data_quality};
pub use settlement::{
    LONG_DURATION_REASON, MAX_SETTLEMENT_PROBABILITY, MIN_IDEAL_TIMING_DAYS,
    MODERATE_SUCCESS_RATE_REASON, SETTLEMENT_FRIENDLY_JUDGE_REASON, SettlementAdvisor,
};
pub use similar_cases::{
    HttpSimilarCaseProvider, HttpSimilarCaseProviderConfig, SimilarCaseProviderError,
};
pub use types::{
    AnalysisData, CaseAnalysisRequest, CaseAnalysisResult, CaseOutcome, ConfidenceLevel,
    DataQuality, JudgeProfile, JudgeTendencies, PredictionResult, SIMILAR_CASES_LIMIT,
    SettlementRange, SettlementSuggestion, SettlementTendency, SettlementTiming, SimilarCase,
    SimilarCaseCriteria,
};
