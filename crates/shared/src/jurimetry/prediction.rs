use super::judge::favorability_multiplier;
use super::rounding::{RoundingMode, SCORE_ROUNDING};
use super::types::{ConfidenceLevel, JudgeProfile, PredictionResult, SimilarCase};

pub const DEFAULT_SUCCESS_RATE: f64 = 50.0;
pub const DEFAULT_AVERAGE_DURATION_DAYS: i64 = 365;
pub const DEFAULT_AVERAGE_VALUE: f64 = 0.0;

const HIGH_CONFIDENCE_MIN_CASES: usize = 100;
const MEDIUM_CONFIDENCE_MIN_CASES: usize = 50;
const SUCCESS_RATE_DECIMALS: u32 = 2;

/// Turns a set of similar historical cases into outcome predictions.
#[derive(Debug, Clone, Copy)]
pub struct PredictionEngine {
    rounding: RoundingMode,
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new(SCORE_ROUNDING)
    }
}

impl PredictionEngine {
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    pub fn compute(
        &self,
        cases: &[SimilarCase],
        judge_profile: Option<&JudgeProfile>,
    ) -> PredictionResult {
        if cases.is_empty() {
            return default_prediction();
        }

        let favorable = cases
            .iter()
            .filter(|case| case.outcome.is_favorable())
            .count();
        let raw_success_rate = 100.0 * favorable as f64 / cases.len() as f64;

        let average_duration = positive_mean(cases.iter().filter_map(|case| case.duration_days))
            .map(|mean| self.rounding.round(mean) as i64)
            .unwrap_or(DEFAULT_AVERAGE_DURATION_DAYS);
        let average_value = positive_mean(cases.iter().filter_map(|case| case.compensation_value))
            .map(|mean| self.rounding.round(mean))
            .unwrap_or(DEFAULT_AVERAGE_VALUE);

        let adjusted = raw_success_rate * favorability_multiplier(judge_profile);
        let success_rate = self
            .rounding
            .round_to(adjusted.clamp(0.0, 100.0), SUCCESS_RATE_DECIMALS);

        PredictionResult {
            success_rate,
            average_duration,
            average_value,
            confidence_level: confidence_level(cases.len(), judge_profile.is_some()),
        }
    }
}

pub fn default_prediction() -> PredictionResult {
    PredictionResult {
        success_rate: DEFAULT_SUCCESS_RATE,
        average_duration: DEFAULT_AVERAGE_DURATION_DAYS,
        average_value: DEFAULT_AVERAGE_VALUE,
        confidence_level: ConfidenceLevel::Low,
    }
}

/// High confidence needs both a large sample and a known judge.
pub fn confidence_level(case_count: usize, has_judge_profile: bool) -> ConfidenceLevel {
    if case_count >= HIGH_CONFIDENCE_MIN_CASES && has_judge_profile {
        ConfidenceLevel::High
    } else if case_count >= MEDIUM_CONFIDENCE_MIN_CASES {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Running mean of the finite, positive values; stays finite for any finite input.
fn positive_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (mean, count) = values
        .filter(|value| value.is_finite() && *value > 0.0)
        .fold((0.0_f64, 0_usize), |(mean, count), value| {
            let count = count + 1;
            (mean + (value - mean) / count as f64, count)
        });

    (count > 0).then_some(mean)
}

#[cfg(test)]
mod tests {
    use super::{PredictionEngine, confidence_level, default_prediction};
    use crate::jurimetry::types::{
        CaseOutcome, ConfidenceLevel, JudgeProfile, JudgeTendencies, SimilarCase,
    };

    fn case(outcome: CaseOutcome, duration_days: f64, compensation_value: f64) -> SimilarCase {
        SimilarCase {
            outcome,
            duration_days: Some(duration_days),
            compensation_value: Some(compensation_value),
        }
    }

    fn profile_with_multiplier(multiplier: f64) -> JudgeProfile {
        JudgeProfile {
            tendencies: Some(JudgeTendencies {
                favorability_multiplier: Some(multiplier),
            }),
            ..JudgeProfile::default()
        }
    }

    #[test]
    fn empty_cases_return_neutral_prior() {
        let prediction = PredictionEngine::default().compute(&[], None);

        assert_eq!(prediction, default_prediction());
        assert_eq!(prediction.success_rate, 50.0);
        assert_eq!(prediction.average_duration, 365);
        assert_eq!(prediction.average_value, 0.0);
        assert_eq!(prediction.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn empty_cases_ignore_judge_profile() {
        let profile = profile_with_multiplier(2.0);
        let prediction = PredictionEngine::default().compute(&[], Some(&profile));

        assert_eq!(prediction, default_prediction());
    }

    #[test]
    fn computes_rate_and_averages_from_cases() {
        let cases = vec![
            case(CaseOutcome::Favorable, 300.0, 10_000.0),
            case(CaseOutcome::Unfavorable, 500.0, 30_000.0),
            case(CaseOutcome::Favorable, 401.0, 20_001.0),
            case(CaseOutcome::Partial, 0.0, -5.0),
        ];

        let prediction = PredictionEngine::default().compute(&cases, None);

        assert_eq!(prediction.success_rate, 50.0);
        assert_eq!(prediction.average_duration, 400);
        assert_eq!(prediction.average_value, 20_000.0);
        assert_eq!(prediction.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn all_unfavorable_outcomes_yield_zero_success() {
        let cases = vec![
            case(CaseOutcome::Unfavorable, 100.0, 1_000.0),
            case(CaseOutcome::Other, 200.0, 2_000.0),
        ];

        let prediction = PredictionEngine::default().compute(&cases, None);
        assert_eq!(prediction.success_rate, 0.0);
    }

    #[test]
    fn multiplier_is_clamped_into_percentage_range() {
        let cases = vec![
            case(CaseOutcome::Favorable, 100.0, 1_000.0),
            case(CaseOutcome::Unfavorable, 100.0, 1_000.0),
        ];

        let engine = PredictionEngine::default();
        let boosted = engine.compute(&cases, Some(&profile_with_multiplier(5.0)));
        let zeroed = engine.compute(&cases, Some(&profile_with_multiplier(0.0)));
        let negative = engine.compute(&cases, Some(&profile_with_multiplier(-3.0)));

        assert_eq!(boosted.success_rate, 100.0);
        assert_eq!(zeroed.success_rate, 0.0);
        assert_eq!(negative.success_rate, 0.0);
    }

    #[test]
    fn non_positive_entries_fall_back_to_defaults() {
        let cases = vec![
            case(CaseOutcome::Favorable, 0.0, 0.0),
            case(CaseOutcome::Favorable, -30.0, -100.0),
            SimilarCase {
                outcome: CaseOutcome::Unfavorable,
                duration_days: None,
                compensation_value: Some(f64::NAN),
            },
        ];

        let prediction = PredictionEngine::default().compute(&cases, None);

        assert_eq!(prediction.average_duration, 365);
        assert_eq!(prediction.average_value, 0.0);
        assert_eq!(prediction.success_rate, 66.67);
    }

    #[test]
    fn near_max_values_average_without_overflow() {
        let cases = vec![
            case(CaseOutcome::Favorable, 1e308, f64::MAX),
            case(CaseOutcome::Favorable, 1e308, f64::MAX),
            case(CaseOutcome::Unfavorable, 1e308, f64::MAX),
        ];

        let prediction = PredictionEngine::default().compute(&cases, None);

        assert!(prediction.average_value.is_finite());
        assert_eq!(prediction.average_value, f64::MAX);
        assert_eq!(prediction.average_duration, i64::MAX);
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(confidence_level(49, true), ConfidenceLevel::Low);
        assert_eq!(confidence_level(50, false), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(99, true), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(100, false), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(100, true), ConfidenceLevel::High);
    }
}
