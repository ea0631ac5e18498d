use super::judge::{is_settlement_friendly, preferred_settlement_days, settlement_multiplier};
use super::rounding::{RoundingMode, SCORE_ROUNDING};
use super::types::{
    JudgeProfile, PredictionResult, SettlementRange, SettlementSuggestion, SimilarCase,
};

const RANGE_MIN_RATIO: f64 = 0.6;
const RANGE_MAX_RATIO: f64 = 0.8;
const IDEAL_TIMING_RATIO: f64 = 0.3;
pub const MIN_IDEAL_TIMING_DAYS: i64 = 30;

const MODERATE_SUCCESS_RATE_THRESHOLD: f64 = 60.0;
const LONG_DURATION_THRESHOLD_DAYS: i64 = 730;

const BASE_PROBABILITY: u8 = 50;
const LOW_SUCCESS_RATE_THRESHOLD: f64 = 70.0;
const LOW_SUCCESS_RATE_BOOST: u8 = 20;
const OVER_A_YEAR_THRESHOLD_DAYS: i64 = 365;
const OVER_A_YEAR_BOOST: u8 = 15;
const SETTLEMENT_FRIENDLY_BOOST: u8 = 25;
pub const MAX_SETTLEMENT_PROBABILITY: u8 = 95;

pub const MODERATE_SUCCESS_RATE_REASON: &str = "moderate success rate favors settlement";
pub const LONG_DURATION_REASON: &str = "long process duration makes settlement advantageous";
pub const SETTLEMENT_FRIENDLY_JUDGE_REASON: &str = "magistrate has favorable settlement history";
const REASON_SEPARATOR: &str = "; ";

/// Turns a prediction into a settlement recommendation.
#[derive(Debug, Clone, Copy)]
pub struct SettlementAdvisor {
    rounding: RoundingMode,
}

impl Default for SettlementAdvisor {
    fn default() -> Self {
        Self::new(SCORE_ROUNDING)
    }
}

impl SettlementAdvisor {
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// `_cases` is the same set the prediction was computed from. Everything
    /// the recommendation needs from it is already summarised in `prediction`.
    pub fn recommend(
        &self,
        prediction: &PredictionResult,
        judge_profile: Option<&JudgeProfile>,
        _cases: &[SimilarCase],
    ) -> SettlementSuggestion {
        SettlementSuggestion {
            recommended_range: self.recommended_range(prediction, judge_profile),
            ideal_timing: self.ideal_timing(prediction, judge_profile),
            reasoning: reasoning(prediction, judge_profile),
            probability: settlement_probability(prediction, judge_profile),
        }
    }

    fn recommended_range(
        &self,
        prediction: &PredictionResult,
        judge_profile: Option<&JudgeProfile>,
    ) -> SettlementRange {
        let base_value = prediction.average_value;
        let multiplier = settlement_multiplier(judge_profile);

        SettlementRange {
            min: self.rounding.round(base_value * RANGE_MIN_RATIO * multiplier),
            max: self.rounding.round(base_value * RANGE_MAX_RATIO * multiplier),
        }
    }

    fn ideal_timing(
        &self,
        prediction: &PredictionResult,
        judge_profile: Option<&JudgeProfile>,
    ) -> i64 {
        let base_timing =
            self.rounding.round(prediction.average_duration as f64 * IDEAL_TIMING_RATIO) as i64;

        preferred_settlement_days(judge_profile)
            .unwrap_or(base_timing)
            .max(MIN_IDEAL_TIMING_DAYS)
    }
}

fn reasoning(prediction: &PredictionResult, judge_profile: Option<&JudgeProfile>) -> String {
    let mut reasons = Vec::new();

    if prediction.success_rate < MODERATE_SUCCESS_RATE_THRESHOLD {
        reasons.push(MODERATE_SUCCESS_RATE_REASON);
    }
    if prediction.average_duration > LONG_DURATION_THRESHOLD_DAYS {
        reasons.push(LONG_DURATION_REASON);
    }
    if is_settlement_friendly(judge_profile) {
        reasons.push(SETTLEMENT_FRIENDLY_JUDGE_REASON);
    }

    reasons.join(REASON_SEPARATOR)
}

fn settlement_probability(
    prediction: &PredictionResult,
    judge_profile: Option<&JudgeProfile>,
) -> u8 {
    let mut probability = BASE_PROBABILITY;

    if prediction.success_rate < LOW_SUCCESS_RATE_THRESHOLD {
        probability = probability.saturating_add(LOW_SUCCESS_RATE_BOOST);
    }
    if prediction.average_duration > OVER_A_YEAR_THRESHOLD_DAYS {
        probability = probability.saturating_add(OVER_A_YEAR_BOOST);
    }
    if is_settlement_friendly(judge_profile) {
        probability = probability.saturating_add(SETTLEMENT_FRIENDLY_BOOST);
    }

    probability.min(MAX_SETTLEMENT_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::{
        LONG_DURATION_REASON, MODERATE_SUCCESS_RATE_REASON, SETTLEMENT_FRIENDLY_JUDGE_REASON,
        SettlementAdvisor,
    };
    use crate::jurimetry::types::{
        ConfidenceLevel, JudgeProfile, PredictionResult, SettlementTendency, SettlementTiming,
    };

    fn prediction(success_rate: f64, average_duration: i64, average_value: f64) -> PredictionResult {
        PredictionResult {
            success_rate,
            average_duration,
            average_value,
            confidence_level: ConfidenceLevel::Medium,
        }
    }

    fn friendly_judge() -> JudgeProfile {
        JudgeProfile {
            settlement_friendly: Some(true),
            ..JudgeProfile::default()
        }
    }

    #[test]
    fn range_is_a_fixed_band_of_average_value() {
        let suggestion =
            SettlementAdvisor::default().recommend(&prediction(80.0, 200, 20_000.0), None, &[]);

        assert_eq!(suggestion.recommended_range.min, 12_000.0);
        assert_eq!(suggestion.recommended_range.max, 16_000.0);
    }

    #[test]
    fn judge_multiplier_scales_both_range_ends() {
        let judge = JudgeProfile {
            settlement_tendency: Some(SettlementTendency {
                multiplier: Some(1.5),
            }),
            ..JudgeProfile::default()
        };

        let suggestion = SettlementAdvisor::default().recommend(
            &prediction(80.0, 200, 10_001.0),
            Some(&judge),
            &[],
        );

        // 10001 * 0.6 * 1.5 = 9000.9, 10001 * 0.8 * 1.5 = 12001.2
        assert_eq!(suggestion.recommended_range.min, 9_001.0);
        assert_eq!(suggestion.recommended_range.max, 12_001.0);
    }

    #[test]
    fn ideal_timing_is_thirty_percent_of_duration() {
        let suggestion =
            SettlementAdvisor::default().recommend(&prediction(80.0, 365, 0.0), None, &[]);
        assert_eq!(suggestion.ideal_timing, 110);
    }

    #[test]
    fn ideal_timing_never_drops_below_thirty_days() {
        let advisor = SettlementAdvisor::default();
        let short = advisor.recommend(&prediction(80.0, 0, 0.0), None, &[]);

        let judge = JudgeProfile {
            settlement_timing: Some(SettlementTiming {
                preferred_days: Some(-45),
            }),
            ..JudgeProfile::default()
        };
        let negative_preference =
            advisor.recommend(&prediction(80.0, 1_000, 0.0), Some(&judge), &[]);

        assert_eq!(short.ideal_timing, 30);
        assert_eq!(negative_preference.ideal_timing, 30);
    }

    #[test]
    fn judge_preferred_days_override_duration_based_timing() {
        let judge = JudgeProfile {
            settlement_timing: Some(SettlementTiming {
                preferred_days: Some(90),
            }),
            ..JudgeProfile::default()
        };

        let suggestion = SettlementAdvisor::default().recommend(
            &prediction(80.0, 1_000, 0.0),
            Some(&judge),
            &[],
        );
        assert_eq!(suggestion.ideal_timing, 90);
    }

    #[test]
    fn reasoning_is_empty_when_nothing_triggers() {
        let suggestion =
            SettlementAdvisor::default().recommend(&prediction(75.0, 300, 1_000.0), None, &[]);

        assert_eq!(suggestion.reasoning, "");
        assert_eq!(suggestion.probability, 50);
    }

    #[test]
    fn reasoning_lists_triggered_fragments_in_order() {
        let judge = friendly_judge();
        let suggestion = SettlementAdvisor::default().recommend(
            &prediction(45.0, 900, 1_000.0),
            Some(&judge),
            &[],
        );

        assert_eq!(
            suggestion.reasoning,
            format!(
                "{MODERATE_SUCCESS_RATE_REASON}; {LONG_DURATION_REASON}; {SETTLEMENT_FRIENDLY_JUDGE_REASON}"
            )
        );
    }

    #[test]
    fn reasoning_skips_untriggered_fragments() {
        let judge = friendly_judge();
        let suggestion = SettlementAdvisor::default().recommend(
            &prediction(65.0, 800, 1_000.0),
            Some(&judge),
            &[],
        );

        assert_eq!(
            suggestion.reasoning,
            format!("{LONG_DURATION_REASON}; {SETTLEMENT_FRIENDLY_JUDGE_REASON}")
        );
    }

    #[test]
    fn probability_accumulates_boosts() {
        let advisor = SettlementAdvisor::default();

        let probability_for = |success_rate: f64, average_duration: i64| {
            advisor
                .recommend(&prediction(success_rate, average_duration, 0.0), None, &[])
                .probability
        };

        assert_eq!(probability_for(69.9, 100), 70);
        assert_eq!(probability_for(70.0, 366), 65);
        assert_eq!(probability_for(70.0, 365), 50);
        assert_eq!(probability_for(50.0, 400), 85);
    }

    #[test]
    fn probability_is_capped_at_ninety_five() {
        let judge = friendly_judge();
        let suggestion = SettlementAdvisor::default().recommend(
            &prediction(10.0, 1_000, 0.0),
            Some(&judge),
            &[],
        );

        assert_eq!(suggestion.probability, 95);
    }
}
