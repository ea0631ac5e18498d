//! Neutral-default resolution for the optional judge profile fields.
//!
//! Every field of a [`JudgeProfile`] is optional and the profile itself may be
//! missing. Each accessor here resolves one field to the value the engine uses
//! when the judge has no recorded behaviour for it.

use super::types::JudgeProfile;

pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Multiplier applied to the predicted success rate.
pub fn favorability_multiplier(profile: Option<&JudgeProfile>) -> f64 {
    profile
        .and_then(|profile| profile.tendencies.as_ref())
        .and_then(|tendencies| tendencies.favorability_multiplier)
        .filter(|multiplier| multiplier.is_finite())
        .unwrap_or(NEUTRAL_MULTIPLIER)
}

/// Multiplier applied to both ends of the recommended settlement range.
pub fn settlement_multiplier(profile: Option<&JudgeProfile>) -> f64 {
    profile
        .and_then(|profile| profile.settlement_tendency.as_ref())
        .and_then(|tendency| tendency.multiplier)
        .filter(|multiplier| multiplier.is_finite())
        .unwrap_or(NEUTRAL_MULTIPLIER)
}

/// Settlement timing override in days, if the judge has one.
pub fn preferred_settlement_days(profile: Option<&JudgeProfile>) -> Option<i64> {
    profile
        .and_then(|profile| profile.settlement_timing.as_ref())
        .and_then(|timing| timing.preferred_days)
}

pub fn is_settlement_friendly(profile: Option<&JudgeProfile>) -> bool {
    profile
        .and_then(|profile| profile.settlement_friendly)
        .unwrap_or(false)
}
