use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::jurimetry::{JudgeProfile, JudgeTendencies, SettlementTendency, SettlementTiming};

use super::{Store, StoreError};

impl Store {
    pub async fn fetch_judge_profile(
        &self,
        judge_id: Uuid,
    ) -> Result<Option<JudgeProfile>, StoreError> {
        let row = sqlx::query(
            "SELECT favorability_multiplier, settlement_multiplier,
                    settlement_preferred_days, settlement_friendly
             FROM judges
             WHERE id = $1",
        )
        .bind(judge_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_judge_profile).transpose()
    }
}

fn row_to_judge_profile(row: &PgRow) -> Result<JudgeProfile, StoreError> {
    let favorability_multiplier: Option<f64> = row.try_get("favorability_multiplier")?;
    let settlement_multiplier: Option<f64> = row.try_get("settlement_multiplier")?;
    let preferred_days: Option<i32> = row.try_get("settlement_preferred_days")?;
    let settlement_friendly: Option<bool> = row.try_get("settlement_friendly")?;

    Ok(JudgeProfile {
        tendencies: favorability_multiplier.map(|multiplier| JudgeTendencies {
            favorability_multiplier: Some(multiplier),
        }),
        settlement_tendency: settlement_multiplier.map(|multiplier| SettlementTendency {
            multiplier: Some(multiplier),
        }),
        settlement_timing: preferred_days.map(|days| SettlementTiming {
            preferred_days: Some(i64::from(days)),
        }),
        settlement_friendly,
    })
}
