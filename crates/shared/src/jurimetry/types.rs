use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Number of historical cases requested from the similar-cases API per analysis.
pub const SIMILAR_CASES_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAnalysisRequest {
    pub case_type: String,
    pub legal_thesis: String,
    #[serde(default)]
    pub court: Option<String>,
    #[serde(default)]
    pub court_section: Option<String>,
    #[serde(default)]
    pub judge_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeProfile {
    #[serde(default)]
    pub tendencies: Option<JudgeTendencies>,
    #[serde(default)]
    pub settlement_tendency: Option<SettlementTendency>,
    #[serde(default)]
    pub settlement_timing: Option<SettlementTiming>,
    #[serde(default)]
    pub settlement_friendly: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeTendencies {
    #[serde(default)]
    pub favorability_multiplier: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementTendency {
    #[serde(default)]
    pub multiplier: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementTiming {
    #[serde(default)]
    pub preferred_days: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseOutcome {
    Favorable,
    Unfavorable,
    Partial,
    Settled,
    #[default]
    Other,
}

impl CaseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Unfavorable => "unfavorable",
            Self::Partial => "partial",
            Self::Settled => "settled",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "favorable" => Self::Favorable,
            "unfavorable" => Self::Unfavorable,
            "partial" => Self::Partial,
            "settled" => Self::Settled,
            _ => Self::Other,
        }
    }

    pub fn is_favorable(&self) -> bool {
        matches!(self, Self::Favorable)
    }
}

impl From<String> for CaseOutcome {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CaseOutcome> for String {
    fn from(value: CaseOutcome) -> Self {
        value.as_str().to_string()
    }
}

/// A historical case returned by the similar-cases API. Durations and values
/// are kept as reported; non-positive entries are ignored when averaging.
///
/// Every field is read leniently: a null or mistyped value becomes the
/// field's empty state instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarCase {
    #[serde(default, deserialize_with = "lenient_outcome")]
    pub outcome: CaseOutcome,
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration_days: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub compensation_value: Option<f64>,
}

fn lenient_outcome<'de, D>(deserializer: D) -> Result<CaseOutcome, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => CaseOutcome::parse(&raw),
        _ => CaseOutcome::Other,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarCaseCriteria {
    pub thesis: String,
    #[serde(rename = "type")]
    pub case_type: String,
    pub court: Option<String>,
    pub court_section: Option<String>,
    pub judge_id: Option<Uuid>,
    pub limit: u32,
}

impl SimilarCaseCriteria {
    pub fn for_request(request: &CaseAnalysisRequest) -> Self {
        Self {
            thesis: request.legal_thesis.clone(),
            case_type: request.case_type.clone(),
            court: request.court.clone(),
            court_section: request.court_section.clone(),
            judge_id: request.judge_id,
            limit: SIMILAR_CASES_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    Low,
    Medium,
    High,
}

impl DataQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub success_rate: f64,
    pub average_duration: i64,
    pub average_value: f64,
    pub confidence_level: ConfidenceLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSuggestion {
    pub recommended_range: SettlementRange,
    pub ideal_timing: i64,
    pub reasoning: String,
    pub probability: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    pub similar_cases_count: usize,
    pub data_quality: DataQuality,
    pub confidence_level: ConfidenceLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAnalysisResult {
    pub success_rate: f64,
    pub average_duration: i64,
    pub average_value: f64,
    pub settlement_suggestion: SettlementSuggestion,
    pub analysis_data: AnalysisData,
}
