/// Keywords whose presence in the missing-information section signals quote risk.
const CRITICAL_MISSING: &[&str] = &[
    "quantity",
    "material grade",
    "delivery",
    "bom",
    "specifications",
    "tolerance",
    "dimensions",
    "process",
];

const BASE_SCORE: u32 = 20;
const PER_KEYWORD: u32 = 15;
const MAX_SCORE: u32 = 100;
/// Scores at or above this are never quote-ready.
const QUOTE_READY_CEILING: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub quote_ready: bool,
    pub missing_count: usize,
}

/// Display band for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(risk_score: u32) -> Self {
        match risk_score {
            s if s < 30 => RiskLevel::Low,
            s if s < QUOTE_READY_CEILING => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

/// Scores the missing-information section.
///
/// Each keyword counts once no matter how often it appears, and matching is
/// plain substring containment ("processing" hits "process").
pub fn assess_risk(missing_info: &str) -> RiskAssessment {
    let text = missing_info.to_lowercase();
    let missing_count = CRITICAL_MISSING
        .iter()
        .filter(|kw| text.contains(*kw))
        .count();

    let risk_score = (BASE_SCORE + missing_count as u32 * PER_KEYWORD).min(MAX_SCORE);
    let quote_ready = missing_count <= 1 && risk_score < QUOTE_READY_CEILING;

    RiskAssessment {
        risk_score,
        quote_ready,
        missing_count,
    }
}
