use serde::{Deserialize, Serialize};

use super::record::AnalysisRecord;
use super::risk::RiskLevel;

/// Aggregate statistics over one batch of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub files_analyzed: usize,
    pub quote_ready_count: usize,
    /// Records that are "Analysis failed" placeholders.
    pub degraded_count: usize,
    /// Mean risk score; 0.0 for an empty batch.
    pub average_risk_score: f64,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        let files_analyzed = records.len();
        let quote_ready_count = records.iter().filter(|r| r.quote_ready).count();
        let degraded_count = records.iter().filter(|r| r.is_degraded()).count();

        let average_risk_score = if files_analyzed == 0 {
            0.0
        } else {
            let total: u64 = records.iter().map(|r| u64::from(r.risk_score)).sum();
            total as f64 / files_analyzed as f64
        };

        let count_level = |level: RiskLevel| {
            records
                .iter()
                .filter(|r| r.risk_level() == level)
                .count()
        };

        Self {
            files_analyzed,
            quote_ready_count,
            degraded_count,
            average_risk_score,
            low_risk: count_level(RiskLevel::Low),
            medium_risk: count_level(RiskLevel::Medium),
            high_risk: count_level(RiskLevel::High),
        }
    }
}
