use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::risk::{assess_risk, RiskLevel};
use super::sections::{parse_sections, Section};

/// Marker written into every field of a degraded record.
pub const ANALYSIS_FAILED: &str = "Analysis failed";

/// Result of analyzing one document. Never mutated after construction.
///
/// `risk_score` and `quote_ready` are derived from `missing_info` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub file_name: String,
    pub crd_summary: String,
    pub feasibility_assessment: String,
    pub sourcing_requirements: String,
    pub missing_info: String,
    pub baseline_data: String,
    pub risk_factors: String,
    pub risk_score: u32,
    pub quote_ready: bool,
    pub generated_at: DateTime<Utc>,
    /// Verbatim model output, kept for audit.
    pub full_text: String,
}

impl AnalysisRecord {
    /// Parses raw model output into a scored record.
    pub fn from_model_output(file_name: impl Into<String>, output: &str) -> Self {
        let file_name = file_name.into();
        let sections = parse_sections(output);
        let section = |s: Section| sections.get(s).to_string();

        let missing_info = section(Section::MissingInfo);
        let risk = assess_risk(&missing_info);
        tracing::debug!(
            "{file_name}: {} critical keyword(s) in missing information",
            risk.missing_count
        );

        Self {
            file_name,
            crd_summary: section(Section::CrdSummary),
            feasibility_assessment: section(Section::FeasibilityAssessment),
            sourcing_requirements: section(Section::SourcingRequirements),
            missing_info,
            baseline_data: section(Section::BaselineData),
            risk_factors: section(Section::RiskFactors),
            risk_score: risk.risk_score,
            quote_ready: risk.quote_ready,
            generated_at: Utc::now(),
            full_text: output.to_string(),
        }
    }

    /// Degraded record for a document whose analysis could not be produced.
    pub fn failed(file_name: impl Into<String>) -> Self {
        let marker = || ANALYSIS_FAILED.to_string();
        Self {
            file_name: file_name.into(),
            crd_summary: marker(),
            feasibility_assessment: marker(),
            sourcing_requirements: marker(),
            missing_info: marker(),
            baseline_data: marker(),
            risk_factors: marker(),
            risk_score: 100,
            quote_ready: false,
            generated_at: Utc::now(),
            full_text: marker(),
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    pub fn is_degraded(&self) -> bool {
        self.full_text == ANALYSIS_FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "CRD Data Summary\nA\nManufacturing Feasibility Assessment\nB\n\
Material & Component Sourcing Requirements\nC\nMissing Critical Information\n\
We need the quantity and tolerance before quoting.\nComparison Baseline Data\nE\n\
Risk Factors & Special Requirements\nF";

    #[test]
    fn test_record_fields_follow_section_order() {
        let record = AnalysisRecord::from_model_output("rfq.pdf", OUTPUT);
        assert_eq!(record.file_name, "rfq.pdf");
        assert_eq!(record.crd_summary, "A");
        assert_eq!(record.feasibility_assessment, "B");
        assert_eq!(record.sourcing_requirements, "C");
        assert_eq!(
            record.missing_info,
            "We need the quantity and tolerance before quoting."
        );
        assert_eq!(record.baseline_data, "E");
        assert_eq!(record.risk_factors, "F");
        assert_eq!(record.full_text, OUTPUT);
    }

    #[test]
    fn test_record_is_scored_from_missing_info() {
        let record = AnalysisRecord::from_model_output("rfq.pdf", OUTPUT);
        assert_eq!(record.risk_score, 50);
        assert!(!record.quote_ready);
        assert_eq!(record.risk_level(), RiskLevel::Medium);
        assert!(!record.is_degraded());
    }

    #[test]
    fn test_keywords_outside_missing_info_do_not_score() {
        let output = "CRD Data Summary\nquantity tolerance delivery bom process\nMissing Critical Information\nnothing";
        let record = AnalysisRecord::from_model_output("a.txt", output);
        assert_eq!(record.risk_score, 20);
        assert!(record.quote_ready);
    }

    #[test]
    fn test_failed_record() {
        let record = AnalysisRecord::failed("broken.docx");
        assert_eq!(record.file_name, "broken.docx");
        for field in [
            &record.crd_summary,
            &record.feasibility_assessment,
            &record.sourcing_requirements,
            &record.missing_info,
            &record.baseline_data,
            &record.risk_factors,
            &record.full_text,
        ] {
            assert_eq!(field, ANALYSIS_FAILED);
        }
        assert_eq!(record.risk_score, 100);
        assert!(!record.quote_ready);
        assert!(record.is_degraded());
    }

    #[test]
    fn test_record_json_field_names() {
        let record = AnalysisRecord::failed("x.txt");
        let json = serde_json::to_value(&record).unwrap();
        for key in [
            "file_name",
            "crd_summary",
            "feasibility_assessment",
            "sourcing_requirements",
            "missing_info",
            "baseline_data",
            "risk_factors",
            "risk_score",
            "quote_ready",
            "generated_at",
            "full_text",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
