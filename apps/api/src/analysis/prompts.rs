// Quote analysis prompt template.
// Section headers come from `Section::header` so the parser and the prompt can never drift.

use super::sections::Section;

const ANALYSIS_PREAMBLE: &str = "\
You are an expert manufacturing quote assistant focused on the Product Engineering Process.

Analyze this document to address these specific pain points:
1. Extract CRD (Customer Requirements Document) data
2. Identify requirements for comparison with past projects
3. Assess production feasibility concerns
4. Identify sourcing/purchasing requirements

Return your analysis using this EXACT structure:
";

/// Guidance printed under each header, in the same order as `Section::ALL`.
fn section_guidance(section: Section) -> &'static str {
    match section {
        Section::CrdSummary => "Extract and summarize: Part numbers, product specifications, quantities, delivery requirements, quality standards, and revision information.",
        Section::FeasibilityAssessment => "Identify potential production challenges: Special processes (welding types, coating specs), unusual tolerances, equipment requirements, tooling needs, and any non-standard requirements.",
        Section::SourcingRequirements => "List: Raw material specifications (grades, dimensions, heat treatment), purchased components (fasteners, inserts, etc.), special materials, and supplier requirements.",
        Section::MissingInfo => "Identify what's missing for: Production planning, material sourcing, cost estimation, and feasibility assessment. Flag items that need clarification from customer or internal teams.",
        Section::BaselineData => "Extract standardizable data points that could be compared with past projects: Material types, process requirements, tolerance ranges, quality specs, and production volumes.",
        Section::RiskFactors => "Highlight: Non-standard processes, tight tolerances, special certifications, environmental requirements, and any factors that could impact production or sourcing.",
    }
}

/// Wraps extracted document text in the fixed six-section instruction block.
pub fn build_analysis_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(ANALYSIS_PREAMBLE.len() + text.len() + 2048);
    prompt.push_str(ANALYSIS_PREAMBLE);
    prompt.push_str("\n---\n");

    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            prompt.push('\n');
        }
        prompt.push_str(section.header());
        prompt.push('\n');
        prompt.push_str(section_guidance(section));
        prompt.push('\n');
    }

    prompt.push_str("---\n\nDocument content:\n\"\"\"");
    prompt.push_str(text);
    prompt.push_str("\"\"\"\n");
    prompt
}
