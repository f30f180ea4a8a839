//! Section parser — splits free-form model output into the six analysis sections.
//!
//! Matching is substring-based and order-dependent: a line "is" a header when its
//! lowercase form contains any header name, and the first header in declaration
//! order wins. Known limitation: an ordinary content line that happens to contain
//! a header name is treated as a header. Everything that depends on this lives in
//! `parse_sections` so a stricter output contract can replace it in one place.

/// The six analysis sections, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CrdSummary,
    FeasibilityAssessment,
    SourcingRequirements,
    MissingInfo,
    BaselineData,
    RiskFactors,
}

impl Section {
    /// Declaration order. Also the tie-break order for header matching.
    pub const ALL: [Section; 6] = [
        Section::CrdSummary,
        Section::FeasibilityAssessment,
        Section::SourcingRequirements,
        Section::MissingInfo,
        Section::BaselineData,
        Section::RiskFactors,
    ];

    /// Header text the prompt asks the model to emit, verbatim.
    pub const fn header(self) -> &'static str {
        match self {
            Section::CrdSummary => "CRD Data Summary",
            Section::FeasibilityAssessment => "Manufacturing Feasibility Assessment",
            Section::SourcingRequirements => "Material & Component Sourcing Requirements",
            Section::MissingInfo => "Missing Critical Information",
            Section::BaselineData => "Comparison Baseline Data",
            Section::RiskFactors => "Risk Factors & Special Requirements",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Section bodies extracted from one model response. Absent sections are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    bodies: [String; 6],
}

impl ParsedSections {
    pub fn get(&self, section: Section) -> &str {
        &self.bodies[section.index()]
    }
}

/// Returns the first section (in declaration order) whose header appears in `line_lower`.
fn matching_header(line_lower: &str, headers_lower: &[String; 6]) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|s| line_lower.contains(headers_lower[s.index()].as_str()))
}

/// Line-oriented single-pass parse of model output.
///
/// Header lines switch the current section and are never stored. Repeating a
/// header keeps appending to the same section. Non-empty lines before the first
/// header are dropped.
pub fn parse_sections(output: &str) -> ParsedSections {
    let headers_lower: [String; 6] = Section::ALL.map(|s| s.header().to_lowercase());

    let mut bodies: [String; 6] = Default::default();
    let mut current: Option<Section> = None;

    for raw_line in output.split('\n') {
        let line = raw_line.trim();
        let line_lower = line.to_lowercase();

        if let Some(section) = matching_header(&line_lower, &headers_lower) {
            current = Some(section);
            continue;
        }

        if let Some(section) = current {
            if !line.is_empty() {
                let body = &mut bodies[section.index()];
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    ParsedSections {
        bodies: bodies.map(|b| b.trim().to_string()),
    }
}
