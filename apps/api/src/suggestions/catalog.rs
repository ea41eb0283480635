use super::{Priority, Suggestion, SuggestionKind, SuggestionSection};

const ENTRIES: &[(SuggestionSection, SuggestionKind, &str, &str, Priority)] = &[
    (
        SuggestionSection::ProfessionalSummary,
        SuggestionKind::Improvement,
        "Quantify Your Impact",
        "Add specific metrics and numbers to demonstrate your achievements. For example: \
         \"Improved team efficiency by 30%\" instead of \"Improved team efficiency\".",
        Priority::High,
    ),
    (
        SuggestionSection::Experience,
        SuggestionKind::Enhancement,
        "Use Action Verbs",
        "Start each bullet point with strong action verbs like \"Led\", \"Developed\", \
         \"Implemented\", \"Optimized\" to make your accomplishments more impactful.",
        Priority::Medium,
    ),
    (
        SuggestionSection::Skills,
        SuggestionKind::Addition,
        "Industry-Relevant Skills",
        "Consider adding trending skills in your field such as \"Machine Learning\", \
         \"Cloud Computing\", or \"Agile Methodology\" if applicable to your experience.",
        Priority::Medium,
    ),
    (
        SuggestionSection::Overall,
        SuggestionKind::Formatting,
        "Resume Length",
        "Your resume looks well-structured! Consider keeping it to 1-2 pages for optimal \
         readability by hiring managers.",
        Priority::Low,
    ),
];

pub fn static_suggestions() -> Vec<Suggestion> {
    ENTRIES
        .iter()
        .map(|(section, kind, title, text, priority)| Suggestion {
            section: *section,
            kind: *kind,
            title: title.to_string(),
            suggestion: text.to_string(),
            priority: *priority,
        })
        .collect()
}
