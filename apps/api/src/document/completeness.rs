use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeDocument, SkillKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: String,
    pub score: f64,
    pub entry_count: usize,
    pub status: SectionStatus,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub overall_score: f64,
    pub sections: Vec<SectionHealth>,
    pub missing_sections: Vec<String>,
}

const SECTION_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.30),
    ("experience", 0.35),
    ("education", 0.15),
    ("skills", 0.20),
];

fn personal_info_health(doc: &ResumeDocument) -> (usize, f64, Vec<String>) {
    let info = &doc.personal_info;
    let fields = [
        ("full name", &info.full_name),
        ("email", &info.email),
        ("phone", &info.phone),
        ("location", &info.location),
        ("summary", &info.summary),
    ];
    let filled = fields.iter().filter(|(_, v)| !v.trim().is_empty()).count();

    let mut recommendations = Vec::new();
    for (label, value) in &fields[..2] {
        if value.trim().is_empty() {
            recommendations.push(format!("Add your {label}; it is required"));
        }
    }
    if info.summary.trim().is_empty() {
        recommendations
            .push("Write a short professional summary highlighting your key skills".to_string());
    }

    // name, email and summary make the section complete
    let required_met = [&info.full_name, &info.email, &info.summary]
        .iter()
        .all(|v| !v.trim().is_empty());
    let score = if required_met {
        1.0
    } else {
        filled as f64 / fields.len() as f64
    };
    (filled, score, recommendations)
}

/// `complete` counts entries whose required fields are all filled in. Any
/// incomplete entry keeps the section below 1.0.
fn list_health(
    section: &str,
    count: usize,
    complete: usize,
    required: &str,
) -> (usize, f64, Vec<String>) {
    if count == 0 {
        return (
            0,
            0.0,
            vec![format!("Add at least one {section} entry to your resume")],
        );
    }
    let incomplete = count - complete;
    if incomplete == 0 {
        return (count, 1.0, vec![]);
    }
    let noun = if incomplete == 1 { "entry is" } else { "entries are" };
    (
        count,
        0.5 + 0.5 * complete as f64 / count as f64,
        vec![format!("{incomplete} {section} {noun} missing {required}")],
    )
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn skills_health(doc: &ResumeDocument) -> (usize, f64, Vec<String>) {
    let technical = doc.skills.list(SkillKind::Technical).len();
    let soft = doc.skills.list(SkillKind::Soft).len();
    let mut recommendations = Vec::new();
    if technical == 0 {
        recommendations
            .push("Add technical skills such as languages, frameworks or tools".to_string());
    }
    if soft == 0 {
        recommendations.push("Add soft skills such as leadership or communication".to_string());
    }
    let score = [technical, soft].iter().filter(|n| **n > 0).count() as f64 / 2.0;
    (technical + soft, score, recommendations)
}

pub fn compute_completeness_report(doc: &ResumeDocument) -> CompletenessReport {
    let mut section_healths = Vec::new();
    let mut weighted_score_sum = 0.0;
    let mut missing_sections = Vec::new();

    for (section_key, weight) in SECTION_WEIGHTS {
        let (entry_count, score, recommendations) = match *section_key {
            "personal_info" => personal_info_health(doc),
            "experience" => list_health(
                "experience",
                doc.experience.len(),
                doc.experience
                    .iter()
                    .filter(|e| filled(&e.company) && filled(&e.position))
                    .count(),
                "a company or job title",
            ),
            "education" => list_health(
                "education",
                doc.education.len(),
                doc.education
                    .iter()
                    .filter(|e| filled(&e.institution) && filled(&e.degree))
                    .count(),
                "an institution or degree",
            ),
            _ => skills_health(doc),
        };

        let status = match score {
            s if s >= 1.0 => SectionStatus::Complete,
            s if s > 0.0 => SectionStatus::Partial,
            _ => SectionStatus::Missing,
        };
        if status == SectionStatus::Missing {
            missing_sections.push(section_key.to_string());
        }

        weighted_score_sum += score * weight;
        section_healths.push(SectionHealth {
            section: section_key.to_string(),
            score,
            entry_count,
            status,
            recommendations,
        });
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CompletenessReport {
        overall_score,
        sections: section_healths,
        missing_sections,
    }
}
