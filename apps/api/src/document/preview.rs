//! Read-only projection of a `ResumeDocument` into display sections.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeDocument};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const EMPTY_HEADLINE: &str = "Your resume preview will appear here";
pub const EMPTY_HINT: &str = "Start filling out your information to see a live preview";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub sections: Vec<PreviewSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewSection {
    Header {
        name: String,
        contact: Vec<String>,
    },
    Summary {
        text: String,
    },
    Experience {
        entries: Vec<ExperienceView>,
    },
    Education {
        entries: Vec<EducationView>,
    },
    Skills {
        groups: Vec<SkillGroup>,
    },
    Empty {
        headline: String,
        hint: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub id: String,
    pub position: String,
    pub company: String,
    pub date_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub id: String,
    pub title: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    pub graduation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// Formats a `YYYY-MM` month as `Jun 2021`.
///
/// Blank input gives an empty string. Anything that is not a valid month is
/// passed through trimmed.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit);
    if !shaped {
        return value.to_string();
    }
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

fn date_range(entry: &ExperienceEntry) -> String {
    let end = if entry.current {
        "Present".to_string()
    } else {
        format_date(&entry.end_date)
    };
    format!("{} - {}", format_date(&entry.start_date), end)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn education_title(entry: &EducationEntry) -> String {
    if entry.field.is_empty() {
        entry.degree.clone()
    } else {
        format!("{} in {}", entry.degree, entry.field)
    }
}

fn is_blank(doc: &ResumeDocument) -> bool {
    doc.personal_info.full_name.is_empty()
        && doc.experience.is_empty()
        && doc.education.is_empty()
        && doc.skills.technical.is_empty()
        && doc.skills.soft.is_empty()
}

pub fn render_preview(doc: &ResumeDocument) -> Preview {
    if is_blank(doc) {
        return Preview {
            sections: vec![PreviewSection::Empty {
                headline: EMPTY_HEADLINE.to_string(),
                hint: EMPTY_HINT.to_string(),
            }],
        };
    }

    let info = &doc.personal_info;
    let mut sections = Vec::new();

    let name = non_empty(&info.full_name).unwrap_or_else(|| NAME_PLACEHOLDER.to_string());
    let contact = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter_map(|v| non_empty(v))
        .collect();
    sections.push(PreviewSection::Header { name, contact });

    if let Some(text) = non_empty(&info.summary) {
        sections.push(PreviewSection::Summary { text });
    }

    if !doc.experience.is_empty() {
        let entries = doc
            .experience
            .iter()
            .map(|e| ExperienceView {
                id: e.id.clone(),
                position: e.position.clone(),
                company: e.company.clone(),
                date_range: date_range(e),
                description: non_empty(&e.description),
            })
            .collect();
        sections.push(PreviewSection::Experience { entries });
    }

    if !doc.education.is_empty() {
        let entries = doc
            .education
            .iter()
            .map(|e| EducationView {
                id: e.id.clone(),
                title: education_title(e),
                institution: e.institution.clone(),
                gpa: e.gpa.as_deref().and_then(non_empty),
                graduation: format_date(&e.graduation_date),
            })
            .collect();
        sections.push(PreviewSection::Education { entries });
    }

    let groups: Vec<SkillGroup> = [
        ("Technical Skills", &doc.skills.technical),
        ("Soft Skills", &doc.skills.soft),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(title, items)| SkillGroup {
        title: title.to_string(),
        items: items.clone(),
    })
    .collect();
    if !groups.is_empty() {
        sections.push(PreviewSection::Skills { groups });
    }

    Preview { sections }
}

/// Printable text form of a preview, used by the export endpoint.
pub fn render_plain_text(preview: &Preview) -> String {
    let mut out = String::new();

    for section in &preview.sections {
        match section {
            PreviewSection::Header { name, contact } => {
                out.push_str(name);
                out.push('\n');
                if !contact.is_empty() {
                    out.push_str(&contact.join(" | "));
                    out.push('\n');
                }
            }
            PreviewSection::Summary { text } => {
                push_heading(&mut out, "Professional Summary");
                out.push_str(text);
                out.push('\n');
            }
            PreviewSection::Experience { entries } => {
                push_heading(&mut out, "Professional Experience");
                for e in entries {
                    out.push_str(&format!("{} at {} ({})\n", e.position, e.company, e.date_range));
                    if let Some(description) = &e.description {
                        out.push_str(description);
                        out.push('\n');
                    }
                }
            }
            PreviewSection::Education { entries } => {
                push_heading(&mut out, "Education");
                for e in entries {
                    out.push_str(&format!("{}, {}", e.title, e.institution));
                    if !e.graduation.is_empty() {
                        out.push_str(&format!(" ({})", e.graduation));
                    }
                    out.push('\n');
                    if let Some(gpa) = &e.gpa {
                        out.push_str(&format!("GPA: {gpa}\n"));
                    }
                }
            }
            PreviewSection::Skills { groups } => {
                push_heading(&mut out, "Skills");
                for g in groups {
                    out.push_str(&format!("{}: {}\n", g.title, g.items.join(", ")));
                }
            }
            PreviewSection::Empty { headline, hint } => {
                out.push_str(headline);
                out.push('\n');
                out.push_str(hint);
                out.push('\n');
            }
        }
    }

    out
}

fn push_heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}
