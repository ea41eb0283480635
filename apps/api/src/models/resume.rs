use serde::{Deserialize, Serialize};

/// The resume being edited in one session. Owns every nested collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

/// A job. When `current` is set, `end_date` is ignored by every renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl Skills {
    pub fn list(&self, kind: SkillKind) -> &[String] {
        match kind {
            SkillKind::Technical => &self.technical,
            SkillKind::Soft => &self.soft,
        }
    }

    pub fn list_mut(&mut self, kind: SkillKind) -> &mut Vec<String> {
        match kind {
            SkillKind::Technical => &mut self.technical,
            SkillKind::Soft => &mut self.soft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Technical,
    Soft,
}

/// The two list-typed sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySection {
    Experience,
    Education,
}

impl EntrySection {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySection::Experience => "experience",
            EntrySection::Education => "education",
        }
    }
}

/// Wholesale replacement value for one top-level section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "camelCase")]
pub enum SectionPayload {
    PersonalInfo(PersonalInfo),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Skills),
}

impl SectionPayload {
    pub fn section_name(&self) -> &'static str {
        match self {
            SectionPayload::PersonalInfo(_) => "personalInfo",
            SectionPayload::Experience(_) => "experience",
            SectionPayload::Education(_) => "education",
            SectionPayload::Skills(_) => "skills",
        }
    }
}

/// A new list entry. Any id it carries is replaced on insertion.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryDraft {
    Experience(ExperienceEntry),
    Education(EducationEntry),
}

impl EntryDraft {
    pub fn blank(section: EntrySection) -> Self {
        match section {
            EntrySection::Experience => EntryDraft::Experience(ExperienceEntry::default()),
            EntrySection::Education => EntryDraft::Education(EducationEntry::default()),
        }
    }

    pub fn section(&self) -> EntrySection {
        match self {
            EntryDraft::Experience(_) => EntrySection::Experience,
            EntryDraft::Education(_) => EntrySection::Education,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperienceField {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Field(String),
    GraduationDate(String),
    Gpa(Option<String>),
}

/// A single-field edit, typed by the section it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "change", rename_all = "snake_case")]
pub enum EntryChange {
    Experience(ExperienceField),
    Education(EducationField),
}

impl EntryChange {
    pub fn section(&self) -> EntrySection {
        match self {
            EntryChange::Experience(_) => EntrySection::Experience,
            EntryChange::Education(_) => EntrySection::Education,
        }
    }
}

impl ExperienceEntry {
    pub fn apply(&mut self, field: ExperienceField) {
        match field {
            ExperienceField::Company(v) => self.company = v,
            ExperienceField::Position(v) => self.position = v,
            ExperienceField::StartDate(v) => self.start_date = v,
            ExperienceField::EndDate(v) => self.end_date = v,
            ExperienceField::Current(v) => self.current = v,
            ExperienceField::Description(v) => self.description = v,
        }
    }
}

impl EducationEntry {
    pub fn apply(&mut self, field: EducationField) {
        match field {
            EducationField::Institution(v) => self.institution = v,
            EducationField::Degree(v) => self.degree = v,
            EducationField::Field(v) => self.field = v,
            EducationField::GraduationDate(v) => self.graduation_date = v,
            EducationField::Gpa(v) => self.gpa = v,
        }
    }
}
