use serde::{Deserialize, Serialize};

use crate::models::resume::{EntryChange, ExperienceField, ResumeDocument, SkillKind};

/// Where an accepted suggestion's replacement text lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum SuggestionTarget {
    /// Replaces `personalInfo.summary`.
    Summary,
    /// Replaces the description of one experience entry.
    ExperienceDescription { id: String },
    /// Appended as a new skill.
    Skill { kind: SkillKind },
    /// Advice about the whole resume; nothing to write.
    Overall,
}

impl ResumeDocument {
    /// Writes `text` into the targeted field. Returns false when nothing changed.
    pub fn apply_suggestion(&mut self, target: SuggestionTarget, text: &str) -> bool {
        match target {
            SuggestionTarget::Summary => {
                self.personal_info.summary = text.to_string();
                true
            }
            SuggestionTarget::ExperienceDescription { id } => self.update_entry(
                &id,
                EntryChange::Experience(ExperienceField::Description(text.to_string())),
            ),
            SuggestionTarget::Skill { kind } => self.add_skill(kind, text),
            SuggestionTarget::Overall => false,
        }
    }
}
