//! Section-scoped operations on a `ResumeDocument`.
//!
//! Every operation is total. Missing ids and out-of-range indexes leave the
//! document untouched; the returned `bool` reports whether anything changed.

use chrono::Utc;

use crate::models::resume::{
    EntryChange, EntryDraft, EntrySection, ResumeDocument, SectionPayload, SkillKind,
};

impl ResumeDocument {
    /// Replaces one top-level section wholesale. No field-level merge happens here.
    pub fn update_section(&mut self, payload: SectionPayload) {
        match payload {
            SectionPayload::PersonalInfo(v) => self.personal_info = v,
            SectionPayload::Experience(v) => self.experience = v,
            SectionPayload::Education(v) => self.education = v,
            SectionPayload::Skills(v) => self.skills = v,
        }
    }

    /// Appends the draft to its section under a fresh id and returns that id.
    pub fn add_entry(&mut self, draft: EntryDraft) -> String {
        let id = self.fresh_id(draft.section());
        match draft {
            EntryDraft::Experience(mut entry) => {
                entry.id = id.clone();
                self.experience.push(entry);
            }
            EntryDraft::Education(mut entry) => {
                entry.id = id.clone();
                self.education.push(entry);
            }
        }
        id
    }

    pub fn remove_entry(&mut self, section: EntrySection, id: &str) -> bool {
        let before = self.entry_count(section);
        match section {
            EntrySection::Experience => self.experience.retain(|e| e.id != id),
            EntrySection::Education => self.education.retain(|e| e.id != id),
        }
        self.entry_count(section) != before
    }

    /// Replaces a single field on the entry with `id` in the change's section.
    pub fn update_entry(&mut self, id: &str, change: EntryChange) -> bool {
        match change {
            EntryChange::Experience(field) => {
                match self.experience.iter_mut().find(|e| e.id == id) {
                    Some(entry) => {
                        entry.apply(field);
                        true
                    }
                    None => false,
                }
            }
            EntryChange::Education(field) => {
                match self.education.iter_mut().find(|e| e.id == id) {
                    Some(entry) => {
                        entry.apply(field);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub fn add_skill(&mut self, kind: SkillKind, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.skills.list_mut(kind).push(text.to_string());
        true
    }

    pub fn remove_skill(&mut self, kind: SkillKind, index: usize) -> bool {
        let list = self.skills.list_mut(kind);
        if index >= list.len() {
            return false;
        }
        list.remove(index);
        true
    }

    pub fn entry_count(&self, section: EntrySection) -> usize {
        match section {
            EntrySection::Experience => self.experience.len(),
            EntrySection::Education => self.education.len(),
        }
    }

    fn has_entry(&self, section: EntrySection, id: &str) -> bool {
        match section {
            EntrySection::Experience => self.experience.iter().any(|e| e.id == id),
            EntrySection::Education => self.education.iter().any(|e| e.id == id),
        }
    }

    /// Millisecond timestamp, bumped past any id already taken in the section.
    fn fresh_id(&self, section: EntrySection) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.has_entry(section, &candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
