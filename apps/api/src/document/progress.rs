use serde::Serialize;

/// Wizard steps, in the order the form presents them.
pub const STEPS: &[&str] = &["Personal Info", "Experience", "Education", "Skills"];

/// Percentage of the wizard reached when standing on `current_step_index`.
pub fn compute_progress(current_step_index: usize, total_steps: usize) -> f64 {
    if total_steps == 0 {
        return 0.0;
    }
    ((current_step_index + 1) as f64 / total_steps as f64 * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
}

impl StepCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns false when already on the last step.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < STEPS.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already on the first step.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn view(&self) -> StepView {
        StepView {
            index: self.index,
            title: STEPS[self.index()].to_string(),
            total: STEPS.len(),
            progress: compute_progress(self.index, STEPS.len()),
            is_first: self.index == 0,
            is_last: self.index + 1 == STEPS.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    pub index: usize,
    pub title: String,
    pub total: usize,
    pub progress: f64,
    pub is_first: bool,
    pub is_last: bool,
}
