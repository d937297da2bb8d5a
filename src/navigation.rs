use serde::{Deserialize, Serialize};

use crate::domain::{OnboardingStep, TOTAL_STEPS};

/// Tracks which wizard page is active.
///
/// Every operation clamps or ignores out-of-range movement instead of
/// failing; the controller cannot leave the five-step domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepController {
    current: OnboardingStep,
}

impl StepController {
    pub const fn new() -> Self {
        Self {
            current: OnboardingStep::PersonalInfo,
        }
    }

    pub const fn current(&self) -> OnboardingStep {
        self.current
    }

    /// One-based page number, in [1, 5].
    pub const fn current_step(&self) -> u8 {
        self.current.number()
    }

    /// Move to the next page; no-op on the last one.
    pub fn advance(&mut self) {
        if let Some(next) = OnboardingStep::from_number(self.current.number() + 1) {
            self.current = next;
        }
    }

    /// Move to the previous page; no-op on the first one.
    pub fn retreat(&mut self) {
        if let Some(previous) = OnboardingStep::from_number(self.current.number().saturating_sub(1))
        {
            self.current = previous;
        }
    }

    /// Jump straight to a page number; numbers outside [1, 5] are ignored.
    pub fn jump_to(&mut self, step: u8) {
        if let Some(target) = OnboardingStep::from_number(step) {
            self.current = target;
        }
    }

    /// Completed share of the wizard, recomputed from the current page.
    pub fn progress_percent(&self) -> u8 {
        (self.current.number() as u16 * 100 / TOTAL_STEPS as u16) as u8
    }

    pub fn is_first_step(&self) -> bool {
        self.current.number() == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current.number() == TOTAL_STEPS
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}
