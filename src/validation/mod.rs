//! Schema validation for the onboarding wizard.
//!
//! Each step has one pure schema turning the UI's loosely-typed draft into a
//! validated entity or a complete list of field-scoped failures. Nothing
//! here aborts: every invocation returns a full result, and the engine keeps
//! no state beyond its injected configuration.

mod config;
mod rules;
mod schemas;

pub use config::{SalaryRange, SalaryRangeTable, ValidationConfig};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    CompleteFormDraft, EmergencyContact, EmergencyContactDraft, FormData, JobDetails,
    JobDetailsDraft, OnboardingStep, PersonalInfo, PersonalInfoDraft, ReviewSubmit,
    ReviewSubmitDraft, SkillsPreferences, SkillsPreferencesDraft,
};

/// One field-scoped validation failure.
///
/// `field` is the wire name of the offending field: dot-free for top-level
/// fields ("fullName"), slash of one extra segment for nested ones
/// ("workingHours.end", "skillsExperience.rust"), and rooted under the slot
/// key by the combined schema ("job.salaryExpectation").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Everything a schema invocation found wrong, together.
///
/// Independent field failures are all collected in one pass; only checks
/// that depend on another field (salary-by-jobType, working-hours ordering)
/// wait for their prerequisite to be evaluable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{} field(s) failed validation", .issues.len())]
pub struct ValidationErrors {
    pub issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|entry| entry.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|entry| entry.field.as_str()).collect()
    }
}

/// Stateless engine applying the per-step schemas to raw drafts.
///
/// Time-relative bounds (minimum age, start-date window) are evaluated
/// against the `today` argument, so a single call is internally consistent
/// no matter how long it runs; callers pass one date per request.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn validate_personal(
        &self,
        draft: &PersonalInfoDraft,
        today: NaiveDate,
    ) -> Result<PersonalInfo, ValidationErrors> {
        report(
            OnboardingStep::PersonalInfo,
            schemas::personal_info(draft, &self.config, today),
        )
    }

    pub fn validate_job(
        &self,
        draft: &JobDetailsDraft,
        today: NaiveDate,
    ) -> Result<JobDetails, ValidationErrors> {
        report(
            OnboardingStep::JobDetails,
            schemas::job_details(draft, &self.config, today),
        )
    }

    pub fn validate_skills(
        &self,
        draft: &SkillsPreferencesDraft,
    ) -> Result<SkillsPreferences, ValidationErrors> {
        report(
            OnboardingStep::SkillsPreferences,
            schemas::skills_preferences(draft, &self.config),
        )
    }

    pub fn validate_emergency(
        &self,
        draft: &EmergencyContactDraft,
    ) -> Result<EmergencyContact, ValidationErrors> {
        report(
            OnboardingStep::EmergencyContact,
            schemas::emergency_contact(draft, &self.config),
        )
    }

    pub fn validate_review(
        &self,
        draft: &ReviewSubmitDraft,
    ) -> Result<ReviewSubmit, ValidationErrors> {
        report(
            OnboardingStep::ReviewSubmit,
            schemas::review_submit(draft),
        )
    }

    /// Final gate before submission: all five schemas over their slots.
    /// No cross-step rules are re-derived here.
    pub fn validate_complete(
        &self,
        draft: &CompleteFormDraft,
        today: NaiveDate,
    ) -> Result<FormData, ValidationErrors> {
        let outcome = schemas::complete_form(draft, &self.config, today);
        if let Err(errors) = &outcome {
            debug!(issues = errors.issues.len(), "complete form rejected");
        }
        outcome
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

fn report<T>(
    step: OnboardingStep,
    outcome: Result<T, ValidationErrors>,
) -> Result<T, ValidationErrors> {
    if let Err(errors) = &outcome {
        debug!(
            step = step.slot_key(),
            issues = errors.issues.len(),
            "step validation rejected"
        );
    }
    outcome
}
