//! Core state and validation for the employee onboarding wizard.
//!
//! Three cooperating pieces, all synchronous and in-memory, composed by the
//! host UI layer:
//!
//! - [`StepController`] tracks which of the five wizard pages is active and
//!   derives progress from it.
//! - [`FormStore`] accumulates each page's validated payload and tracks an
//!   unsaved-changes flag.
//! - [`ValidationEngine`] is the single point where loosely-typed UI drafts
//!   become validated entities, reporting every field failure at once.
//!
//! Rendering, file upload, manager lookup, and submission transport belong
//! to external collaborators; this crate owns only the session state and
//! the rules.

pub mod domain;
pub mod navigation;
pub mod store;
pub mod validation;

pub use domain::{
    CompleteFormDraft, EmergencyContact, EmergencyContactDraft, FormData, JobDetails,
    JobDetailsDraft, JobType, OnboardingStep, PersonalInfo, PersonalInfoDraft, ProfileImageRef,
    ReviewSubmit, ReviewSubmitDraft, SkillsPreferences, SkillsPreferencesDraft, WorkingHours,
    WorkingHoursDraft, TOTAL_STEPS,
};
pub use navigation::StepController;
pub use store::{age_on, compute_age, falls_on_weekend, FormStore, StepSlot};
pub use validation::{
    FieldIssue, SalaryRange, SalaryRangeTable, ValidationConfig, ValidationEngine,
    ValidationErrors,
};

#[cfg(test)]
mod tests;
