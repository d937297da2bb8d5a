use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Number of pages in the onboarding wizard.
pub const TOTAL_STEPS: u8 = 5;

/// One page of the onboarding wizard, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    PersonalInfo,
    JobDetails,
    SkillsPreferences,
    EmergencyContact,
    ReviewSubmit,
}

impl OnboardingStep {
    pub const fn ordered() -> [Self; TOTAL_STEPS as usize] {
        [
            Self::PersonalInfo,
            Self::JobDetails,
            Self::SkillsPreferences,
            Self::EmergencyContact,
            Self::ReviewSubmit,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::JobDetails => "Job Details",
            Self::SkillsPreferences => "Skills & Preferences",
            Self::EmergencyContact => "Emergency Contact",
            Self::ReviewSubmit => "Review & Submit",
        }
    }

    /// Slot name in the accumulated form payload.
    pub const fn slot_key(self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal",
            Self::JobDetails => "job",
            Self::SkillsPreferences => "skills",
            Self::EmergencyContact => "emergency",
            Self::ReviewSubmit => "review",
        }
    }

    /// One-based page number shown in the progress header.
    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::JobDetails => 2,
            Self::SkillsPreferences => 3,
            Self::EmergencyContact => 4,
            Self::ReviewSubmit => 5,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::JobDetails),
            3 => Some(Self::SkillsPreferences),
            4 => Some(Self::EmergencyContact),
            5 => Some(Self::ReviewSubmit),
            _ => None,
        }
    }
}

/// Employment arrangement selected on the job details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl JobType {
    pub const fn ordered() -> [Self; 3] {
        [Self::FullTime, Self::PartTime, Self::Contract]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }

    /// Parse the wire label supplied by the job-type picker.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|job_type| job_type.label() == value)
    }
}

/// Reference to an uploaded profile image; the bytes live with the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageRef {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

/// Personal info page as the UI submits it, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub profile_picture: Option<ProfileImageRef>,
}

/// Job details page as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailsDraft {
    pub department: String,
    pub position_title: String,
    pub start_date: String,
    pub job_type: String,
    pub salary_expectation: f64,
    pub manager: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursDraft {
    pub start: String,
    pub end: String,
}

/// Skills page as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsPreferencesDraft {
    pub primary_skills: Vec<String>,
    pub skills_experience: BTreeMap<String, f32>,
    pub working_hours: WorkingHoursDraft,
    pub remote_work_preference: i32,
    pub manager_approved: Option<bool>,
    pub extra_notes: Option<String>,
}

/// Emergency contact page as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactDraft {
    pub contact_name: String,
    pub relationship: String,
    pub phone_number: String,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

/// Final confirmation page as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmitDraft {
    pub confirmation_checked: bool,
}

/// Every page at once, used by the final gate before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteFormDraft {
    pub personal: PersonalInfoDraft,
    pub job: JobDetailsDraft,
    pub skills: SkillsPreferencesDraft,
    pub emergency: EmergencyContactDraft,
    pub review: ReviewSubmitDraft,
}

/// Personal info after the schema accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub profile_picture: Option<ProfileImageRef>,
}

/// Job details after the schema accepted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub department: String,
    pub position_title: String,
    pub start_date: NaiveDate,
    pub job_type: JobType,
    pub salary_expectation: f64,
    pub manager: String,
}

/// Daily working window; start is strictly before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Skills and preferences after the schema accepted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsPreferences {
    pub primary_skills: Vec<String>,
    pub skills_experience: BTreeMap<String, f32>,
    pub working_hours: WorkingHours,
    pub remote_work_preference: u8,
    pub manager_approved: Option<bool>,
    pub extra_notes: Option<String>,
}

/// Emergency contact after the schema accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub contact_name: String,
    pub relationship: String,
    pub phone_number: String,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

/// Confirmed review acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmit {
    pub confirmation_checked: bool,
}

/// Accumulated wizard payload; a slot is populated only after its step's
/// schema accepted the submission. Slot ordering is a convention enforced by
/// the step controller, not by this record.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub personal: Option<PersonalInfo>,
    pub job: Option<JobDetails>,
    pub skills: Option<SkillsPreferences>,
    pub emergency: Option<EmergencyContact>,
    pub review: Option<ReviewSubmit>,
}

impl FormData {
    pub fn is_complete(&self) -> bool {
        self.missing_steps().is_empty()
    }

    /// Steps whose slot has not been populated yet, in wizard order.
    pub fn missing_steps(&self) -> Vec<OnboardingStep> {
        OnboardingStep::ordered()
            .into_iter()
            .filter(|step| !self.has_slot(*step))
            .collect()
    }

    pub fn has_slot(&self, step: OnboardingStep) -> bool {
        match step {
            OnboardingStep::PersonalInfo => self.personal.is_some(),
            OnboardingStep::JobDetails => self.job.is_some(),
            OnboardingStep::SkillsPreferences => self.skills.is_some(),
            OnboardingStep::EmergencyContact => self.emergency.is_some(),
            OnboardingStep::ReviewSubmit => self.review.is_some(),
        }
    }
}
