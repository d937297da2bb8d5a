use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    EmergencyContact, FormData, JobDetails, OnboardingStep, PersonalInfo, ReviewSubmit,
    SkillsPreferences,
};

/// One step's validated payload, ready to be stored in its slot.
///
/// The variants only carry entities produced by the validation engine, so an
/// unvalidated shape cannot reach the store by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepSlot {
    Personal(PersonalInfo),
    Job(JobDetails),
    Skills(SkillsPreferences),
    Emergency(EmergencyContact),
    Review(ReviewSubmit),
}

impl StepSlot {
    pub const fn step(&self) -> OnboardingStep {
        match self {
            Self::Personal(_) => OnboardingStep::PersonalInfo,
            Self::Job(_) => OnboardingStep::JobDetails,
            Self::Skills(_) => OnboardingStep::SkillsPreferences,
            Self::Emergency(_) => OnboardingStep::EmergencyContact,
            Self::Review(_) => OnboardingStep::ReviewSubmit,
        }
    }
}

/// In-memory accumulator for one onboarding session.
///
/// Owned by a single UI session; discarded when the session ends.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormStore {
    data: FormData,
    has_unsaved_changes: bool,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a step's slot with freshly validated data.
    ///
    /// Whole-slot replacement: re-submitting a step overwrites whatever the
    /// slot held before. Storing also clears the unsaved-changes flag.
    pub fn update_slot(&mut self, slot: StepSlot) {
        let step = slot.step();
        match slot {
            StepSlot::Personal(personal) => self.data.personal = Some(personal),
            StepSlot::Job(job) => self.data.job = Some(job),
            StepSlot::Skills(skills) => self.data.skills = Some(skills),
            StepSlot::Emergency(emergency) => self.data.emergency = Some(emergency),
            StepSlot::Review(review) => self.data.review = Some(review),
        }
        self.has_unsaved_changes = false;
        debug!(step = step.slot_key(), "stored validated step data");
    }

    /// Flag pending edits; the UI calls this on any field change.
    pub fn mark_changed(&mut self) {
        self.has_unsaved_changes = true;
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }
}

/// Calendar age at `today`, with birthday rounding: the naive year
/// difference is reduced by one until the birth month/day has been reached.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Calendar age as of the local date, for display next to the date-of-birth
/// field. Absent input yields 0.
///
/// The string is expected to have passed the personal-info schema already;
/// anything that does not parse as an ISO date also yields 0.
pub fn compute_age(date_of_birth: Option<&str>) -> i32 {
    let Some(raw) = date_of_birth else {
        return 0;
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(born) => age_on(born, Local::now().date_naive()),
        Err(_) => 0,
    }
}

/// Whether an ISO date lands on the weekend.
///
/// The company runs a Friday/Saturday weekend (five-day week, Sunday through
/// Thursday), so Friday and Saturday are the weekend days here — not
/// Saturday/Sunday. Unparseable input yields false; callers are expected to
/// validate the string through the engine first.
pub fn falls_on_weekend(date: &str) -> bool {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => matches!(parsed.weekday(), Weekday::Fri | Weekday::Sat),
        Err(_) => false,
    }
}
