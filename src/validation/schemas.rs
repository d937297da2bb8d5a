use chrono::{NaiveDate, NaiveTime};
use mime::Mime;

use super::config::ValidationConfig;
use super::rules::{
    check_phone, collect_prefixed, is_valid_email, issue, parse_iso_date, parse_time_of_day,
    require_text,
};
use super::{FieldIssue, ValidationErrors};
use crate::domain::{
    CompleteFormDraft, EmergencyContact, EmergencyContactDraft, FormData, JobDetails,
    JobDetailsDraft, JobType, PersonalInfo, PersonalInfoDraft, ProfileImageRef, ReviewSubmit,
    ReviewSubmitDraft, SkillsPreferences, SkillsPreferencesDraft, WorkingHours,
};
use crate::store::age_on;

pub(crate) fn personal_info(
    draft: &PersonalInfoDraft,
    config: &ValidationConfig,
    today: NaiveDate,
) -> Result<PersonalInfo, ValidationErrors> {
    let mut issues = Vec::new();

    if require_text(
        &mut issues,
        "fullName",
        &draft.full_name,
        "Full name is required",
    ) && draft.full_name.split_whitespace().count() < 2
    {
        issues.push(issue(
            "fullName",
            "Please enter at least 2 words (first and last name)",
        ));
    }

    if require_text(&mut issues, "email", &draft.email, "Email is required")
        && !is_valid_email(draft.email.trim())
    {
        issues.push(issue("email", "Invalid email address"));
    }

    check_phone(&mut issues, "phoneNumber", &draft.phone_number);

    let date_of_birth = if require_text(
        &mut issues,
        "dateOfBirth",
        &draft.date_of_birth,
        "Date of birth is required",
    ) {
        match parse_iso_date(draft.date_of_birth.trim()) {
            Some(born) => {
                if age_on(born, today) < config.minimum_age_years {
                    issues.push(issue(
                        "dateOfBirth",
                        format!("Must be at least {} years old", config.minimum_age_years),
                    ));
                }
                Some(born)
            }
            None => {
                issues.push(issue(
                    "dateOfBirth",
                    "Date of birth must be a valid ISO date (YYYY-MM-DD)",
                ));
                None
            }
        }
    } else {
        None
    };

    let profile_picture = draft
        .profile_picture
        .as_ref()
        .and_then(|image| check_profile_image(&mut issues, image, config));

    match date_of_birth {
        Some(date_of_birth) if issues.is_empty() => Ok(PersonalInfo {
            full_name: draft.full_name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone_number: draft.phone_number.clone(),
            date_of_birth,
            profile_picture,
        }),
        _ => Err(ValidationErrors::new(issues)),
    }
}

/// Optional-field checks: only run when an image was actually attached.
/// Size and type failures are independent and can surface together.
fn check_profile_image(
    issues: &mut Vec<FieldIssue>,
    image: &ProfileImageRef,
    config: &ValidationConfig,
) -> Option<ProfileImageRef> {
    if image.size_bytes > config.max_image_bytes {
        issues.push(issue(
            "profilePicture",
            format!(
                "File size must be less than {}MB",
                config.max_image_bytes / (1024 * 1024)
            ),
        ));
    }

    let essence = image
        .content_type
        .parse::<Mime>()
        .ok()
        .map(|parsed| parsed.essence_str().to_string());
    match essence {
        Some(essence) if config.accepted_image_types.contains(&essence) => Some(ProfileImageRef {
            file_name: image.file_name.clone(),
            size_bytes: image.size_bytes,
            content_type: essence,
        }),
        _ => {
            issues.push(issue(
                "profilePicture",
                "Only JPG and PNG files are accepted",
            ));
            None
        }
    }
}

pub(crate) fn job_details(
    draft: &JobDetailsDraft,
    config: &ValidationConfig,
    today: NaiveDate,
) -> Result<JobDetails, ValidationErrors> {
    let mut issues = Vec::new();

    if require_text(
        &mut issues,
        "department",
        &draft.department,
        "Department is required",
    ) && !config
        .departments
        .iter()
        .any(|department| department == draft.department.trim())
    {
        issues.push(issue(
            "department",
            "Department must be one of the available departments",
        ));
    }

    if draft.position_title.trim().chars().count() < 3 {
        issues.push(issue(
            "positionTitle",
            "Position title must be at least 3 characters",
        ));
    }

    let start_date = if require_text(
        &mut issues,
        "startDate",
        &draft.start_date,
        "Start date is required",
    ) {
        match parse_iso_date(draft.start_date.trim()) {
            Some(date) => {
                let offset_days = date.signed_duration_since(today).num_days();
                if offset_days < 0 || offset_days > config.start_date_window_days {
                    issues.push(issue(
                        "startDate",
                        format!(
                            "Start date must be today or within {} days in the future",
                            config.start_date_window_days
                        ),
                    ));
                }
                Some(date)
            }
            None => {
                issues.push(issue(
                    "startDate",
                    "Start date must be a valid ISO date (YYYY-MM-DD)",
                ));
                None
            }
        }
    } else {
        None
    };

    let job_type = if require_text(
        &mut issues,
        "jobType",
        &draft.job_type,
        "Job type is required",
    ) {
        match JobType::parse(draft.job_type.trim()) {
            Some(parsed) => Some(parsed),
            None => {
                issues.push(issue(
                    "jobType",
                    "Job type must be Full-time, Part-time, or Contract",
                ));
                None
            }
        }
    } else {
        None
    };

    let salary_positive = draft.salary_expectation > 0.0;
    if !salary_positive {
        issues.push(issue("salaryExpectation", "Salary must be greater than 0"));
    }

    // Cross-field rule: the admissible band depends on the job type, so it
    // only runs once the job type parsed and the salary cleared the
    // positivity check. The failure lands on salaryExpectation either way.
    if let Some(job_type) = job_type {
        if salary_positive
            && !config
                .salary_ranges
                .for_job_type(job_type)
                .contains(draft.salary_expectation)
        {
            issues.push(issue(
                "salaryExpectation",
                "Salary expectation is out of range for selected job type",
            ));
        }
    }

    require_text(
        &mut issues,
        "manager",
        &draft.manager,
        "Manager selection is required",
    );

    match (start_date, job_type) {
        (Some(start_date), Some(job_type)) if issues.is_empty() => Ok(JobDetails {
            department: draft.department.trim().to_string(),
            position_title: draft.position_title.trim().to_string(),
            start_date,
            job_type,
            salary_expectation: draft.salary_expectation,
            manager: draft.manager.trim().to_string(),
        }),
        _ => Err(ValidationErrors::new(issues)),
    }
}

pub(crate) fn skills_preferences(
    draft: &SkillsPreferencesDraft,
    config: &ValidationConfig,
) -> Result<SkillsPreferences, ValidationErrors> {
    let mut issues = Vec::new();

    if draft.primary_skills.len() < config.minimum_primary_skills {
        issues.push(issue(
            "primarySkills",
            format!(
                "Please select at least {} skills",
                config.minimum_primary_skills
            ),
        ));
    }

    for (skill, years) in &draft.skills_experience {
        if *years < 0.0 || *years > config.max_experience_years {
            issues.push(issue(
                &format!("skillsExperience.{skill}"),
                format!(
                    "Experience must be between 0 and {} years",
                    config.max_experience_years
                ),
            ));
        }
    }

    let start = check_time(
        &mut issues,
        "workingHours.start",
        &draft.working_hours.start,
        "Start time is required",
    );
    let end = check_time(
        &mut issues,
        "workingHours.end",
        &draft.working_hours.end,
        "End time is required",
    );

    // Cross-field rule: compared on the same day, the window must be
    // forward; an inverted or empty window is the end field's fault.
    if let (Some(start), Some(end)) = (start, end) {
        if start >= end {
            issues.push(issue("workingHours.end", "End time must be after start time"));
        }
    }

    if !(0..=100).contains(&draft.remote_work_preference) {
        issues.push(issue(
            "remoteWorkPreference",
            "Remote work preference must be between 0 and 100",
        ));
    }

    if let Some(notes) = &draft.extra_notes {
        if notes.chars().count() > config.max_notes_chars {
            issues.push(issue(
                "extraNotes",
                format!("Notes cannot exceed {} characters", config.max_notes_chars),
            ));
        }
    }

    match (start, end) {
        (Some(start), Some(end)) if issues.is_empty() => Ok(SkillsPreferences {
            primary_skills: draft.primary_skills.clone(),
            skills_experience: draft.skills_experience.clone(),
            working_hours: WorkingHours { start, end },
            remote_work_preference: draft.remote_work_preference as u8,
            manager_approved: draft.manager_approved,
            extra_notes: draft.extra_notes.clone(),
        }),
        _ => Err(ValidationErrors::new(issues)),
    }
}

fn check_time(
    issues: &mut Vec<FieldIssue>,
    field: &str,
    value: &str,
    required_message: &str,
) -> Option<NaiveTime> {
    if !require_text(issues, field, value, required_message) {
        return None;
    }
    match parse_time_of_day(value.trim()) {
        Some(parsed) => Some(parsed),
        None => {
            issues.push(issue(field, "Time must be in HH:MM format"));
            None
        }
    }
}

pub(crate) fn emergency_contact(
    draft: &EmergencyContactDraft,
    config: &ValidationConfig,
) -> Result<EmergencyContact, ValidationErrors> {
    let mut issues = Vec::new();

    require_text(
        &mut issues,
        "contactName",
        &draft.contact_name,
        "Contact name is required",
    );

    if require_text(
        &mut issues,
        "relationship",
        &draft.relationship,
        "Relationship is required",
    ) && !config
        .relationships
        .iter()
        .any(|relationship| relationship == draft.relationship.trim())
    {
        issues.push(issue(
            "relationship",
            "Relationship must be one of the available options",
        ));
    }

    check_phone(&mut issues, "phoneNumber", &draft.phone_number);

    if issues.is_empty() {
        Ok(EmergencyContact {
            contact_name: draft.contact_name.trim().to_string(),
            relationship: draft.relationship.trim().to_string(),
            phone_number: draft.phone_number.clone(),
            guardian_name: draft.guardian_name.clone(),
            guardian_phone: draft.guardian_phone.clone(),
        })
    } else {
        Err(ValidationErrors::new(issues))
    }
}

pub(crate) fn review_submit(draft: &ReviewSubmitDraft) -> Result<ReviewSubmit, ValidationErrors> {
    if draft.confirmation_checked {
        Ok(ReviewSubmit {
            confirmation_checked: true,
        })
    } else {
        Err(ValidationErrors::new(vec![issue(
            "confirmationChecked",
            "You must confirm all information is correct",
        )]))
    }
}

/// Final gate: the five step schemas over their slots, nothing more. Field
/// paths are re-rooted under the slot key ("job.salaryExpectation").
pub(crate) fn complete_form(
    draft: &CompleteFormDraft,
    config: &ValidationConfig,
    today: NaiveDate,
) -> Result<FormData, ValidationErrors> {
    let mut issues = Vec::new();

    let personal = gather(&mut issues, "personal", personal_info(&draft.personal, config, today));
    let job = gather(&mut issues, "job", job_details(&draft.job, config, today));
    let skills = gather(&mut issues, "skills", skills_preferences(&draft.skills, config));
    let emergency = gather(
        &mut issues,
        "emergency",
        emergency_contact(&draft.emergency, config),
    );
    let review = gather(&mut issues, "review", review_submit(&draft.review));

    match (personal, job, skills, emergency, review) {
        (Some(personal), Some(job), Some(skills), Some(emergency), Some(review)) => Ok(FormData {
            personal: Some(personal),
            job: Some(job),
            skills: Some(skills),
            emergency: Some(emergency),
            review: Some(review),
        }),
        _ => Err(ValidationErrors::new(issues)),
    }
}

fn gather<T>(
    issues: &mut Vec<FieldIssue>,
    slot_key: &str,
    outcome: Result<T, ValidationErrors>,
) -> Option<T> {
    match outcome {
        Ok(entity) => Some(entity),
        Err(errors) => {
            collect_prefixed(issues, slot_key, errors);
            None
        }
    }
}
