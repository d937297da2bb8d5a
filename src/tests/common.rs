use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::domain::{
    CompleteFormDraft, EmergencyContactDraft, JobDetailsDraft, PersonalInfoDraft, PersonalInfo,
    ProfileImageRef, ReviewSubmitDraft, SkillsPreferencesDraft, WorkingHoursDraft,
};
use crate::validation::ValidationEngine;

/// Fixed evaluation date so the time-relative rules stay deterministic.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

pub(super) fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(super) fn engine() -> ValidationEngine {
    ValidationEngine::default()
}

pub(super) fn personal_draft() -> PersonalInfoDraft {
    PersonalInfoDraft {
        full_name: "Jordan Alvarez".to_string(),
        email: "jordan.alvarez@example.com".to_string(),
        phone_number: "+1-515-555-0117".to_string(),
        date_of_birth: "1994-11-23".to_string(),
        profile_picture: None,
    }
}

pub(super) fn profile_image() -> ProfileImageRef {
    ProfileImageRef {
        file_name: "headshot.png".to_string(),
        size_bytes: 512 * 1024,
        content_type: "image/png".to_string(),
    }
}

pub(super) fn personal_entity() -> PersonalInfo {
    engine()
        .validate_personal(&personal_draft(), today())
        .expect("draft should validate")
}

pub(super) fn job_draft() -> JobDetailsDraft {
    JobDetailsDraft {
        department: "Engineering".to_string(),
        position_title: "Platform Engineer".to_string(),
        start_date: iso(today() + Duration::days(14)),
        job_type: "Full-time".to_string(),
        salary_expectation: 95_000.0,
        manager: "mgr-ava-chen".to_string(),
    }
}

pub(super) fn skills_draft() -> SkillsPreferencesDraft {
    let mut skills_experience = BTreeMap::new();
    skills_experience.insert("Rust".to_string(), 4.0);
    skills_experience.insert("SQL".to_string(), 6.5);
    skills_experience.insert("Kubernetes".to_string(), 2.0);

    SkillsPreferencesDraft {
        primary_skills: vec![
            "Rust".to_string(),
            "SQL".to_string(),
            "Kubernetes".to_string(),
        ],
        skills_experience,
        working_hours: WorkingHoursDraft {
            start: "09:00".to_string(),
            end: "17:00".to_string(),
        },
        remote_work_preference: 60,
        manager_approved: None,
        extra_notes: None,
    }
}

pub(super) fn emergency_draft() -> EmergencyContactDraft {
    EmergencyContactDraft {
        contact_name: "Maria Alvarez".to_string(),
        relationship: "Parent".to_string(),
        phone_number: "+1-515-555-0142".to_string(),
        guardian_name: None,
        guardian_phone: None,
    }
}

pub(super) fn review_draft() -> ReviewSubmitDraft {
    ReviewSubmitDraft {
        confirmation_checked: true,
    }
}

pub(super) fn complete_draft() -> CompleteFormDraft {
    CompleteFormDraft {
        personal: personal_draft(),
        job: job_draft(),
        skills: skills_draft(),
        emergency: emergency_draft(),
        review: review_draft(),
    }
}
