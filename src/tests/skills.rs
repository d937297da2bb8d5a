use chrono::NaiveTime;

use super::common::*;

#[test]
fn accepts_a_valid_draft() {
    let entity = engine()
        .validate_skills(&skills_draft())
        .expect("draft should validate");

    assert_eq!(
        entity.working_hours.start,
        NaiveTime::from_hms_opt(9, 0, 0).expect("valid time")
    );
    assert_eq!(
        entity.working_hours.end,
        NaiveTime::from_hms_opt(17, 0, 0).expect("valid time")
    );
    assert_eq!(entity.remote_work_preference, 60);
}

#[test]
fn inverted_hours_blame_the_end_field() {
    let mut draft = skills_draft();
    draft.working_hours.start = "09:00".to_string();
    draft.working_hours.end = "08:00".to_string();

    match engine().validate_skills(&draft) {
        Err(errors) => {
            let entry = errors.for_field("workingHours.end").expect("ordering issue");
            assert!(entry.message.contains("after start time"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn equal_hours_are_an_empty_window() {
    let mut draft = skills_draft();
    draft.working_hours.end = draft.working_hours.start.clone();

    match engine().validate_skills(&draft) {
        Err(errors) => assert!(errors.for_field("workingHours.end").is_some()),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn unparseable_time_lands_on_its_own_field() {
    let mut draft = skills_draft();
    draft.working_hours.start = "9am".to_string();

    match engine().validate_skills(&draft) {
        Err(errors) => {
            let entry = errors.for_field("workingHours.start").expect("format issue");
            assert!(entry.message.contains("HH:MM"));
            // Ordering cannot be judged without both ends, so the valid end
            // field carries no issue.
            assert!(errors.for_field("workingHours.end").is_none());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn too_few_primary_skills_are_rejected() {
    let mut draft = skills_draft();
    draft.primary_skills.truncate(2);

    match engine().validate_skills(&draft) {
        Err(errors) => {
            let entry = errors.for_field("primarySkills").expect("cardinality issue");
            assert!(entry.message.contains("at least 3"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn experience_outside_the_range_names_the_skill() {
    let mut draft = skills_draft();
    draft.skills_experience.insert("Rust".to_string(), 25.0);

    match engine().validate_skills(&draft) {
        Err(errors) => {
            let entry = errors
                .for_field("skillsExperience.Rust")
                .expect("experience issue");
            assert!(entry.message.contains("between 0 and 20"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn remote_preference_must_be_a_percentage() {
    let mut draft = skills_draft();
    draft.remote_work_preference = 101;
    match engine().validate_skills(&draft) {
        Err(errors) => assert!(errors.for_field("remoteWorkPreference").is_some()),
        other => panic!("expected rejection, got {other:?}"),
    }

    draft.remote_work_preference = -5;
    match engine().validate_skills(&draft) {
        Err(errors) => assert!(errors.for_field("remoteWorkPreference").is_some()),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn notes_over_the_limit_are_rejected() {
    let mut draft = skills_draft();
    draft.extra_notes = Some("x".repeat(501));

    match engine().validate_skills(&draft) {
        Err(errors) => {
            let entry = errors.for_field("extraNotes").expect("notes issue");
            assert!(entry.message.contains("500"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn notes_at_the_limit_pass() {
    let mut draft = skills_draft();
    draft.extra_notes = Some("x".repeat(500));

    assert!(engine().validate_skills(&draft).is_ok());
}

#[test]
fn optional_flags_pass_through_untouched() {
    let mut draft = skills_draft();
    draft.manager_approved = Some(true);
    draft.extra_notes = Some("Prefers pairing in the mornings.".to_string());

    let entity = engine()
        .validate_skills(&draft)
        .expect("draft should validate");
    assert_eq!(entity.manager_approved, Some(true));
    assert_eq!(
        entity.extra_notes.as_deref(),
        Some("Prefers pairing in the mornings.")
    );
}
