use super::common::*;
use crate::domain::EmergencyContactDraft;

#[test]
fn accepts_a_valid_emergency_contact() {
    let entity = engine()
        .validate_emergency(&emergency_draft())
        .expect("draft should validate");

    assert_eq!(entity.contact_name, "Maria Alvarez");
    assert_eq!(entity.relationship, "Parent");
}

#[test]
fn blank_emergency_fields_are_reported_together() {
    let draft = EmergencyContactDraft {
        contact_name: String::new(),
        relationship: String::new(),
        phone_number: String::new(),
        guardian_name: None,
        guardian_phone: None,
    };

    match engine().validate_emergency(&draft) {
        Err(errors) => {
            assert_eq!(errors.issues.len(), 3);
            for field in ["contactName", "relationship", "phoneNumber"] {
                assert!(errors.for_field(field).is_some(), "missing issue for {field}");
            }
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn unknown_relationship_is_rejected() {
    let mut draft = emergency_draft();
    draft.relationship = "Cousin".to_string();

    match engine().validate_emergency(&draft) {
        Err(errors) => assert!(errors.for_field("relationship").is_some()),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn guardian_fields_are_unconstrained() {
    let mut draft = emergency_draft();
    draft.guardian_name = Some("   ".to_string());
    draft.guardian_phone = Some("call the front desk".to_string());

    let entity = engine()
        .validate_emergency(&draft)
        .expect("draft should validate");
    assert_eq!(entity.guardian_phone.as_deref(), Some("call the front desk"));
}

#[test]
fn unchecked_confirmation_is_rejected() {
    let mut draft = review_draft();
    draft.confirmation_checked = false;

    match engine().validate_review(&draft) {
        Err(errors) => {
            let entry = errors
                .for_field("confirmationChecked")
                .expect("confirmation issue");
            assert!(entry.message.contains("confirm"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn checked_confirmation_passes() {
    assert!(engine().validate_review(&review_draft()).is_ok());
}

#[test]
fn combined_gate_accepts_a_complete_form() {
    let data = engine()
        .validate_complete(&complete_draft(), today())
        .expect("complete draft should validate");

    assert!(data.is_complete());
    assert!(data.missing_steps().is_empty());
}

#[test]
fn combined_gate_prefixes_paths_with_the_slot_key() {
    let mut draft = complete_draft();
    draft.job.job_type = "Contract".to_string();
    draft.job.salary_expectation = 200.0;

    match engine().validate_complete(&draft, today()) {
        Err(errors) => {
            assert!(errors.for_field("job.salaryExpectation").is_some());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn combined_gate_collects_failures_across_slots() {
    let mut draft = complete_draft();
    draft.personal.email = "not-an-email".to_string();
    draft.review.confirmation_checked = false;

    match engine().validate_complete(&draft, today()) {
        Err(errors) => {
            assert!(errors.for_field("personal.email").is_some());
            assert!(errors.for_field("review.confirmationChecked").is_some());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}
