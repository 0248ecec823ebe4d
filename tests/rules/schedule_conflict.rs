//! Schedule-conflict rule tests.

use course_registrar::{
    RegistrationRequest, RuleViolation, ScheduleConflictRule, ValidationRule,
};
use std::collections::HashMap;

#[test]
fn test_conflict_with_existing_schedule() {
    // CS201 maps to Mon-09 in the default table.
    let rule = ScheduleConflictRule::new(vec!["Mon-09".to_string()]).unwrap();
    let request = RegistrationRequest::builder("S100")
        .requested_course("CS201")
        .build()
        .unwrap();

    assert_eq!(
        rule.validate(&request).violation(),
        Some(&RuleViolation::ScheduleConflict {
            course: "CS201".to_string(),
            slot: "Mon-09".to_string(),
        })
    );
}

#[test]
fn test_conflict_with_requests_own_schedule() {
    let rule = ScheduleConflictRule::default();
    let request = RegistrationRequest::builder("S100")
        .requested_course("MA101")
        .occupied_slot("Wed-10")
        .build()
        .unwrap();

    assert_eq!(
        rule.validate(&request).violation(),
        Some(&RuleViolation::ScheduleConflict {
            course: "MA101".to_string(),
            slot: "Wed-10".to_string(),
        })
    );
}

#[test]
fn test_two_requested_courses_in_the_same_slot_conflict_on_the_second() {
    // CS101 and CS201 both sit in Mon-09; CS101 claims it first.
    let rule = ScheduleConflictRule::default();
    let request = RegistrationRequest::builder("S100")
        .requested_courses(["CS101", "CS201"])
        .build()
        .unwrap();

    assert_eq!(
        rule.validate(&request).violation(),
        Some(&RuleViolation::ScheduleConflict {
            course: "CS201".to_string(),
            slot: "Mon-09".to_string(),
        })
    );
}

#[test]
fn test_unmapped_courses_never_conflict() {
    let slots = HashMap::from([("CS101".to_string(), "Mon-09".to_string())]);
    let rule =
        ScheduleConflictRule::with_slot_map(vec!["Mon-09".to_string()], slots).unwrap();
    let request = RegistrationRequest::builder("S100")
        .requested_courses(["PHYS50", "PHYS50"])
        .occupied_slots(["Mon-09", "Tue-11"])
        .build()
        .unwrap();

    assert!(rule.validate(&request).is_pass());
}

#[test]
fn test_unmapped_course_claims_no_slot() {
    // PHYS50 is unmapped; it must not occupy anything that would block MA101.
    let rule = ScheduleConflictRule::default();
    let request = RegistrationRequest::builder("S100")
        .requested_courses(["PHYS50", "MA101"])
        .build()
        .unwrap();

    assert!(rule.validate(&request).is_pass());
}

#[test]
fn test_injected_slot_table_overrides_the_default() {
    // Move CS201 away from Mon-09; the default-table conflict disappears.
    let slots = HashMap::from([("CS201".to_string(), "Fri-13".to_string())]);
    let rule =
        ScheduleConflictRule::with_slot_map(vec!["Mon-09".to_string()], slots).unwrap();
    let request = RegistrationRequest::builder("S100")
        .requested_course("CS201")
        .build()
        .unwrap();

    assert!(rule.validate(&request).is_pass());
}

#[test]
fn test_distinct_slots_pass() {
    let rule = ScheduleConflictRule::default();
    let request = RegistrationRequest::builder("S100")
        .requested_courses(["CS201", "CS102", "MA101"])
        .build()
        .unwrap();

    assert!(rule.validate(&request).is_pass());
}
