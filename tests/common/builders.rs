//! Request fixtures for the registration test suite.
//!
//! The fixtures mirror the data the engine is exercised with throughout the
//! suite: a student in good standing requesting a legal load, and a student
//! already near the credit cap.

use course_registrar::{
    CreditLimitRule, PrerequisiteRule, RegistrationRequest, ValidationRule,
};
use std::collections::HashMap;

/// A request that satisfies every standard rule: 18 + 6 credit hours against
/// a cap of 24, CS201's prerequisite completed, no slot collisions.
pub fn typical_request() -> RegistrationRequest {
    RegistrationRequest::builder("S002")
        .name("Budi")
        .current_credit_hours(18)
        .requested_credit_hours(6)
        .completed_course("CS101")
        .requested_courses(["CS201", "MA101"])
        .occupied_slot("Wed-10")
        .build()
        .expect("fixture request must build")
}

/// A request that busts the default credit cap: 20 + 6 against 24.
pub fn heavy_load_request() -> RegistrationRequest {
    RegistrationRequest::builder("S001")
        .name("Ani")
        .current_credit_hours(20)
        .requested_credit_hours(6)
        .completed_course("CS101")
        .requested_course("CS201")
        .occupied_slot("Tue-11")
        .build()
        .expect("fixture request must build")
}

/// The standard two-rule configuration: credit cap of 24 plus the CS201 →
/// CS101 prerequisite.
pub fn standard_rule_set() -> Vec<Box<dyn ValidationRule>> {
    let prerequisites = HashMap::from([("CS201".to_string(), vec!["CS101".to_string()])]);
    vec![
        Box::new(CreditLimitRule::new(24).expect("valid cap")),
        Box::new(PrerequisiteRule::new(prerequisites).expect("valid map")),
    ]
}
