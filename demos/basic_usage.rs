//! Basic Registration Validation Example
//!
//! Builds the standard rule set, then runs one request that passes every
//! rule and one that busts the credit cap. Run with `RUST_LOG=debug` to see
//! the per-rule status lines from the coordinator's logging observer.

use course_registrar::{
    CreditLimitRule, PrerequisiteRule, RegistrationCoordinator, RegistrationRequest,
    ValidationRule,
};
use serde_json::json;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("🚀 Starting course-registrar basic usage example");

    let prerequisites = HashMap::from([("CS201".to_string(), vec!["CS101".to_string()])]);
    let rules: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(CreditLimitRule::new(24)?),
        Box::new(PrerequisiteRule::new(prerequisites)?),
    ];
    let coordinator = RegistrationCoordinator::new(rules);

    println!("✅ Coordinator initialized with {} rules", coordinator.rule_count());

    println!("\n📝 Validating a request within the credit cap...");
    let request = RegistrationRequest::builder("S002")
        .name("Budi")
        .current_credit_hours(18)
        .requested_credit_hours(6)
        .completed_course("CS101")
        .requested_courses(["CS201", "MA101"])
        .occupied_slot("Wed-10")
        .build()?;

    let outcome = coordinator.register(&request);
    println!(
        "   {} -> accepted={} ({})",
        request.student_id(),
        outcome.is_accepted(),
        outcome.message()
    );

    println!("\n📝 Validating an over-the-cap request arriving as JSON...");
    let request = RegistrationRequest::from_json(json!({
        "student_id": "S001",
        "name": "Ani",
        "current_credit_hours": 20,
        "requested_credit_hours": 6,
        "completed_courses": ["CS101"],
        "requested_courses": ["CS201"],
        "schedule": ["Tue-11"]
    }))?;

    let outcome = coordinator.register(&request);
    println!(
        "   {} -> accepted={} ({})",
        request.student_id(),
        outcome.is_accepted(),
        outcome.message()
    );

    Ok(())
}
