//! Rule Extension Example
//!
//! Demonstrates the extension seam: the schedule-conflict rule is appended
//! to an existing rule list without touching the coordinator or the other
//! rules, and flips a previously accepted request to rejected.

use course_registrar::{
    CreditLimitRule, PrerequisiteRule, RegistrationCoordinator, RegistrationRequest,
    ScheduleConflictRule, ValidationRule,
};
use std::collections::HashMap;

fn budi() -> Result<RegistrationRequest, Box<dyn std::error::Error>> {
    Ok(RegistrationRequest::builder("S002")
        .name("Budi")
        .current_credit_hours(18)
        .requested_credit_hours(6)
        .completed_course("CS101")
        .requested_courses(["CS201", "MA101"])
        .occupied_slot("Wed-10")
        .build()?)
}

fn base_rules() -> Result<Vec<Box<dyn ValidationRule>>, Box<dyn std::error::Error>> {
    let prerequisites = HashMap::from([("CS201".to_string(), vec!["CS101".to_string()])]);
    Ok(vec![
        Box::new(CreditLimitRule::new(24)?),
        Box::new(PrerequisiteRule::new(prerequisites)?),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("🚀 Starting course-registrar rule extension example");

    println!("\n📝 Credit and prerequisite rules only...");
    let coordinator = RegistrationCoordinator::new(base_rules()?);
    let outcome = coordinator.register(&budi()?);
    println!("   accepted={} ({})", outcome.is_accepted(), outcome.message());

    println!("\n📝 Same request, schedule rule appended (Mon-09 already taken)...");
    let mut rules = base_rules()?;
    rules.push(Box::new(ScheduleConflictRule::new(vec![
        "Mon-09".to_string(),
    ])?));
    let coordinator = RegistrationCoordinator::new(rules);
    let outcome = coordinator.register(&budi()?);
    println!("   accepted={} ({})", outcome.is_accepted(), outcome.message());

    println!("\n✅ The coordinator and existing rules were not modified to add the new rule");
    Ok(())
}
