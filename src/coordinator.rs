//! The registration coordinator.
//!
//! Runs an injected, ordered list of rules against a request and stops at the
//! first failure. The coordinator never hard-codes which rules exist; its
//! only knowledge of them is the [`ValidationRule`] trait.

use crate::outcome::{RegistrationOutcome, RuleOutcome};
use crate::request::RegistrationRequest;
use crate::rules::ValidationRule;
use log::{debug, info};

/// Diagnostic sink notified after each rule evaluation.
///
/// Observers see every rule's result in evaluation order, including the
/// failing one. They are reporting-only: nothing an observer does can alter
/// the outcome, and correctness does not depend on one being installed.
pub trait RuleObserver: Send + Sync {
    /// Called once per evaluated rule, in evaluation order.
    fn rule_evaluated(&self, rule_name: &str, outcome: &RuleOutcome);
}

/// Default observer: per-rule status lines through the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl RuleObserver for LogObserver {
    fn rule_evaluated(&self, rule_name: &str, outcome: &RuleOutcome) {
        match outcome.violation() {
            None => debug!("[{rule_name}] -> OK"),
            Some(violation) => debug!("[{rule_name}] -> FAIL - {violation}"),
        }
    }
}

/// Runs registration requests through an ordered list of rules, fail-fast.
///
/// # Examples
///
/// ```rust
/// use course_registrar::{
///     CreditLimitRule, PrerequisiteRule, RegistrationCoordinator, RegistrationRequest,
///     ValidationRule,
/// };
/// use std::collections::HashMap;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let prerequisites = HashMap::from([("CS201".to_string(), vec!["CS101".to_string()])]);
///     let rules: Vec<Box<dyn ValidationRule>> = vec![
///         Box::new(CreditLimitRule::new(24)?),
///         Box::new(PrerequisiteRule::new(prerequisites)?),
///     ];
///     let coordinator = RegistrationCoordinator::new(rules);
///
///     let request = RegistrationRequest::builder("S002")
///         .current_credit_hours(18)
///         .requested_credit_hours(6)
///         .completed_course("CS101")
///         .requested_courses(["CS201", "MA101"])
///         .build()?;
///
///     let outcome = coordinator.register(&request);
///     assert!(outcome.is_accepted());
///     Ok(())
/// }
/// ```
pub struct RegistrationCoordinator {
    rules: Vec<Box<dyn ValidationRule>>,
    observer: Box<dyn RuleObserver>,
}

impl RegistrationCoordinator {
    /// Create a coordinator over the given rules, reporting through
    /// [`LogObserver`].
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self::with_observer(rules, Box::new(LogObserver))
    }

    /// Create a coordinator with a replacement diagnostic sink.
    pub fn with_observer(rules: Vec<Box<dyn ValidationRule>>, observer: Box<dyn RuleObserver>) -> Self {
        Self { rules, observer }
    }

    /// Number of rules this coordinator evaluates.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Validate one request against every rule, in order.
    ///
    /// The first failing rule's violation is returned verbatim and the
    /// remaining rules are not evaluated. Each call is a stateless pass;
    /// nothing is persisted between calls.
    pub fn register(&self, request: &RegistrationRequest) -> RegistrationOutcome {
        info!(
            "Validating registration for student {} against {} rules",
            request.student_id(),
            self.rules.len()
        );

        for rule in &self.rules {
            let outcome = rule.validate(request);
            self.observer.rule_evaluated(rule.name(), &outcome);
            if let RuleOutcome::Fail(violation) = outcome {
                debug!(
                    "Registration rejected for student {}: {violation}",
                    request.student_id()
                );
                return RegistrationOutcome::Rejected(violation);
            }
        }

        debug!(
            "Registration accepted for student {}",
            request.student_id()
        );
        RegistrationOutcome::Accepted
    }
}
