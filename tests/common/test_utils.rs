//! Spy rules and recording observers for coordinator tests.

use course_registrar::{
    RegistrationRequest, RuleObserver, RuleOutcome, RuleViolation, ValidationRule,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A rule with a fixed outcome that counts how often it is invoked.
///
/// Clone the counter handle out with [`SpyRule::call_counter`] before boxing
/// the spy into a coordinator.
pub struct SpyRule {
    name: String,
    outcome: RuleOutcome,
    calls: Arc<AtomicUsize>,
}

impl SpyRule {
    /// A spy that always passes.
    pub fn passing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: RuleOutcome::Pass,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A spy that always fails with the given violation.
    pub fn failing(name: impl Into<String>, violation: RuleViolation) -> Self {
        Self {
            name: name.into(),
            outcome: RuleOutcome::Fail(violation),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the number of `validate` invocations.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl ValidationRule for SpyRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, _request: &RegistrationRequest) -> RuleOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// An observer that records every reported (rule name, passed) pair in order.
#[derive(Default)]
pub struct RecordingObserver {
    seen: Arc<Mutex<Vec<(String, bool)>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded sequence.
    pub fn records(&self) -> Arc<Mutex<Vec<(String, bool)>>> {
        Arc::clone(&self.seen)
    }
}

impl RuleObserver for RecordingObserver {
    fn rule_evaluated(&self, rule_name: &str, outcome: &RuleOutcome) {
        self.seen
            .lock()
            .expect("observer mutex poisoned")
            .push((rule_name.to_string(), outcome.is_pass()));
    }
}
