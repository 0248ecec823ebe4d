//! Outcome types for rule evaluation and registration.
//!
//! A failed business rule is an expected, ordinary result of validating a
//! registration request. These types keep that result out of the `Err`
//! channel: rules return [`RuleOutcome`], the coordinator returns
//! [`RegistrationOutcome`], and the violation taxonomy lives in
//! [`RuleViolation`] with structured fields and derived display text.

use serde::Serialize;

/// A violated business rule, carrying the data that identifies the violation.
///
/// The display text is the human-readable reason handed back to the caller.
/// Exactly one violation is ever surfaced per registration attempt: the
/// coordinator stops at the first failing rule and never aggregates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum RuleViolation {
    /// Combined current and requested credit hours exceed the configured cap
    #[error(
        "Requested load of {requested} credit hours on top of {current} exceeds the credit limit (max {max_credit_hours})"
    )]
    CreditLimitExceeded {
        current: u32,
        requested: u32,
        max_credit_hours: u32,
    },

    /// A requested course's prerequisite is missing from the completed set
    #[error("Prerequisite {prerequisite} is not satisfied for {course}")]
    MissingPrerequisite { prerequisite: String, course: String },

    /// A requested course's slot collides with an already-occupied slot
    #[error("Schedule conflict for {course} in slot {slot}")]
    ScheduleConflict { course: String, slot: String },
}

/// Result of evaluating a single rule against a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RuleOutcome {
    /// The rule is satisfied
    Pass,
    /// The rule is violated
    Fail(RuleViolation),
}

impl RuleOutcome {
    /// Whether the rule passed
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The violation, if the rule failed
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            Self::Pass => None,
            Self::Fail(violation) => Some(violation),
        }
    }
}

/// Aggregate result of a registration attempt.
///
/// `Rejected` carries the first violation encountered, verbatim from the rule
/// that produced it. There is no partial-success or multi-error form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RegistrationOutcome {
    /// Every rule passed
    Accepted,
    /// A rule failed; remaining rules were not evaluated
    Rejected(RuleViolation),
}

impl RegistrationOutcome {
    /// Whether the registration was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The violation behind a rejection, if any
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            Self::Accepted => None,
            Self::Rejected(violation) => Some(violation),
        }
    }

    /// Human-readable description of the outcome
    pub fn message(&self) -> String {
        match self {
            Self::Accepted => "Registration succeeded.".to_string(),
            Self::Rejected(violation) => violation.to_string(),
        }
    }
}
