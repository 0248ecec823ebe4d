//! Rule-based validation engine for student course registration.
//!
//! Validates a [`RegistrationRequest`] against an ordered list of independent
//! business rules and reports the first failing rule with a human-readable
//! reason, or success. Rules are injected behind the [`ValidationRule`]
//! trait, so new rules slot in without touching the coordinator or the
//! existing rules.
//!
//! # Core Components
//!
//! - [`RegistrationRequest`] - Immutable value object for one registration attempt
//! - [`ValidationRule`] - Trait implemented by every business rule
//! - [`RegistrationCoordinator`] - Runs the rule list in order, fail-fast
//!
//! # Quick Start
//!
//! ```rust
//! use course_registrar::{
//!     CreditLimitRule, RegistrationCoordinator, RegistrationRequest, ValidationRule,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules: Vec<Box<dyn ValidationRule>> = vec![Box::new(CreditLimitRule::new(24)?)];
//! let coordinator = RegistrationCoordinator::new(rules);
//!
//! let request = RegistrationRequest::builder("S001")
//!     .current_credit_hours(20)
//!     .requested_credit_hours(6)
//!     .build()?;
//!
//! let outcome = coordinator.register(&request);
//! assert!(!outcome.is_accepted());
//! println!("{}", outcome.message());
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod error;
pub mod outcome;
pub mod request;
pub mod rules;

// Re-export commonly used types for convenience
pub use coordinator::{LogObserver, RegistrationCoordinator, RuleObserver};
pub use error::{ConfigError, ConfigResult};
pub use outcome::{RegistrationOutcome, RuleOutcome, RuleViolation};
pub use request::{RegistrationRequest, RegistrationRequestBuilder};
pub use rules::{
    CreditLimitRule, DEFAULT_CREDIT_CAP, PrerequisiteRule, ScheduleConflictRule, ValidationRule,
};
