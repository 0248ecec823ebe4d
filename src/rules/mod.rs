//! The validation-rule capability and its built-in implementations.
//!
//! Rules are the extension seam of the engine. The coordinator holds an
//! ordered list of `Box<dyn ValidationRule>` and knows nothing about which
//! rules exist; adding a rule means implementing the trait and appending an
//! instance to the list, with no changes to the coordinator or to any other
//! rule.

mod credit_limit;
mod prerequisite;
mod schedule_conflict;

pub use credit_limit::{CreditLimitRule, DEFAULT_CREDIT_CAP};
pub use prerequisite::PrerequisiteRule;
pub use schedule_conflict::ScheduleConflictRule;

use crate::outcome::RuleOutcome;
use crate::request::RegistrationRequest;

/// A single business rule evaluated against a registration request.
///
/// Implementations are pure functions of their own configuration and the
/// request: no side effects, no mutation of the request, and expected
/// failures are returned as [`RuleOutcome::Fail`](crate::RuleOutcome::Fail)
/// rather than raised. Configuration is fixed at construction, so a rule is
/// `Send + Sync` and safe to evaluate from multiple threads.
pub trait ValidationRule: Send + Sync {
    /// Name reported to the diagnostic sink.
    fn name(&self) -> &str;

    /// Evaluate the rule against one request.
    fn validate(&self, request: &RegistrationRequest) -> RuleOutcome;
}
