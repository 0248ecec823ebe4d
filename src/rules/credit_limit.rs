//! Credit-hour cap rule.

use super::ValidationRule;
use crate::error::{ConfigError, ConfigResult};
use crate::outcome::{RuleOutcome, RuleViolation};
use crate::request::RegistrationRequest;

/// Default per-term credit-hour cap.
pub const DEFAULT_CREDIT_CAP: u32 = 24;

/// Rejects requests whose combined current and requested credit hours exceed
/// a configured cap.
///
/// A sum exactly equal to the cap passes; only strictly exceeding it fails.
///
/// # Examples
///
/// ```rust
/// use course_registrar::{CreditLimitRule, RegistrationRequest, ValidationRule};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let rule = CreditLimitRule::new(24)?;
///     let request = RegistrationRequest::builder("S001")
///         .current_credit_hours(20)
///         .requested_credit_hours(6)
///         .build()?;
///
///     assert!(!rule.validate(&request).is_pass());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CreditLimitRule {
    max_credit_hours: u32,
}

impl CreditLimitRule {
    /// Create a rule with the given cap.
    ///
    /// A zero cap is malformed configuration and is rejected here rather
    /// than silently failing every request.
    pub fn new(max_credit_hours: u32) -> ConfigResult<Self> {
        if max_credit_hours == 0 {
            return Err(ConfigError::ZeroCreditCap);
        }
        Ok(Self { max_credit_hours })
    }

    /// The configured cap.
    pub fn max_credit_hours(&self) -> u32 {
        self.max_credit_hours
    }
}

impl Default for CreditLimitRule {
    fn default() -> Self {
        Self {
            max_credit_hours: DEFAULT_CREDIT_CAP,
        }
    }
}

impl ValidationRule for CreditLimitRule {
    fn name(&self) -> &str {
        "CreditLimitRule"
    }

    fn validate(&self, request: &RegistrationRequest) -> RuleOutcome {
        let current = request.current_credit_hours();
        let requested = request.requested_credit_hours();
        // Widen before adding so extreme inputs cannot overflow.
        if u64::from(current) + u64::from(requested) > u64::from(self.max_credit_hours) {
            return RuleOutcome::Fail(RuleViolation::CreditLimitExceeded {
                current,
                requested,
                max_credit_hours: self.max_credit_hours,
            });
        }
        RuleOutcome::Pass
    }
}
