//! Prerequisite-satisfaction rule.

use super::ValidationRule;
use crate::error::{ConfigError, ConfigResult};
use crate::outcome::{RuleOutcome, RuleViolation};
use crate::request::RegistrationRequest;
use std::collections::HashMap;

/// Rejects requests for courses whose prerequisites the student has not
/// completed.
///
/// The map associates a course code with its ordered prerequisite list;
/// courses with no entry have no prerequisites. Evaluation walks the
/// requested courses in request order and each prerequisite list in its
/// given order, so the first missing prerequisite found anywhere is the one
/// reported.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteRule {
    prerequisite_map: HashMap<String, Vec<String>>,
}

impl PrerequisiteRule {
    /// Create a rule from a course → prerequisites map.
    ///
    /// Empty course codes on either side of the map are malformed
    /// configuration and rejected.
    pub fn new(prerequisite_map: HashMap<String, Vec<String>>) -> ConfigResult<Self> {
        for (course, prerequisites) in &prerequisite_map {
            if course.is_empty() {
                return Err(ConfigError::empty_course_code("prerequisite map key"));
            }
            if prerequisites.iter().any(|p| p.is_empty()) {
                return Err(ConfigError::empty_course_code(format!(
                    "prerequisite list for {course}"
                )));
            }
        }
        Ok(Self { prerequisite_map })
    }

    /// The prerequisites configured for a course, if any.
    pub fn prerequisites_for(&self, course: &str) -> Option<&[String]> {
        self.prerequisite_map.get(course).map(Vec::as_slice)
    }
}

impl ValidationRule for PrerequisiteRule {
    fn name(&self) -> &str {
        "PrerequisiteRule"
    }

    fn validate(&self, request: &RegistrationRequest) -> RuleOutcome {
        for course in request.requested_courses() {
            let Some(required) = self.prerequisite_map.get(course) else {
                continue;
            };
            for prerequisite in required {
                if !request.has_completed(prerequisite) {
                    return RuleOutcome::Fail(RuleViolation::MissingPrerequisite {
                        prerequisite: prerequisite.clone(),
                        course: course.clone(),
                    });
                }
            }
        }
        RuleOutcome::Pass
    }
}
