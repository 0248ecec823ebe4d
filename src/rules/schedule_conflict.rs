//! Schedule-conflict rule.

use super::ValidationRule;
use crate::error::{ConfigError, ConfigResult};
use crate::outcome::{RuleOutcome, RuleViolation};
use crate::request::RegistrationRequest;
use std::collections::{HashMap, HashSet};

/// Rejects requests for courses whose time slot is already occupied.
///
/// The occupied set is seeded from the externally configured schedule plus
/// the slots on the request itself, then grows as requested courses claim
/// their slots, so two requested courses sharing a slot conflict with each
/// other as well — the second one in request order is the one reported.
/// Courses with no entry in the slot map are treated as conflict-free and
/// claim nothing.
///
/// Both the external schedule and the course → slot map are injected, so the
/// same rule serves different scheduling datasets; the built-in slot table is
/// only a default.
#[derive(Debug, Clone)]
pub struct ScheduleConflictRule {
    existing_schedule: Vec<String>,
    course_slot_map: HashMap<String, String>,
}

/// The default course → slot table.
///
/// Built fresh per call so no two rule instances ever share it.
fn default_course_slot_map() -> HashMap<String, String> {
    HashMap::from([
        ("CS101".to_string(), "Mon-09".to_string()),
        ("CS102".to_string(), "Tue-11".to_string()),
        ("CS201".to_string(), "Mon-09".to_string()),
        ("MA101".to_string(), "Wed-10".to_string()),
    ])
}

impl ScheduleConflictRule {
    /// Create a rule with an externally registered schedule and the default
    /// slot table.
    pub fn new(existing_schedule: Vec<String>) -> ConfigResult<Self> {
        Self::with_slot_map(existing_schedule, default_course_slot_map())
    }

    /// Create a rule with both the schedule and the slot table injected.
    ///
    /// Empty course codes and empty slot identifiers are malformed
    /// configuration and rejected.
    pub fn with_slot_map(
        existing_schedule: Vec<String>,
        course_slot_map: HashMap<String, String>,
    ) -> ConfigResult<Self> {
        if existing_schedule.iter().any(String::is_empty) {
            return Err(ConfigError::empty_slot_id("existing schedule"));
        }
        for (course, slot) in &course_slot_map {
            if course.is_empty() {
                return Err(ConfigError::empty_course_code("course slot map"));
            }
            if slot.is_empty() {
                return Err(ConfigError::empty_slot_id(format!("slot for {course}")));
            }
        }
        Ok(Self {
            existing_schedule,
            course_slot_map,
        })
    }

    /// The slot a course occupies, if it is mapped.
    pub fn slot_for(&self, course: &str) -> Option<&str> {
        self.course_slot_map.get(course).map(String::as_str)
    }
}

impl Default for ScheduleConflictRule {
    fn default() -> Self {
        Self {
            existing_schedule: Vec::new(),
            course_slot_map: default_course_slot_map(),
        }
    }
}

impl ValidationRule for ScheduleConflictRule {
    fn name(&self) -> &str {
        "ScheduleConflictRule"
    }

    fn validate(&self, request: &RegistrationRequest) -> RuleOutcome {
        let mut occupied: HashSet<&str> = self
            .existing_schedule
            .iter()
            .map(String::as_str)
            .chain(request.schedule().iter().map(String::as_str))
            .collect();

        for course in request.requested_courses() {
            let Some(slot) = self.course_slot_map.get(course) else {
                // Unmapped courses are conflict-free and claim no slot.
                continue;
            };
            if occupied.contains(slot.as_str()) {
                return RuleOutcome::Fail(RuleViolation::ScheduleConflict {
                    course: course.clone(),
                    slot: slot.clone(),
                });
            }
            occupied.insert(slot);
        }
        RuleOutcome::Pass
    }
}
