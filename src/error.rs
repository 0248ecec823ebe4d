//! Error types for rule and request configuration.
//!
//! Validation failures (credit limit, prerequisites, schedule conflicts) are
//! *expected outcomes* and are modeled in [`crate::outcome`], not here. This
//! module covers the other taxonomy: programming-contract violations in the
//! configuration handed to constructors, which fail fast at construction time.

/// Configuration errors reported by rule and request constructors.
///
/// These indicate malformed configuration supplied by the caller, never a
/// failed registration. Constructors return them immediately so that an
/// invalid rule or request cannot exist in the system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Credit cap of zero would reject every request
    #[error("Credit-hour cap must be greater than zero")]
    ZeroCreditCap,

    /// Empty course code in a prerequisite or slot mapping
    #[error("Course code cannot be empty{}", in_context(.context))]
    EmptyCourseCode { context: Option<String> },

    /// Empty slot identifier in a schedule or slot mapping
    #[error("Slot identifier cannot be empty{}", in_context(.context))]
    EmptySlotId { context: Option<String> },

    /// Request built without a student identifier
    #[error("Student id cannot be empty")]
    EmptyStudentId,

    /// Request payload that does not deserialize into a registration request
    #[error("Invalid request JSON: {0}")]
    InvalidRequestJson(#[from] serde_json::Error),
}

fn in_context(context: &Option<String>) -> String {
    match context {
        Some(c) => format!(" ({c})"),
        None => String::new(),
    }
}

impl ConfigError {
    /// Create an empty-course-code error with a description of where it occurred
    pub fn empty_course_code(context: impl Into<String>) -> Self {
        Self::EmptyCourseCode {
            context: Some(context.into()),
        }
    }

    /// Create an empty-slot-id error with a description of where it occurred
    pub fn empty_slot_id(context: impl Into<String>) -> Self {
        Self::EmptySlotId {
            context: Some(context.into()),
        }
    }
}

// Result type alias for convenience
pub type ConfigResult<T> = Result<T, ConfigError>;
