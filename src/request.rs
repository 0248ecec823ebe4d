//! The registration request value object.
//!
//! A [`RegistrationRequest`] captures a student's current state and the
//! requested change for one registration attempt. It is immutable once
//! built: rules receive a shared reference and cannot alter it, and the
//! request is discarded after the coordinator call that consumes it.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A student's course-registration request.
///
/// Carries the identifying fields, the current and requested credit load,
/// the set of completed courses, the requested courses in request order, and
/// the slots the student's existing timetable already occupies. Construction
/// goes through [`RegistrationRequest::builder`] or
/// [`RegistrationRequest::from_json`], both of which enforce the
/// non-empty-student-id contract.
///
/// # Examples
///
/// ```rust
/// use course_registrar::RegistrationRequest;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let request = RegistrationRequest::builder("S002")
///         .name("Budi")
///         .current_credit_hours(18)
///         .requested_credit_hours(6)
///         .completed_course("CS101")
///         .requested_courses(["CS201", "MA101"])
///         .occupied_slot("Wed-10")
///         .build()?;
///
///     assert_eq!(request.student_id(), "S002");
///     assert!(request.has_completed("CS101"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    student_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    current_credit_hours: u32,
    #[serde(default)]
    requested_credit_hours: u32,
    #[serde(default)]
    completed_courses: HashSet<String>,
    #[serde(default)]
    requested_courses: Vec<String>,
    #[serde(default)]
    schedule: Vec<String>,
}

impl RegistrationRequest {
    /// Start building a request for the given student.
    pub fn builder(student_id: impl Into<String>) -> RegistrationRequestBuilder {
        RegistrationRequestBuilder::new(student_id)
    }

    /// Build a request from a JSON payload.
    ///
    /// This is the boundary constructor for requests arriving as JSON; it
    /// applies the same contract checks as the builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use course_registrar::RegistrationRequest;
    /// use serde_json::json;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let request = RegistrationRequest::from_json(json!({
    ///         "student_id": "S001",
    ///         "name": "Ani",
    ///         "current_credit_hours": 20,
    ///         "requested_credit_hours": 6,
    ///         "completed_courses": ["CS101"],
    ///         "requested_courses": ["CS201"],
    ///         "schedule": ["Tue-11"]
    ///     }))?;
    ///
    ///     assert_eq!(request.requested_credit_hours(), 6);
    ///     Ok(())
    /// }
    /// ```
    pub fn from_json(value: serde_json::Value) -> ConfigResult<Self> {
        let request: Self = serde_json::from_value(value)?;
        if request.student_id.is_empty() {
            return Err(ConfigError::EmptyStudentId);
        }
        Ok(request)
    }

    /// Serialize the request back into a JSON value.
    pub fn to_json(&self) -> ConfigResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The opaque student identifier.
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// The student's display name. Not consulted by any rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit hours the student is already carrying this term.
    pub fn current_credit_hours(&self) -> u32 {
        self.current_credit_hours
    }

    /// Credit hours this request would add.
    pub fn requested_credit_hours(&self) -> u32 {
        self.requested_credit_hours
    }

    /// Courses the student has completed.
    pub fn completed_courses(&self) -> &HashSet<String> {
        &self.completed_courses
    }

    /// Whether the student has completed the given course.
    pub fn has_completed(&self, course: &str) -> bool {
        self.completed_courses.contains(course)
    }

    /// The requested courses, in request order.
    pub fn requested_courses(&self) -> &[String] {
        &self.requested_courses
    }

    /// Slots already occupied by the student's existing timetable.
    pub fn schedule(&self) -> &[String] {
        &self.schedule
    }
}

/// Fluent builder for [`RegistrationRequest`].
///
/// Collection methods come in singular (`completed_course`) and bulk
/// (`completed_courses`) forms; bulk forms extend rather than replace, so the
/// two can be mixed freely.
#[derive(Debug, Clone)]
pub struct RegistrationRequestBuilder {
    student_id: String,
    name: String,
    current_credit_hours: u32,
    requested_credit_hours: u32,
    completed_courses: HashSet<String>,
    requested_courses: Vec<String>,
    schedule: Vec<String>,
}

impl RegistrationRequestBuilder {
    fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: String::new(),
            current_credit_hours: 0,
            requested_credit_hours: 0,
            completed_courses: HashSet::new(),
            requested_courses: Vec::new(),
            schedule: Vec::new(),
        }
    }

    /// Set the student's display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the credit hours already carried this term.
    pub fn current_credit_hours(mut self, hours: u32) -> Self {
        self.current_credit_hours = hours;
        self
    }

    /// Set the credit hours this request would add.
    pub fn requested_credit_hours(mut self, hours: u32) -> Self {
        self.requested_credit_hours = hours;
        self
    }

    /// Record a completed course.
    pub fn completed_course(mut self, course: impl Into<String>) -> Self {
        self.completed_courses.insert(course.into());
        self
    }

    /// Record several completed courses.
    pub fn completed_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_courses
            .extend(courses.into_iter().map(Into::into));
        self
    }

    /// Append a requested course. Order is preserved and significant.
    pub fn requested_course(mut self, course: impl Into<String>) -> Self {
        self.requested_courses.push(course.into());
        self
    }

    /// Append several requested courses in the given order.
    pub fn requested_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requested_courses
            .extend(courses.into_iter().map(Into::into));
        self
    }

    /// Record a slot the student's existing timetable occupies.
    pub fn occupied_slot(mut self, slot: impl Into<String>) -> Self {
        self.schedule.push(slot.into());
        self
    }

    /// Record several occupied slots.
    pub fn occupied_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schedule.extend(slots.into_iter().map(Into::into));
        self
    }

    /// Finish building, enforcing construction-time contracts.
    pub fn build(self) -> ConfigResult<RegistrationRequest> {
        if self.student_id.is_empty() {
            return Err(ConfigError::EmptyStudentId);
        }
        Ok(RegistrationRequest {
            student_id: self.student_id,
            name: self.name,
            current_credit_hours: self.current_credit_hours,
            requested_credit_hours: self.requested_credit_hours,
            completed_courses: self.completed_courses,
            requested_courses: self.requested_courses,
            schedule: self.schedule,
        })
    }
}
