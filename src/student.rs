use std::collections::BTreeMap;
use std::fmt;

use crate::config::{Config, DEFAULT_ID_PREFIX, DEFAULT_MAX_CLASSES};
use crate::course::Course;
use crate::error::EnrollError;

/// Hands out student ids: a prefix plus a 4-digit sequence number starting at 1.
///
/// Numbers are never reused. Every student built from the same generator
/// gets a distinct, strictly increasing id.
#[derive(Debug, Clone)]
pub struct StudentIds {
    prefix: String,
    next: u32,
}

impl StudentIds {
    pub fn new() -> StudentIds {
        StudentIds::with_prefix(DEFAULT_ID_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> StudentIds {
        StudentIds {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{:04}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl Default for StudentIds {
    fn default() -> Self {
        StudentIds::new()
    }
}

/// A successful enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrolled {
    pub code: String,
    pub name: String,
}

impl fmt::Display for Enrolled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully enrolled in {}!", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    id: String,
    name: String,
    // course codes in enrollment order
    classes: Vec<String>,
    max_classes: usize,
    // term -> grade, reserved
    #[allow(dead_code)]
    grades: BTreeMap<u8, Option<String>>,
}

impl Student {
    pub fn new(name: impl Into<String>, ids: &mut StudentIds) -> Student {
        Student::with_max_classes(name, ids, DEFAULT_MAX_CLASSES)
    }

    pub fn from_config(name: impl Into<String>, ids: &mut StudentIds, config: &Config) -> Student {
        Student::with_max_classes(name, ids, config.max_classes)
    }

    pub fn with_max_classes(
        name: impl Into<String>,
        ids: &mut StudentIds,
        max_classes: usize,
    ) -> Student {
        Student {
            id: ids.next_id(),
            name: name.into(),
            classes: Vec::new(),
            max_classes,
            grades: BTreeMap::from([(1, None), (2, None)]),
        }
    }

    /// Checks the cap first, then duplicates, then asks the course for a seat.
    /// Nothing is mutated unless the enrollment succeeds.
    pub fn enroll_in_class(&mut self, course: &mut Course) -> Result<Enrolled, EnrollError> {
        if self.classes.len() >= self.max_classes {
            return Err(EnrollError::MaxClasses);
        }
        if self.is_enrolled_in(course.code()) {
            return Err(EnrollError::AlreadyEnrolled(course.code().to_string()));
        }
        if !course.enroll_student() {
            return Err(EnrollError::CourseFull(course.name().to_string()));
        }

        self.classes.push(course.code().to_string());
        tracing::debug!(student = %self.id, course = course.code(), "enrolled");
        Ok(Enrolled {
            code: course.code().to_string(),
            name: course.name().to_string(),
        })
    }

    pub fn is_enrolled_in(&self, code: &str) -> bool {
        self.classes.iter().any(|c| c == code)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn max_classes(&self) -> usize {
        self.max_classes
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Enrolled Classes: {}",
            self.id,
            self.name,
            self.classes.join(", ")
        )
    }
}
