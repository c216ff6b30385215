use std::fmt;

use crate::config::{DEFAULT_CREDIT_HOURS, DEFAULT_MAX_STUDENTS};

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    code: String,
    credit_hours: u32,
    max_students: u32,
    enrolled_students: u32,
}

impl Course {
    /// A course with the default 3 credit hours and 25 seats.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Course {
        Course::with_limits(name, code, DEFAULT_CREDIT_HOURS, DEFAULT_MAX_STUDENTS)
    }

    pub fn with_limits(
        name: impl Into<String>,
        code: impl Into<String>,
        credit_hours: u32,
        max_students: u32,
    ) -> Course {
        Course {
            name: name.into(),
            code: code.into(),
            credit_hours,
            max_students,
            enrolled_students: 0,
        }
    }

    /// Takes one seat. Returns false and leaves the count alone when full.
    pub fn enroll_student(&mut self) -> bool {
        if self.enrolled_students < self.max_students {
            self.enrolled_students += 1;
            true
        } else {
            false
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn credit_hours(&self) -> u32 {
        self.credit_hours
    }

    pub fn max_students(&self) -> u32 {
        self.max_students
    }

    pub fn enrolled_students(&self) -> u32 {
        self.enrolled_students
    }

    pub fn seats_left(&self) -> u32 {
        self.max_students - self.enrolled_students
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_students >= self.max_students
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), Credit Hours: {}, Enrolled: {}/{}",
            self.name, self.code, self.credit_hours, self.enrolled_students, self.max_students
        )
    }
}
