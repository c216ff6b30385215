pub mod config;
pub mod course;
pub mod error;
pub mod scheduler;
pub mod serialize;
pub mod student;
pub mod table;

pub use config::Config;
pub use course::Course;
pub use error::{EnrollError, Error, Result};
pub use scheduler::{Day, Registration, Schedule};
pub use student::{Enrolled, Student, StudentIds};
