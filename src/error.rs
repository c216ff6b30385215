use polars::prelude::PolarsError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("table error: {0}")]
    Table(#[from] PolarsError),
}

/// Why a student could not be enrolled in a course.
///
/// The `Display` strings are the messages shown to the student.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollError {
    #[error("Error: You have reached the maximum number of classes.")]
    MaxClasses,

    #[error("Error: You are already enrolled in {0}.")]
    AlreadyEnrolled(String),

    #[error("Error: {0} is full.")]
    CourseFull(String),
}
