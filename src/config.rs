//! Registration defaults, optionally loaded from a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub const DEFAULT_ID_PREFIX: &str = "UOB-";
pub const DEFAULT_MAX_CLASSES: usize = 5;
pub const DEFAULT_CREDIT_HOURS: u32 = 3;
pub const DEFAULT_MAX_STUDENTS: u32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix of every student id, followed by a 4-digit sequence number.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Course load cap of each student.
    #[serde(default = "default_max_classes")]
    pub max_classes: usize,

    #[serde(default = "default_credit_hours")]
    pub credit_hours: u32,

    /// Seats per course.
    #[serde(default = "default_max_students")]
    pub max_students: u32,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_max_classes() -> usize {
    DEFAULT_MAX_CLASSES
}

fn default_credit_hours() -> u32 {
    DEFAULT_CREDIT_HOURS
}

fn default_max_students() -> u32 {
    DEFAULT_MAX_STUDENTS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            id_prefix: default_id_prefix(),
            max_classes: default_max_classes(),
            credit_hours: default_credit_hours(),
            max_students: default_max_students(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Config::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }
}
