//! Tabular view of the schedule, backed by a polars `DataFrame`.

use polars::{lazy::dsl::col, prelude::*};
use std::ops::Deref;

use crate::error::Result;
use crate::scheduler::{Day, Schedule};

pub struct CourseTable {
    df: DataFrame,
}

impl CourseTable {
    /// One row per slot: DAY, TIME, COURSE CODE, COURSE TITLE, CREDIT HOURS,
    /// ENROLLED, CAPACITY.
    pub fn from_schedule(schedule: &Schedule) -> Result<CourseTable> {
        let mut days = Vec::new();
        let mut times = Vec::new();
        let mut codes = Vec::new();
        let mut titles = Vec::new();
        let mut credits = Vec::new();
        let mut enrolled = Vec::new();
        let mut capacity = Vec::new();

        for (day, time, course) in schedule.slots() {
            days.push(day.as_str());
            times.push(time);
            codes.push(course.code());
            titles.push(course.name());
            credits.push(course.credit_hours());
            enrolled.push(course.enrolled_students());
            capacity.push(course.max_students());
        }

        let df = df!(
            "DAY" => days,
            "TIME" => times,
            "COURSE CODE" => codes,
            "COURSE TITLE" => titles,
            "CREDIT HOURS" => credits,
            "ENROLLED" => enrolled,
            "CAPACITY" => capacity
        )?;

        Ok(CourseTable { df })
    }

    pub fn to_lazy(&self) -> LazyTable {
        LazyTable::new(self.df.clone().lazy())
    }
}

impl Deref for CourseTable {
    type Target = DataFrame;

    fn deref(&self) -> &Self::Target {
        &self.df
    }
}

impl std::fmt::Display for CourseTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.df)
    }
}

pub struct LazyTable {
    lf: LazyFrame,
}

impl LazyTable {
    pub fn new(lf: LazyFrame) -> Self {
        LazyTable { lf }
    }

    pub fn day(self, day: Day) -> Self {
        let lf = self.lf.filter(col("DAY").eq(lit(day.as_str())));

        LazyTable { lf }
    }

    pub fn code_starts_with(self, prefix: &str) -> Self {
        let lf = self
            .lf
            .filter(col("COURSE CODE").str().starts_with(lit(prefix)));

        LazyTable { lf }
    }

    /// Courses that still have a seat.
    pub fn open_seats(self) -> Self {
        let lf = self.lf.filter(col("ENROLLED").lt(col("CAPACITY")));

        LazyTable { lf }
    }

    pub fn collect(self) -> Result<CourseTable> {
        let df = self.lf.collect()?;
        Ok(CourseTable { df })
    }
}

impl Deref for LazyTable {
    type Target = LazyFrame;

    fn deref(&self) -> &Self::Target {
        &self.lf
    }
}
