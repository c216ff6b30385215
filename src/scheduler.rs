//! The weekly schedule: four teaching days, four time slots each, one course
//! per slot.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::config::Config;
use crate::course::Course;
use crate::error::Result;
use crate::student::Student;
use crate::table::CourseTable;

pub const SLOTS_PER_DAY: usize = 4;

pub const SCHEDULE_TIMES: [&str; SLOTS_PER_DAY] = [
    "8:30 AM - 10:30 AM",
    "10:30 AM - 12:30 PM",
    "12:30 PM - 2:30 PM",
    "2:30 PM - 4:30 PM",
];

// (name, code) per slot, in day order
const SEED: [[(&str, &str); SLOTS_PER_DAY]; 4] = [
    [
        ("Data Structures", "CS101"),
        ("AI", "CS102"),
        ("Web Development", "CS103"),
        ("Mathematics", "CS104"),
    ],
    [
        ("Machine Learning", "CS105"),
        ("Cyber Security", "CS106"),
        ("Cloud Computing", "CS107"),
        ("Game Development", "CS108"),
    ],
    [
        ("Databases", "CS109"),
        ("Networks", "CS110"),
        ("Operating Systems", "CS111"),
        ("Algorithms", "CS112"),
    ],
    [
        ("Software Engineering", "CS113"),
        ("Web Design", "CS114"),
        ("Mobile Apps", "CS115"),
        ("Big Data", "CS116"),
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
}

impl Day {
    pub const ALL: [Day; 4] = [Day::Sunday, Day::Monday, Day::Tuesday, Day::Wednesday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no classes are held on {0}")]
pub struct UnknownDay(pub String);

impl FromStr for Day {
    type Err = UnknownDay;

    // day names are matched exactly
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}

/// Outcome of a bulk registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub registered: usize,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student registered in {} classes.", self.registered)
    }
}

#[derive(Debug, Clone)]
pub struct Schedule {
    courses: [[Course; SLOTS_PER_DAY]; 4],
}

impl Schedule {
    /// Builds the fixed grid with the default course limits.
    pub fn new() -> Schedule {
        Schedule::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Schedule {
        let courses = SEED.map(|day| {
            day.map(|(name, code)| {
                Course::with_limits(name, code, config.credit_hours, config.max_students)
            })
        });
        tracing::info!(courses = SEED.len() * SLOTS_PER_DAY, "schedule built");
        Schedule { courses }
    }

    pub fn times(&self) -> &[&'static str; SLOTS_PER_DAY] {
        &SCHEDULE_TIMES
    }

    pub fn day(&self, day: Day) -> &[Course; SLOTS_PER_DAY] {
        &self.courses[day.index()]
    }

    /// Every slot as `(day, time, course)`, days in order then slots in order.
    pub fn slots(&self) -> impl Iterator<Item = (Day, &'static str, &Course)> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            SCHEDULE_TIMES
                .iter()
                .zip(self.day(day).iter())
                .map(move |(time, course)| (day, *time, course))
        })
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().flatten().find(|c| c.code() == code)
    }

    pub fn course_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.iter_mut().flatten().find(|c| c.code() == code)
    }

    /// Renders one day's slots. Unknown days get a header and a notice.
    pub fn display_schedule(&self, day: &str) -> String {
        let mut out = format!("Schedule for {day}:\n");

        match day.parse::<Day>() {
            Ok(day) => {
                for (time, course) in SCHEDULE_TIMES.iter().zip(self.day(day)) {
                    let _ = writeln!(out, "{time}: {course}");
                }
            }
            Err(err) => {
                tracing::warn!("{err}");
                out.push_str("No courses available.\n");
            }
        }

        out
    }

    /// Greedily enrolls the student, day by day and slot by slot, until the
    /// student's cap is reached. Only successful enrollments count.
    pub fn register_student(&mut self, student: &mut Student) -> Registration {
        let mut registered = 0;

        for (day, courses) in Day::ALL.iter().zip(self.courses.iter_mut()) {
            for course in courses.iter_mut() {
                if registered < student.max_classes() {
                    match student.enroll_in_class(course) {
                        Ok(_) => registered += 1,
                        Err(err) => tracing::debug!(%day, course = course.code(), "{err}"),
                    }
                } else {
                    break;
                }
            }
            if registered >= student.max_classes() {
                break;
            }
        }

        tracing::info!(student = student.id(), registered, "registration finished");
        Registration { registered }
    }

    pub fn to_table(&self) -> Result<CourseTable> {
        CourseTable::from_schedule(self)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentIds;

    #[test]
    fn grid_is_seeded_in_day_then_slot_order() {
        let schedule = Schedule::new();
        let codes: Vec<&str> = schedule.slots().map(|(_, _, c)| c.code()).collect();
        let expected: Vec<String> = (101..=116).map(|n| format!("CS{n}")).collect();
        assert_eq!(codes, expected);
        assert!(schedule.slots().all(|(_, _, c)| c.enrolled_students() == 0));
    }

    #[test]
    fn day_parsing() {
        assert_eq!("Tuesday".parse::<Day>(), Ok(Day::Tuesday));
        assert_eq!(
            "Friday".parse::<Day>(),
            Err(UnknownDay("Friday".to_string()))
        );
        assert!("monday".parse::<Day>().is_err());
    }

    #[test]
    fn display_monday() {
        let schedule = Schedule::new();
        assert_eq!(
            schedule.display_schedule("Monday"),
            "Schedule for Monday:\n\
             8:30 AM - 10:30 AM: Machine Learning (CS105), Credit Hours: 3, Enrolled: 0/25\n\
             10:30 AM - 12:30 PM: Cyber Security (CS106), Credit Hours: 3, Enrolled: 0/25\n\
             12:30 PM - 2:30 PM: Cloud Computing (CS107), Credit Hours: 3, Enrolled: 0/25\n\
             2:30 PM - 4:30 PM: Game Development (CS108), Credit Hours: 3, Enrolled: 0/25\n"
        );
    }

    #[test]
    fn display_unknown_day() {
        let schedule = Schedule::new();
        assert_eq!(
            schedule.display_schedule("Friday"),
            "Schedule for Friday:\nNo courses available.\n"
        );
    }

    #[test]
    fn register_fills_first_five() {
        let mut schedule = Schedule::new();
        let mut ids = StudentIds::new();
        let mut ali = Student::new("Ali", &mut ids);

        let registration = schedule.register_student(&mut ali);
        assert_eq!(registration.registered, 5);
        assert_eq!(registration.to_string(), "Student registered in 5 classes.");
        assert_eq!(ali.classes(), ["CS101", "CS102", "CS103", "CS104", "CS105"]);
        assert_eq!(schedule.course("CS105").unwrap().enrolled_students(), 1);
        assert_eq!(schedule.course("CS106").unwrap().enrolled_students(), 0);
    }

    #[test]
    fn register_skips_full_courses() {
        let config = Config {
            max_students: 1,
            ..Config::default()
        };
        let mut schedule = Schedule::from_config(&config);
        let mut ids = StudentIds::new();
        let mut first = Student::with_max_classes("Ali", &mut ids, 2);
        let mut second = Student::with_max_classes("Sara", &mut ids, 3);

        assert_eq!(schedule.register_student(&mut first).registered, 2);
        assert_eq!(schedule.register_student(&mut second).registered, 3);
        assert_eq!(second.classes(), ["CS103", "CS104", "CS105"]);
    }

    #[test]
    fn register_again_adds_nothing_at_cap() {
        let mut schedule = Schedule::new();
        let mut ids = StudentIds::new();
        let mut ali = Student::new("Ali", &mut ids);

        schedule.register_student(&mut ali);
        let again = schedule.register_student(&mut ali);
        assert_eq!(again.registered, 0);
        assert_eq!(schedule.course("CS101").unwrap().enrolled_students(), 1);
    }

    #[test]
    fn register_counts_availability_limit() {
        let mut schedule = Schedule::new();
        let mut ids = StudentIds::new();
        let mut keen = Student::with_max_classes("Keen", &mut ids, 40);

        assert_eq!(schedule.register_student(&mut keen).registered, 16);
    }

    #[test]
    fn course_lookup() {
        let mut schedule = Schedule::new();
        assert_eq!(schedule.course("CS116").unwrap().name(), "Big Data");
        assert!(schedule.course("CS117").is_none());

        assert!(schedule.course_mut("CS110").unwrap().enroll_student());
        assert_eq!(schedule.day(Day::Tuesday)[1].enrolled_students(), 1);
    }
}
