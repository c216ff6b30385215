use crate::course::Course;
use crate::scheduler::{Day, Schedule};
use crate::student::Student;

#[derive(serde::Serialize, Debug)]
pub struct CourseInfo {
    pub code: String,
    pub name: String,
    pub credit_hours: u32,
    pub enrolled: u32,
    pub capacity: u32,
}

impl From<&Course> for CourseInfo {
    fn from(course: &Course) -> Self {
        CourseInfo {
            code: course.code().to_string(),
            name: course.name().to_string(),
            credit_hours: course.credit_hours(),
            enrolled: course.enrolled_students(),
            capacity: course.max_students(),
        }
    }
}

#[derive(serde::Serialize, Debug)]
pub struct Slot {
    pub time: String,
    pub course: CourseInfo,
}

#[derive(serde::Serialize, Debug)]
pub struct DaySchedule {
    pub day: Day,
    pub slots: Vec<Slot>,
}

#[derive(serde::Serialize, Debug)]
pub struct ScheduleView {
    pub days: Vec<DaySchedule>,
}

impl From<&Schedule> for ScheduleView {
    fn from(schedule: &Schedule) -> Self {
        let days = Day::ALL
            .into_iter()
            .map(|day| DaySchedule {
                day,
                slots: schedule
                    .times()
                    .iter()
                    .zip(schedule.day(day))
                    .map(|(time, course)| Slot {
                        time: time.to_string(),
                        course: course.into(),
                    })
                    .collect(),
            })
            .collect();

        ScheduleView { days }
    }
}

#[derive(serde::Serialize, Debug)]
pub struct StudentInfo {
    pub id: String,
    pub name: String,
    pub classes: Vec<String>,
    pub max_classes: usize,
}

impl From<&Student> for StudentInfo {
    fn from(student: &Student) -> Self {
        StudentInfo {
            id: student.id().to_string(),
            name: student.name().to_string(),
            classes: student.classes().to_vec(),
            max_classes: student.max_classes(),
        }
    }
}
