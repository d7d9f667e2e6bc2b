pub mod schedule;
pub mod timetable;
pub mod user;

pub use schedule::{class_status, ClassStatus};
pub use timetable::{Day, Period, TimetableEntry, WeekTimetable};
pub use user::{Credentials, User};
