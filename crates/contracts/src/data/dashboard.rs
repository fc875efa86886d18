//! Canned data behind the parent-portal dashboard.
//!
//! Nothing in this module is computed. In particular the attendance
//! percentage is a stored literal, independent of the day counters it sits
//! next to; deriving it instead is a deliberate non-change.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Serialize;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal calendar date")
}

/// The student record the dashboard header shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentProfile {
    pub name: &'static str,
    pub id: &'static str,
    pub class_name: &'static str,
    pub section: &'static str,
    pub roll_number: &'static str,
    pub date_of_birth: &'static str,
    pub parent_name: &'static str,
    pub contact_number: &'static str,
}

/// One graded assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeEntry {
    pub subject: &'static str,
    pub grade: &'static str,
    pub marks: &'static str,
    pub date: NaiveDate,
}

/// Attendance counters for the running year. `percentage` is stored as
/// given, not derived from the counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub present: u32,
    pub absent: u32,
    pub total_days: u32,
    pub percentage: f32,
}

/// Teacher assessment of classroom behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BehaviorRating {
    Excellent,
    Good,
    Average,
}

impl BehaviorRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorRating::Excellent => "Excellent",
            BehaviorRating::Good => "Good",
            BehaviorRating::Average => "Average",
        }
    }
}

/// One behavior note from a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehaviorReport {
    pub date: NaiveDate,
    pub rating: BehaviorRating,
    pub note: &'static str,
    pub teacher: &'static str,
}

/// One calendar entry on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEvent {
    pub date: NaiveDate,
    pub title: &'static str,
    pub time: &'static str,
}

static STUDENT_PROFILE: StudentProfile = StudentProfile {
    name: "Hassaan",
    id: "22G149",
    class_name: "Grade 11-A",
    section: "Science",
    roll_number: "15",
    date_of_birth: "March 15, 2007",
    parent_name: "Mr. Ahmed Khan",
    contact_number: "+92 300 1234567",
};

// Most recent assessment first.
static RECENT_GRADES: Lazy<Vec<GradeEntry>> = Lazy::new(|| {
    vec![
        GradeEntry { subject: "Mathematics", grade: "A+", marks: "95/100", date: date(2024, 1, 15) },
        GradeEntry { subject: "Physics", grade: "A", marks: "88/100", date: date(2024, 1, 12) },
        GradeEntry { subject: "Chemistry", grade: "A+", marks: "92/100", date: date(2024, 1, 10) },
        GradeEntry { subject: "Biology", grade: "A", marks: "87/100", date: date(2024, 1, 8) },
        GradeEntry { subject: "English", grade: "A+", marks: "94/100", date: date(2024, 1, 5) },
        GradeEntry { subject: "Urdu", grade: "A", marks: "89/100", date: date(2024, 1, 3) },
        GradeEntry { subject: "Islamic Studies", grade: "A+", marks: "96/100", date: date(2024, 1, 1) },
        GradeEntry { subject: "Computer Science", grade: "A+", marks: "98/100", date: date(2023, 12, 28) },
        GradeEntry { subject: "Mathematics", grade: "A", marks: "90/100", date: date(2023, 12, 25) },
        GradeEntry { subject: "Physics", grade: "A+", marks: "93/100", date: date(2023, 12, 22) },
    ]
});

static ATTENDANCE: AttendanceSummary = AttendanceSummary {
    present: 185,
    absent: 8,
    total_days: 193,
    percentage: 95.9,
};

// Most recent note first.
static BEHAVIOR_REPORTS: Lazy<Vec<BehaviorReport>> = Lazy::new(|| {
    vec![
        BehaviorReport {
            date: date(2024, 1, 10),
            rating: BehaviorRating::Excellent,
            note: "Outstanding participation in science fair",
            teacher: "Ms. Sarah",
        },
        BehaviorReport {
            date: date(2024, 1, 5),
            rating: BehaviorRating::Good,
            note: "Helped classmates with mathematics",
            teacher: "Mr. Ali",
        },
        BehaviorReport {
            date: date(2023, 12, 20),
            rating: BehaviorRating::Excellent,
            note: "Leadership in group project",
            teacher: "Dr. Khan",
        },
    ]
});

// Nearest event first.
static UPCOMING_EVENTS: Lazy<Vec<UpcomingEvent>> = Lazy::new(|| {
    vec![
        UpcomingEvent { date: date(2024, 1, 25), title: "Parent-Teacher Meeting", time: "10:00 AM" },
        UpcomingEvent { date: date(2024, 1, 30), title: "Science Exhibition", time: "2:00 PM" },
        UpcomingEvent { date: date(2024, 2, 5), title: "Sports Day", time: "9:00 AM" },
    ]
});

pub fn student_profile() -> &'static StudentProfile {
    &STUDENT_PROFILE
}

/// Grade entries, most recent first.
pub fn recent_grades() -> &'static [GradeEntry] {
    &RECENT_GRADES
}

pub fn attendance_summary() -> AttendanceSummary {
    ATTENDANCE
}

/// Behavior notes, most recent first.
pub fn behavior_reports() -> &'static [BehaviorReport] {
    &BEHAVIOR_REPORTS
}

/// Calendar entries, ascending by date.
pub fn upcoming_events() -> &'static [UpcomingEvent] {
    &UPCOMING_EVENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_are_most_recent_first() {
        let grades = recent_grades();
        assert_eq!(grades.len(), 10);
        assert!(grades.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn events_ascend_by_date() {
        let events = upcoming_events();
        assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn behavior_reports_are_most_recent_first() {
        let reports = behavior_reports();
        assert!(reports.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn attendance_percentage_is_the_stored_literal() {
        let summary = attendance_summary();
        assert_eq!(summary.percentage, 95.9);
        // The counters do not have to agree with the stored percentage;
        // the presenter reports them independently.
        assert_eq!(summary.present + summary.absent, summary.total_days);
    }

    #[test]
    fn profile_matches_the_portal_account() {
        assert_eq!(student_profile().id, "22G149");
    }
}
