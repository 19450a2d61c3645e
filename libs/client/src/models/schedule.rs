//! Schedule generation models
//!
//! A schedule request carries the raw pasted course cart plus a preferred
//! time window; the server does all parsing, conflict checking, and
//! optimization. Results have no persistent identity and live only for
//! the duration of the view.

use serde::{Deserialize, Serialize};

/// Preferred daily time window, "HH:MM" 24-hour strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePreferences {
    pub earliest_time: String,
    pub latest_time: String,
}

impl Default for SchedulePreferences {
    fn default() -> Self {
        SchedulePreferences {
            earliest_time: "08:00".to_string(),
            latest_time: "18:00".to_string(),
        }
    }
}

/// Body of the generate and optimize calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub pasted_text: String,
    pub preferences: SchedulePreferences,
}

/// One course meeting block in a generated schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMeeting {
    pub title: String,
    pub instructor: String,
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub rating: Option<f64>,
}

/// Body of the add-course call
///
/// The client re-requests the candidate pool and sends it along with the
/// previously selected schedule; the server makes the merge decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCourseRequest {
    pub current_schedule: Vec<CourseMeeting>,
    pub course_title: String,
    pub available_courses: Vec<CourseMeeting>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_time_window() {
        let prefs = SchedulePreferences::default();
        assert_eq!(prefs.earliest_time, "08:00");
        assert_eq!(prefs.latest_time, "18:00");
    }

    #[test]
    fn test_schedule_request_field_names() {
        let request = ScheduleRequest {
            pasted_text: String::new(),
            preferences: SchedulePreferences::default(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["pasted_text"], "");
        assert_eq!(json["preferences"]["earliest_time"], "08:00");
    }

    #[test]
    fn test_course_meeting_contract() {
        let body = r#"{
            "title": "BIOL 101-001",
            "instructor": "Dr. Greene",
            "days": ["Mon", "Wed", "Fri"],
            "start_time": "09:05",
            "end_time": "09:55",
            "rating": 4.2
        }"#;

        let parsed: CourseMeeting = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.days.len(), 3);
        assert_eq!(parsed.rating, Some(4.2));
    }
}
