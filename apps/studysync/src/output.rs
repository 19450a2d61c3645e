//! Terminal rendering helpers

use client::models::CourseMeeting;

/// Render a 0-5 rating as stars, e.g. 4.5 -> "★★★★☆"
pub fn stars(rating: f64) -> String {
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as usize;
    let half = clamped.fract() >= 0.5;
    let empty = 5usize.saturating_sub(clamped.ceil() as usize);

    let mut rendered = "★".repeat(full);
    if half {
        rendered.push('☆');
    }
    rendered.push_str(&"☆".repeat(empty));
    rendered
}

/// One course meeting block as two indented lines
pub fn format_meeting(meeting: &CourseMeeting) -> String {
    let rating = meeting
        .rating
        .map(|r| format!("  rated {:.1}/5", r))
        .unwrap_or_default();
    format!(
        "{} - {}\n    {} {}-{}{}",
        meeting.title,
        meeting.instructor,
        meeting.days.join(", "),
        meeting.start_time,
        meeting.end_time,
        rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(4.5), "★★★★☆");
        assert_eq!(stars(3.0), "★★★☆☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_format_meeting() {
        let meeting = CourseMeeting {
            title: "BIOL 101-001".to_string(),
            instructor: "Dr. Greene".to_string(),
            days: vec!["Mon".to_string(), "Wed".to_string(), "Fri".to_string()],
            start_time: "09:05".to_string(),
            end_time: "09:55".to_string(),
            rating: Some(4.2),
        };

        assert_eq!(
            format_meeting(&meeting),
            "BIOL 101-001 - Dr. Greene\n    Mon, Wed, Fri 09:05-09:55  rated 4.2/5"
        );
    }
}
