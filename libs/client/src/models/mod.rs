//! Request and response models mirrored from the StudySync API
//!
//! Field names follow the API's snake_case JSON contract exactly; these
//! types exist for marshalling only, the entities themselves are owned by
//! the external service.

pub mod note;
pub mod rating;
pub mod schedule;
pub mod user;

pub use note::{NewNote, Note};
pub use rating::{
    ClassRanking, DifficultySubmission, MajorStats, ProfessorRatingSubmission, ProfessorSummary,
};
pub use schedule::{AddCourseRequest, CourseMeeting, SchedulePreferences, ScheduleRequest};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
