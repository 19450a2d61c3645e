//! Port traits for the StudySync API, one per endpoint group
//!
//! The split mirrors the authorization behavior observed in the API:
//! auth and catalog calls carry a bearer token, notes and schedule calls
//! are public. Views depend on these traits rather than on [`HttpApi`]
//! directly so they can be exercised against in-memory fakes.
//!
//! [`HttpApi`]: crate::http::HttpApi

pub mod auth;
pub mod catalog;
pub mod notes;
pub mod schedule;

pub use auth::AuthApi;
pub use catalog::CatalogApi;
pub use notes::NotesApi;
pub use schedule::ScheduleApi;
