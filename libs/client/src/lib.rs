//! StudySync API client
//!
//! Typed bindings for the external StudySync API together with the
//! view-level flows of the client application: authentication, the major
//! directory, class rankings and rating submissions, shared notes, and
//! schedule generation from a pasted course cart.
//!
//! The crate is split into three layers:
//! - [`models`] mirror the API's request/response shapes;
//! - [`api`] defines one port trait per endpoint group, implemented over
//!   HTTP by [`http::HttpApi`];
//! - [`views`] hold the form state and request orchestration of each
//!   screen, independent of any rendering front end.

pub mod api;
pub mod error;
pub mod http;
pub mod majors;
pub mod models;
pub mod session;
pub mod validation;
pub mod views;

pub use error::{ClientError, ClientResult};
