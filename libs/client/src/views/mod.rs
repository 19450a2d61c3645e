//! View controllers
//!
//! One parameterized controller per screen of the application. Controllers
//! hold form state, run the client-side guards, call the API through the
//! port traits, and apply responses. They are independent of any
//! rendering front end.
//!
//! Every controller routes its requests through a [`FetchGate`]:
//! submissions are ignored while one is already in flight (the disabled
//! submit button), and list fetches carry a [`Ticket`] so a response that
//! has been superseded by a newer request is discarded instead of applied.

pub mod auth;
pub mod majors;
pub mod notes;
pub mod rankings;
pub mod schedule;

pub use auth::{AuthMode, AuthView};
pub use majors::{MajorDirectory, MajorEntry};
pub use notes::{NoteForm, NotesView};
pub use rankings::{DifficultyForm, ProfessorForm, RankingsView};
pub use schedule::{ScheduleMode, ScheduleView};

/// Identifies one issued request of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the newest request a view has issued
#[derive(Debug, Default)]
pub struct FetchGate {
    latest: u64,
    in_flight: bool,
}

impl FetchGate {
    /// Start a request unless one is already outstanding
    ///
    /// Returns `None` while a request is in flight; duplicate submissions
    /// are ignored rather than queued.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.latest += 1;
        Some(Ticket(self.latest))
    }

    /// Start a request that supersedes any outstanding one
    ///
    /// The previous request keeps running, but its ticket is stale and
    /// its response will be dropped at [`settle`](Self::settle).
    pub fn begin_superseding(&mut self) -> Ticket {
        self.in_flight = true;
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Settle `ticket`; returns true when it is still the newest request
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if ticket.0 == self.latest {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    /// Whether a request is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }
}
