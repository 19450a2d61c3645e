//! Schedule generation view
//!
//! Three request modes against the scheduling endpoints: plain
//! generation, rating-optimized generation (multiple candidates), and
//! adding one course to a previously generated schedule. The pasted cart
//! text is sent as-is; an empty cart is still a valid request, and
//! whatever list comes back is rendered, including an empty one.

use std::sync::Arc;

use tracing::debug;

use crate::api::ScheduleApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{AddCourseRequest, CourseMeeting, SchedulePreferences, ScheduleRequest};
use crate::validation;
use crate::views::{FetchGate, Ticket};

/// The view's three-state mode selector; not persisted across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleMode {
    #[default]
    Basic,
    Optimized,
    AddCourse,
}

/// Controller for the schedule screen
pub struct ScheduleView {
    api: Arc<dyn ScheduleApi>,
    pub mode: ScheduleMode,
    pub pasted_text: String,
    pub preferences: SchedulePreferences,
    schedule: Vec<CourseMeeting>,
    candidates: Vec<Vec<CourseMeeting>>,
    selected: usize,
    gate: FetchGate,
    error: Option<String>,
}

impl ScheduleView {
    pub fn new(api: Arc<dyn ScheduleApi>) -> Self {
        ScheduleView {
            api,
            mode: ScheduleMode::default(),
            pasted_text: String::new(),
            preferences: SchedulePreferences::default(),
            schedule: Vec::new(),
            candidates: Vec::new(),
            selected: 0,
            gate: FetchGate::default(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    /// The currently selected schedule
    pub fn schedule(&self) -> &[CourseMeeting] {
        &self.schedule
    }

    /// Candidate schedules from the last optimize call
    pub fn candidates(&self) -> &[Vec<CourseMeeting>] {
        &self.candidates
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Choose one of the optimize candidates as the current schedule
    pub fn select_candidate(&mut self, index: usize) -> bool {
        match self.candidates.get(index) {
            Some(candidate) => {
                self.selected = index;
                self.schedule = candidate.clone();
                true
            }
            None => false,
        }
    }

    fn request(&self) -> ScheduleRequest {
        ScheduleRequest {
            pasted_text: self.pasted_text.clone(),
            preferences: self.preferences.clone(),
        }
    }

    /// Stamp a schedule request; a later request supersedes this one
    pub fn begin_fetch(&mut self) -> Ticket {
        self.gate.begin_superseding()
    }

    /// Apply a generated schedule unless the request has been superseded
    pub fn apply_schedule(&mut self, ticket: Ticket, meetings: Vec<CourseMeeting>) -> bool {
        if !self.gate.settle(ticket) {
            debug!("Discarding stale schedule response");
            return false;
        }
        self.schedule = meetings;
        true
    }

    /// Apply optimize candidates unless the request has been superseded
    pub fn apply_candidates(
        &mut self,
        ticket: Ticket,
        candidates: Vec<Vec<CourseMeeting>>,
    ) -> bool {
        if !self.gate.settle(ticket) {
            debug!("Discarding stale optimize response");
            return false;
        }
        self.schedule = candidates.first().cloned().unwrap_or_default();
        self.candidates = candidates;
        self.selected = 0;
        true
    }

    /// Plain generation from the pasted cart
    pub async fn generate(&mut self) -> ClientResult<()> {
        self.mode = ScheduleMode::Basic;
        self.error = None;
        let ticket = self.begin_fetch();

        match self.api.generate(&self.request()).await {
            Ok(meetings) => {
                self.apply_schedule(ticket, meetings);
                Ok(())
            }
            Err(e) => {
                self.fetch_failed(ticket, &e);
                Err(e)
            }
        }
    }

    /// Rating-optimized generation; keeps all candidates and selects the
    /// first
    pub async fn optimize(&mut self) -> ClientResult<()> {
        self.mode = ScheduleMode::Optimized;
        self.error = None;
        let ticket = self.begin_fetch();

        match self.api.optimize(&self.request()).await {
            Ok(candidates) => {
                self.apply_candidates(ticket, candidates);
                Ok(())
            }
            Err(e) => {
                self.fetch_failed(ticket, &e);
                Err(e)
            }
        }
    }

    /// Add one course to the previously generated schedule
    ///
    /// Client-orchestrated: the generate call is re-run to obtain the
    /// candidate pool, then the previous schedule, the desired title, and
    /// that pool are sent for the server to merge.
    pub async fn add_course(&mut self, course_title: &str) -> ClientResult<()> {
        if let Err(message) = validation::require("Course title", course_title) {
            self.error = Some(message.clone());
            return Err(ClientError::Validation(message));
        }

        self.mode = ScheduleMode::AddCourse;
        self.error = None;
        let ticket = self.begin_fetch();

        let result = async {
            let pool = self.api.generate(&self.request()).await?;
            let request = AddCourseRequest {
                current_schedule: self.schedule.clone(),
                course_title: course_title.to_string(),
                available_courses: pool,
            };
            self.api.add_course(&request).await
        }
        .await;

        match result {
            Ok(meetings) => {
                self.apply_schedule(ticket, meetings);
                Ok(())
            }
            Err(e) => {
                self.fetch_failed(ticket, &e);
                Err(e)
            }
        }
    }

    fn fetch_failed(&mut self, ticket: Ticket, e: &ClientError) {
        if self.gate.settle(ticket) {
            self.error = Some(e.to_string());
        }
    }
}
