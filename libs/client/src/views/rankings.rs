//! Class rankings view with the two rating submission forms
//!
//! The ranked list is fetched on entry and re-fetched in full after every
//! successful submission; there is no incremental merge. Submission forms
//! carry only the HTML-level guards of the original: required fields and
//! numeric ranges.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::api::CatalogApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{ClassRanking, DifficultySubmission, ProfessorRatingSubmission};
use crate::session::Session;
use crate::validation;
use crate::views::{FetchGate, Ticket};

/// Semester label guessed from a date: "Spring YYYY" through June,
/// "Fall YYYY" after
pub fn semester_for(date: NaiveDate) -> String {
    if date.month() < 7 {
        format!("Spring {}", date.year())
    } else {
        format!("Fall {}", date.year())
    }
}

/// Form state for a class difficulty rating
#[derive(Debug, Clone)]
pub struct DifficultyForm {
    pub class_code: String,
    pub class_name: String,
    pub professor: String,
    pub difficulty_rating: u8,
    pub semester: String,
}

impl DifficultyForm {
    pub fn new(today: NaiveDate) -> Self {
        DifficultyForm {
            class_code: String::new(),
            class_name: String::new(),
            professor: String::new(),
            difficulty_rating: 5,
            semester: semester_for(today),
        }
    }
}

/// Form state for a professor rating
#[derive(Debug, Clone)]
pub struct ProfessorForm {
    pub professor: String,
    pub class_code: String,
    pub rating: f64,
    pub review: String,
    pub semester: String,
}

impl ProfessorForm {
    pub fn new(today: NaiveDate) -> Self {
        ProfessorForm {
            professor: String::new(),
            class_code: String::new(),
            rating: 3.0,
            review: String::new(),
            semester: semester_for(today),
        }
    }
}

/// Controller for the per-major rankings screen
pub struct RankingsView {
    api: Arc<dyn CatalogApi>,
    pub major: String,
    rankings: Vec<ClassRanking>,
    pub search: String,
    pub difficulty_form: DifficultyForm,
    pub professor_form: ProfessorForm,
    today: NaiveDate,
    fetch_gate: FetchGate,
    submit_gate: FetchGate,
    error: Option<String>,
}

impl RankingsView {
    pub fn new(api: Arc<dyn CatalogApi>, major: impl Into<String>, today: NaiveDate) -> Self {
        RankingsView {
            api,
            major: major.into(),
            rankings: Vec::new(),
            search: String::new(),
            difficulty_form: DifficultyForm::new(today),
            professor_form: ProfessorForm::new(today),
            today,
            fetch_gate: FetchGate::default(),
            submit_gate: FetchGate::default(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.fetch_gate.is_loading() || self.submit_gate.is_loading()
    }

    pub fn rankings(&self) -> &[ClassRanking] {
        &self.rankings
    }

    /// Rankings whose class code or name contains the search term,
    /// case-insensitively
    pub fn filtered(&self) -> Vec<&ClassRanking> {
        let term = self.search.to_lowercase();
        self.rankings
            .iter()
            .filter(|ranking| {
                ranking.class_code.to_lowercase().contains(&term)
                    || ranking.class_name.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Fetch the ranked class list for this major
    pub async fn refresh(&mut self, session: &Session) -> ClientResult<()> {
        let ticket = self.begin_fetch();
        match self.api.class_rankings(&self.major, session).await {
            Ok(rankings) => {
                self.apply_rankings(ticket, rankings);
                Ok(())
            }
            Err(e) => {
                if self.fetch_gate.settle(ticket) {
                    self.error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Stamp a list fetch; a later fetch supersedes this one
    pub fn begin_fetch(&mut self) -> Ticket {
        self.fetch_gate.begin_superseding()
    }

    /// Apply a fetched list unless the fetch has been superseded
    pub fn apply_rankings(&mut self, ticket: Ticket, rankings: Vec<ClassRanking>) -> bool {
        if !self.fetch_gate.settle(ticket) {
            debug!("Discarding stale rankings response for {}", self.major);
            return false;
        }
        self.rankings = rankings;
        true
    }

    /// Submit the difficulty form
    ///
    /// Returns `Ok(None)` when a submission is already in flight. On
    /// success the form is reset and the list re-fetched exactly once.
    pub async fn submit_difficulty(&mut self, session: &Session) -> ClientResult<Option<()>> {
        let Some(ticket) = self.submit_gate.begin() else {
            return Ok(None);
        };
        self.error = None;

        if let Err(message) = self.validate_difficulty() {
            self.submit_gate.settle(ticket);
            self.error = Some(message.clone());
            return Err(ClientError::Validation(message));
        }

        let submission = DifficultySubmission {
            class_code: self.difficulty_form.class_code.clone(),
            class_name: self.difficulty_form.class_name.clone(),
            major: session.user.major.clone(),
            difficulty_rating: self.difficulty_form.difficulty_rating,
            professor: self.difficulty_form.professor.clone(),
            semester: self.difficulty_form.semester.clone(),
        };

        let result = self.api.submit_difficulty(&submission, session).await;
        self.submit_gate.settle(ticket);

        match result {
            Ok(()) => {
                self.difficulty_form = DifficultyForm::new(self.today);
                self.refresh(session).await?;
                Ok(Some(()))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Submit the professor rating form
    ///
    /// Same contract as [`submit_difficulty`](Self::submit_difficulty).
    pub async fn submit_professor_rating(
        &mut self,
        session: &Session,
    ) -> ClientResult<Option<()>> {
        let Some(ticket) = self.submit_gate.begin() else {
            return Ok(None);
        };
        self.error = None;

        if let Err(message) = self.validate_professor() {
            self.submit_gate.settle(ticket);
            self.error = Some(message.clone());
            return Err(ClientError::Validation(message));
        }

        let submission = ProfessorRatingSubmission {
            professor: self.professor_form.professor.clone(),
            class_code: self.professor_form.class_code.clone(),
            rating: self.professor_form.rating,
            review: self.professor_form.review.clone(),
            major: session.user.major.clone(),
            semester: self.professor_form.semester.clone(),
        };

        let result = self.api.submit_professor_rating(&submission, session).await;
        self.submit_gate.settle(ticket);

        match result {
            Ok(()) => {
                self.professor_form = ProfessorForm::new(self.today);
                self.refresh(session).await?;
                Ok(Some(()))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn validate_difficulty(&self) -> Result<(), String> {
        validation::require("Class code", &self.difficulty_form.class_code)?;
        validation::require("Class name", &self.difficulty_form.class_name)?;
        validation::require("Professor", &self.difficulty_form.professor)?;
        validation::require("Semester", &self.difficulty_form.semester)?;
        validation::validate_difficulty_rating(self.difficulty_form.difficulty_rating)
    }

    fn validate_professor(&self) -> Result<(), String> {
        validation::require("Professor", &self.professor_form.professor)?;
        validation::require("Class code", &self.professor_form.class_code)?;
        validation::require("Semester", &self.professor_form.semester)?;
        validation::validate_professor_rating(self.professor_form.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_guess() {
        let spring = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(semester_for(spring), "Spring 2026");

        let june = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        assert_eq!(semester_for(june), "Spring 2026");

        let fall = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(semester_for(fall), "Fall 2025");
    }
}
