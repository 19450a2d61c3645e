//! Shared notes view
//!
//! The full list is fetched on load and again after every successful
//! create or delete. Content length is enforced client-side before
//! submission, and deletion goes through an explicit confirmation step.

use std::sync::Arc;

use tracing::debug;

use crate::api::NotesApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{NewNote, Note};
use crate::validation;
use crate::views::{FetchGate, Ticket};

/// Form state for a new note; tags stay in their raw comma-separated
/// form until submission
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub course: String,
    pub tags: String,
}

/// Controller for the notes screen
pub struct NotesView {
    api: Arc<dyn NotesApi>,
    notes: Vec<Note>,
    pub filter: String,
    pub form: NoteForm,
    fetch_gate: FetchGate,
    submit_gate: FetchGate,
    error: Option<String>,
}

impl NotesView {
    pub fn new(api: Arc<dyn NotesApi>) -> Self {
        NotesView {
            api,
            notes: Vec::new(),
            filter: String::new(),
            form: NoteForm::default(),
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

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes whose title, course, or any tag contains the filter term,
    /// case-insensitively
    pub fn filtered(&self) -> Vec<&Note> {
        let term = self.filter.to_lowercase();
        self.notes
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&term)
                    || note.course.to_lowercase().contains(&term)
                    || note.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Fetch the full notes list
    pub async fn load(&mut self) -> ClientResult<()> {
        let ticket = self.begin_fetch();
        match self.api.list_notes().await {
            Ok(notes) => {
                self.apply_notes(ticket, notes);
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
    pub fn apply_notes(&mut self, ticket: Ticket, notes: Vec<Note>) -> bool {
        if !self.fetch_gate.settle(ticket) {
            debug!("Discarding stale notes response");
            return false;
        }
        self.notes = notes;
        true
    }

    /// Create a note from the form
    ///
    /// Returns `Ok(None)` when a submission is already in flight. On
    /// success the form is cleared and the list re-fetched.
    pub async fn create(&mut self) -> ClientResult<Option<()>> {
        let Some(ticket) = self.submit_gate.begin() else {
            return Ok(None);
        };
        self.error = None;

        if let Err(message) = validation::validate_note(&self.form.title, &self.form.content) {
            self.submit_gate.settle(ticket);
            self.error = Some(message.clone());
            return Err(ClientError::Validation(message));
        }

        let note = NewNote {
            title: self.form.title.clone(),
            content: self.form.content.clone(),
            course: self.form.course.clone(),
            tags: validation::normalize_tags(&self.form.tags),
        };

        let result = self.api.create_note(&note).await;
        self.submit_gate.settle(ticket);

        match result {
            Ok(_) => {
                self.form = NoteForm::default();
                self.load().await?;
                Ok(Some(()))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Delete a note
    ///
    /// Without `confirmed` no request is issued and `Ok(false)` is
    /// returned; the caller is expected to ask the user first. On
    /// success the list is re-fetched.
    pub async fn delete(&mut self, id: u64, confirmed: bool) -> ClientResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        let Some(ticket) = self.submit_gate.begin() else {
            return Ok(false);
        };
        self.error = None;

        let result = self.api.delete_note(id).await;
        self.submit_gate.settle(ticket);

        match result {
            Ok(()) => {
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
