//! Shared notes endpoints
//!
//! These calls send no Authorization header, matching the API as
//! observed.

use async_trait::async_trait;
use tracing::info;

use crate::error::ClientResult;
use crate::http::HttpApi;
use crate::models::{NewNote, Note};

/// Notes endpoint group; public
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// GET /notes
    async fn list_notes(&self) -> ClientResult<Vec<Note>>;

    /// GET /notes/course/{course}
    async fn notes_for_course(&self, course: &str) -> ClientResult<Vec<Note>>;

    /// POST /notes
    async fn create_note(&self, note: &NewNote) -> ClientResult<Note>;

    /// DELETE /notes/{id}
    async fn delete_note(&self, id: u64) -> ClientResult<()>;
}

#[async_trait]
impl NotesApi for HttpApi {
    async fn list_notes(&self) -> ClientResult<Vec<Note>> {
        self.execute(self.get("/notes")).await
    }

    async fn notes_for_course(&self, course: &str) -> ClientResult<Vec<Note>> {
        let path = format!("/notes/course/{}", urlencoding::encode(course));
        self.execute(self.get(&path)).await
    }

    async fn create_note(&self, note: &NewNote) -> ClientResult<Note> {
        info!("Creating note: {}", note.title);
        self.execute(self.post("/notes").json(note)).await
    }

    async fn delete_note(&self, id: u64) -> ClientResult<()> {
        info!("Deleting note {}", id);
        self.execute_unit(self.delete(&format!("/notes/{}", id)))
            .await
    }
}
