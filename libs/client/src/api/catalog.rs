//! Major statistics, class rankings, and rating submissions

use async_trait::async_trait;
use tracing::info;

use crate::error::ClientResult;
use crate::http::HttpApi;
use crate::models::{ClassRanking, DifficultySubmission, MajorStats, ProfessorRatingSubmission};
use crate::session::Session;

/// Catalog endpoint group; every call is authenticated
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// GET /majors/{major}/stats
    async fn major_stats(&self, major: &str, session: &Session) -> ClientResult<MajorStats>;

    /// GET /majors/{major}/classes
    async fn class_rankings(
        &self,
        major: &str,
        session: &Session,
    ) -> ClientResult<Vec<ClassRanking>>;

    /// POST /submissions/difficulty
    async fn submit_difficulty(
        &self,
        submission: &DifficultySubmission,
        session: &Session,
    ) -> ClientResult<()>;

    /// POST /submissions/professor
    async fn submit_professor_rating(
        &self,
        submission: &ProfessorRatingSubmission,
        session: &Session,
    ) -> ClientResult<()>;
}

#[async_trait]
impl CatalogApi for HttpApi {
    async fn major_stats(&self, major: &str, session: &Session) -> ClientResult<MajorStats> {
        let path = format!("/majors/{}/stats", urlencoding::encode(major));
        self.execute(self.get_authed(&path, session)).await
    }

    async fn class_rankings(
        &self,
        major: &str,
        session: &Session,
    ) -> ClientResult<Vec<ClassRanking>> {
        let path = format!("/majors/{}/classes", urlencoding::encode(major));
        self.execute(self.get_authed(&path, session)).await
    }

    async fn submit_difficulty(
        &self,
        submission: &DifficultySubmission,
        session: &Session,
    ) -> ClientResult<()> {
        info!(
            "Submitting difficulty rating for {}",
            submission.class_code
        );
        self.execute_unit(
            self.post_authed("/submissions/difficulty", session)
                .json(submission),
        )
        .await
    }

    async fn submit_professor_rating(
        &self,
        submission: &ProfessorRatingSubmission,
        session: &Session,
    ) -> ClientResult<()> {
        info!("Submitting professor rating for {}", submission.professor);
        self.execute_unit(
            self.post_authed("/submissions/professor", session)
                .json(submission),
        )
        .await
    }
}
