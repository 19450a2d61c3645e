//! Schedule generation endpoints
//!
//! Public group: no Authorization header is sent, matching the API as
//! observed. The optimizing variant returns multiple candidate schedules
//! for the view to choose between.

use async_trait::async_trait;
use tracing::info;

use crate::error::ClientResult;
use crate::http::HttpApi;
use crate::models::{AddCourseRequest, CourseMeeting, ScheduleRequest};

/// Schedule endpoint group; public
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    /// POST /generate_schedule
    async fn generate(&self, request: &ScheduleRequest) -> ClientResult<Vec<CourseMeeting>>;

    /// POST /optimize_schedule
    async fn optimize(&self, request: &ScheduleRequest) -> ClientResult<Vec<Vec<CourseMeeting>>>;

    /// POST /add_course_to_schedule
    async fn add_course(&self, request: &AddCourseRequest) -> ClientResult<Vec<CourseMeeting>>;
}

#[async_trait]
impl ScheduleApi for HttpApi {
    async fn generate(&self, request: &ScheduleRequest) -> ClientResult<Vec<CourseMeeting>> {
        info!("Requesting schedule generation");
        self.execute(self.post("/generate_schedule").json(request))
            .await
    }

    async fn optimize(
        &self,
        request: &ScheduleRequest,
    ) -> ClientResult<Vec<Vec<CourseMeeting>>> {
        info!("Requesting rating-optimized schedules");
        self.execute(self.post("/optimize_schedule").json(request))
            .await
    }

    async fn add_course(&self, request: &AddCourseRequest) -> ClientResult<Vec<CourseMeeting>> {
        info!("Requesting course addition: {}", request.course_title);
        self.execute(self.post("/add_course_to_schedule").json(request))
            .await
    }
}
