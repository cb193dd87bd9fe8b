use std::sync::Arc;

use crate::services::submission::SubmissionPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SubmissionPipeline>,
}
