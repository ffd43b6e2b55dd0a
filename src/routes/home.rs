use axum::{http::StatusCode, response::IntoResponse};

pub const PIPELINE_MESSAGE: &str = "Automate code testing and deployment using a Continuous Integration/Continuous Deployment (CI/CD) pipeline!";

#[tracing::instrument(name = "Serving the pipeline message")]
pub async fn home() -> impl IntoResponse {
    (StatusCode::OK, PIPELINE_MESSAGE)
}
