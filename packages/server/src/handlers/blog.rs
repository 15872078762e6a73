use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::blog::BlogTopicStats;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/blogs_topics_data",
    tag = "Blogs",
    operation_id = "getBlogsTopicsData",
    summary = "Blog engagement per tag",
    description = "Average rating, average comment count and number of blogs for each blog tag, with the tag's supertopic.",
    responses(
        (status = 200, description = "Blog tag statistics", body = Vec<BlogTopicStats>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn blogs_topics_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogTopicStats>>, AppError> {
    let data = state.queries.blogs_topics_data.get().await?;
    Ok(Json(data))
}
