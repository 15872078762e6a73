use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::topic::*;
use crate::queries::topic::to_supertopics;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/topics",
    tag = "Topics",
    operation_id = "listTopics",
    summary = "List problem topics",
    description = "Returns every distinct problem tag in alphabetical order.",
    responses(
        (status = 200, description = "Distinct topics", body = Vec<String>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_topics(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let topics = state.queries.topics.get().await?;
    Ok(Json(topics))
}

#[utoipa::path(
    get,
    path = "/topics_distribution_by_rating",
    tag = "Topics",
    operation_id = "getTopicsDistributionByRating",
    summary = "Problem count per topic and rating",
    description = "Returns how many problems carry each topic at each difficulty rating, ordered by topic then rating.",
    responses(
        (status = 200, description = "Topic/rating histogram", body = Vec<TopicRatingCount>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn topics_distribution_by_rating(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopicRatingCount>>, AppError> {
    let data = state.queries.topics_distribution_by_rating.get().await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/topics_correlation",
    tag = "Topics",
    operation_id = "getTopicsCorrelation",
    summary = "Topic co-occurrence",
    description = "Returns, for every ordered pair of topics, the number of problems tagged with both. The diagonal `(a, a)` is the number of problems tagged `a`.",
    responses(
        (status = 200, description = "Topic pair counts", body = Vec<TopicPairCount>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn topics_correlation(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopicPairCount>>, AppError> {
    let data = state.queries.topics_correlation.get().await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/topics_solvability",
    tag = "Topics",
    operation_id = "getTopicsSolvability",
    summary = "Solvability per topic",
    description = "Returns accepted submissions divided by all submissions across each topic's problems. `solvability` is `null` for topics whose problems have no submissions.",
    responses(
        (status = 200, description = "Topic solvability", body = Vec<TopicSolvability>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn topics_solvability(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopicSolvability>>, AppError> {
    let data = state.queries.topics_solvability.get().await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/topics_supertopics",
    tag = "Topics",
    operation_id = "getTopicsSupertopics",
    summary = "Supertopic of every topic",
    description = "Maps each problem tag to its coarse category. Tags without a mapping get `Uncategorized`.",
    responses(
        (status = 200, description = "Topic to supertopic mapping", body = Vec<TopicSupertopic>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn topics_supertopics(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopicSupertopic>>, AppError> {
    let topics = state.queries.topics.get().await?;
    Ok(Json(to_supertopics(&topics)))
}
