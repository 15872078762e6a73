use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::rating::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/users_rating_distribution_by_experience",
    tag = "User Rating",
    operation_id = "getRatingByExperience",
    summary = "User rating vs. experience",
    description = "One point per user: rating after their last contest against whole years between registration and that contest. Users whose last rating change exceeds 250 are excluded.",
    responses(
        (status = 200, description = "Rating distribution", body = RatingDistribution<ExperiencePoint>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn by_experience(
    State(state): State<AppState>,
) -> Result<Json<RatingDistribution<ExperiencePoint>>, AppError> {
    let data = state.queries.rating_by_experience.get().await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/users_rating_distribution_by_solutions_amount",
    tag = "User Rating",
    operation_id = "getRatingBySolutionsAmount",
    summary = "User rating vs. solved problem count",
    responses(
        (status = 200, description = "Rating distribution", body = RatingDistribution<SolutionsAmountPoint>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn by_solutions_amount(
    State(state): State<AppState>,
) -> Result<Json<RatingDistribution<SolutionsAmountPoint>>, AppError> {
    let data = state.queries.rating_by_solutions_amount.get().await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/users_rating_distribution_by_solutions_rating",
    tag = "User Rating",
    operation_id = "getRatingBySolutionsRating",
    summary = "User rating vs. difficulty of solved problems",
    responses(
        (status = 200, description = "Rating distribution", body = RatingDistribution<SolutionsRatingPoint>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn by_solutions_rating(
    State(state): State<AppState>,
) -> Result<Json<RatingDistribution<SolutionsRatingPoint>>, AppError> {
    let data = state.queries.rating_by_solutions_rating.get().await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/users_rating_distribution_by_solutions_solvability",
    tag = "User Rating",
    operation_id = "getRatingBySolutionsSolvability",
    summary = "User rating vs. solvability of solved problems",
    description = "Solvability of a problem is accepted over all submissions; problems without submissions are ignored in the average, and users with no such problems get `null`.",
    responses(
        (status = 200, description = "Rating distribution", body = RatingDistribution<SolutionsSolvabilityPoint>),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn by_solutions_solvability(
    State(state): State<AppState>,
) -> Result<Json<RatingDistribution<SolutionsSolvabilityPoint>>, AppError> {
    let data = state.queries.rating_by_solutions_solvability.get().await?;
    Ok(Json(data))
}
