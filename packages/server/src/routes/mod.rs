use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{blog, rating, topic};
use crate::state::AppState;

/// Routes served under `/api`.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(topic::list_topics))
        .routes(routes!(topic::topics_distribution_by_rating))
        .routes(routes!(topic::topics_correlation))
        .routes(routes!(topic::topics_solvability))
        .routes(routes!(topic::topics_supertopics))
        .routes(routes!(rating::by_experience))
        .routes(routes!(rating::by_solutions_amount))
        .routes(routes!(rating::by_solutions_rating))
        .routes(routes!(rating::by_solutions_solvability))
        .routes(routes!(blog::blogs_topics_data))
}
