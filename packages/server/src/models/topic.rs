use sea_orm::FromQueryResult;
use serde::Serialize;

/// A single distinct problem tag.
#[derive(Debug, FromQueryResult)]
pub struct TagRow {
    pub tag: String,
}

/// Number of problems carrying a topic at a given difficulty rating.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct TopicRatingCount {
    #[schema(example = "dp")]
    pub topic: String,
    /// Problem difficulty rating.
    #[schema(example = 1600)]
    pub rating: i32,
    #[schema(example = 87)]
    pub number_of_tasks: i64,
}

/// Number of problems tagged with both topics.
///
/// Pairs are ordered, so `(a, b)` and `(b, a)` both appear, and `(a, a)`
/// counts the problems tagged `a`.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct TopicPairCount {
    #[schema(example = "dp")]
    pub topic1: String,
    #[schema(example = "greedy")]
    pub topic2: String,
    #[schema(example = 311)]
    pub number_of_tasks: i64,
}

/// Summed submission counters for one topic.
#[derive(Debug, FromQueryResult)]
pub struct TopicTrialsRow {
    pub topic: String,
    pub success_trials: i64,
    pub unsuccess_trials: i64,
}

/// Share of accepted submissions among all submissions on a topic's problems.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TopicSolvability {
    #[schema(example = "dynamic programming")]
    pub topic: String,
    /// In `[0, 1]`; `null` when the topic's problems have no submissions.
    #[schema(example = 0.8)]
    pub solvability: Option<f64>,
}

/// The coarse category a problem tag belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TopicSupertopic {
    #[schema(example = "shortest paths")]
    pub topic: String,
    /// `Uncategorized` for tags without a mapping.
    #[schema(example = "Graphs")]
    pub supertopic: String,
}
