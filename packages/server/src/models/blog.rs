use sea_orm::FromQueryResult;
use serde::Serialize;

/// Per-tag blog averages as returned by the database.
#[derive(Debug, FromQueryResult)]
pub struct BlogTopicRow {
    pub topic: String,
    pub avg_rating: f64,
    pub avg_number_of_comments: f64,
    pub number_of_blogs: i64,
}

/// Engagement statistics for blogs carrying a tag.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct BlogTopicStats {
    #[schema(example = "div2")]
    pub topic: String,
    /// Mean community rating of the tag's blogs.
    #[schema(example = 54.3)]
    pub avg_rating: f64,
    #[schema(example = 121.7)]
    pub avg_number_of_comments: f64,
    #[schema(example = 64)]
    pub number_of_blogs: i64,
    /// Coarse category of the tag; `Uncategorized` when unmapped.
    #[schema(example = "Contests")]
    pub supertopic: String,
}
