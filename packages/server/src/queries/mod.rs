//! Analytic queries over the statistics database.
//!
//! Each query issues one aggregate statement and reshapes the rows. The
//! functions here are uncached; [`AnalyticsQueries`] wraps every one of them
//! in a [`CachedQuery`] so handlers never hit the database more than once per
//! cache window.

pub mod blog;
pub mod rating;
pub mod topic;

use std::future::Future;
use std::time::Duration;

use common::CachedQuery;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};

use crate::models::blog::BlogTopicStats;
use crate::models::rating::*;
use crate::models::topic::*;

pub(crate) fn statement(db: &DatabaseConnection, sql: &str) -> Statement {
    Statement::from_string(db.get_database_backend(), sql)
}

/// Argument-less analytic query with a memoized result.
pub type Cached<V> = CachedQuery<(), V, DbErr>;

/// The cached analytic queries served by the API.
pub struct AnalyticsQueries {
    pub topics: Cached<Vec<String>>,
    pub topics_distribution_by_rating: Cached<Vec<TopicRatingCount>>,
    pub topics_correlation: Cached<Vec<TopicPairCount>>,
    pub topics_solvability: Cached<Vec<TopicSolvability>>,
    pub rating_by_experience: Cached<RatingDistribution<ExperiencePoint>>,
    pub rating_by_solutions_amount: Cached<RatingDistribution<SolutionsAmountPoint>>,
    pub rating_by_solutions_rating: Cached<RatingDistribution<SolutionsRatingPoint>>,
    pub rating_by_solutions_solvability: Cached<RatingDistribution<SolutionsSolvabilityPoint>>,
    pub blogs_topics_data: Cached<Vec<BlogTopicStats>>,
}

impl AnalyticsQueries {
    pub fn new(db: &DatabaseConnection, ttl: Duration) -> Self {
        Self {
            topics: cached("topics", ttl, db, |db| async move {
                topic::distinct_topics(&db).await
            }),
            topics_distribution_by_rating: cached(
                "topics_distribution_by_rating",
                ttl,
                db,
                |db| async move { topic::topics_by_rating(&db).await },
            ),
            topics_correlation: cached("topics_correlation", ttl, db, |db| async move {
                topic::topic_pairs(&db).await
            }),
            topics_solvability: cached("topics_solvability", ttl, db, |db| async move {
                topic::topics_solvability(&db).await
            }),
            rating_by_experience: cached("rating_by_experience", ttl, db, |db| async move {
                rating::by_experience(&db).await
            }),
            rating_by_solutions_amount: cached(
                "rating_by_solutions_amount",
                ttl,
                db,
                |db| async move { rating::by_solutions_amount(&db).await },
            ),
            rating_by_solutions_rating: cached(
                "rating_by_solutions_rating",
                ttl,
                db,
                |db| async move { rating::by_solutions_rating(&db).await },
            ),
            rating_by_solutions_solvability: cached(
                "rating_by_solutions_solvability",
                ttl,
                db,
                |db| async move { rating::by_solutions_solvability(&db).await },
            ),
            blogs_topics_data: cached("blogs_topics_data", ttl, db, |db| async move {
                blog::blog_topics(&db).await
            }),
        }
    }

    /// Drop every cached result.
    pub fn invalidate_all(&self) {
        self.topics.invalidate();
        self.topics_distribution_by_rating.invalidate();
        self.topics_correlation.invalidate();
        self.topics_solvability.invalidate();
        self.rating_by_experience.invalidate();
        self.rating_by_solutions_amount.invalidate();
        self.rating_by_solutions_rating.invalidate();
        self.rating_by_solutions_solvability.invalidate();
        self.blogs_topics_data.invalidate();
    }
}

fn cached<V, F, Fut>(
    name: &'static str,
    ttl: Duration,
    db: &DatabaseConnection,
    query: F,
) -> Cached<V>
where
    V: Clone + Send + 'static,
    F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<V, DbErr>> + Send + 'static,
{
    let db = db.clone();
    CachedQuery::new(name, ttl, move |()| query(db.clone()))
}
