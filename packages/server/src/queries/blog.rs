use sea_orm::{DatabaseConnection, DbErr, FromQueryResult};
use tracing::instrument;

use super::statement;
use crate::models::blog::*;
use crate::utils::supertopic::supertopic;

const BLOG_TOPICS_SQL: &str = r#"
    SELECT bt.tag AS topic,
        AVG(b.rating)::float8 AS avg_rating,
        AVG(b."numberOfComments")::float8 AS avg_number_of_comments,
        COUNT(*)::int8 AS number_of_blogs
    FROM blogs AS b
    JOIN blog_tags AS bt ON b.id = bt.blog_id
    GROUP BY bt.tag
    ORDER BY bt.tag
"#;

/// Rating and comment averages of blogs, per blog tag.
#[instrument(skip(db))]
pub async fn blog_topics(db: &DatabaseConnection) -> Result<Vec<BlogTopicStats>, DbErr> {
    let rows = BlogTopicRow::find_by_statement(statement(db, BLOG_TOPICS_SQL))
        .all(db)
        .await?;
    Ok(to_blog_stats(rows))
}

pub fn to_blog_stats(rows: Vec<BlogTopicRow>) -> Vec<BlogTopicStats> {
    rows.into_iter()
        .map(|row| BlogTopicStats {
            supertopic: supertopic(&row.topic).to_string(),
            topic: row.topic,
            avg_rating: row.avg_rating,
            avg_number_of_comments: row.avg_number_of_comments,
            number_of_blogs: row.number_of_blogs,
        })
        .collect()
}
