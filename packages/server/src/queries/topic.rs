use sea_orm::{DatabaseConnection, DbErr, FromQueryResult};
use tracing::instrument;

use super::statement;
use crate::models::topic::*;
use crate::utils::stats::solvability;
use crate::utils::supertopic::supertopic;

const DISTINCT_TOPICS_SQL: &str = r#"
    SELECT DISTINCT tag
    FROM problem_tags
    ORDER BY tag
"#;

const TOPICS_BY_RATING_SQL: &str = r#"
    SELECT pt.tag AS topic, p.rating AS rating, COUNT(*)::int8 AS number_of_tasks
    FROM problem_tags AS pt
    JOIN problems AS p
        ON pt.problem_contest_id = p.contest_id AND pt.problem_index = p.index
    GROUP BY pt.tag, p.rating
    ORDER BY pt.tag, p.rating
"#;

const TOPIC_PAIRS_SQL: &str = r#"
    SELECT pt1.tag AS topic1, pt2.tag AS topic2, COUNT(*)::int8 AS number_of_tasks
    FROM problem_tags AS pt1
    JOIN problem_tags AS pt2
        ON pt1.problem_contest_id = pt2.problem_contest_id
        AND pt1.problem_index = pt2.problem_index
    GROUP BY pt1.tag, pt2.tag
    ORDER BY pt1.tag, pt2.tag
"#;

const TOPIC_TRIALS_SQL: &str = r#"
    SELECT pt.tag AS topic,
        COALESCE(SUM(p.success_trials), 0)::int8 AS success_trials,
        COALESCE(SUM(p.unsuccess_trials), 0)::int8 AS unsuccess_trials
    FROM problem_tags AS pt
    JOIN problems AS p
        ON pt.problem_contest_id = p.contest_id AND pt.problem_index = p.index
    GROUP BY pt.tag
    ORDER BY pt.tag
"#;

/// Every distinct problem tag, alphabetically.
#[instrument(skip(db))]
pub async fn distinct_topics(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let rows = TagRow::find_by_statement(statement(db, DISTINCT_TOPICS_SQL))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|row| row.tag).collect())
}

/// Problem counts grouped by topic and difficulty rating.
#[instrument(skip(db))]
pub async fn topics_by_rating(db: &DatabaseConnection) -> Result<Vec<TopicRatingCount>, DbErr> {
    TopicRatingCount::find_by_statement(statement(db, TOPICS_BY_RATING_SQL))
        .all(db)
        .await
}

/// Co-occurrence counts of every ordered topic pair on the same problem.
#[instrument(skip(db))]
pub async fn topic_pairs(db: &DatabaseConnection) -> Result<Vec<TopicPairCount>, DbErr> {
    TopicPairCount::find_by_statement(statement(db, TOPIC_PAIRS_SQL))
        .all(db)
        .await
}

/// Submission success ratio per topic.
#[instrument(skip(db))]
pub async fn topics_solvability(db: &DatabaseConnection) -> Result<Vec<TopicSolvability>, DbErr> {
    let rows = TopicTrialsRow::find_by_statement(statement(db, TOPIC_TRIALS_SQL))
        .all(db)
        .await?;
    Ok(to_solvability(rows))
}

pub fn to_solvability(rows: Vec<TopicTrialsRow>) -> Vec<TopicSolvability> {
    rows.into_iter()
        .map(|row| TopicSolvability {
            solvability: solvability(row.success_trials, row.unsuccess_trials),
            topic: row.topic,
        })
        .collect()
}

/// Pair each topic with its supertopic.
pub fn to_supertopics(topics: &[String]) -> Vec<TopicSupertopic> {
    topics
        .iter()
        .map(|topic| TopicSupertopic {
            topic: topic.clone(),
            supertopic: supertopic(topic).to_string(),
        })
        .collect()
}
