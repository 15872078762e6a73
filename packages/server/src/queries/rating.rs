use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement, Value};
use tracing::instrument;

use crate::models::rating::*;
use crate::utils::rating::{MAX_RATING_CHANGE, rating_bucket};
use crate::utils::stats::pearson_pairs;

/// Each user's participation in their most recent contest.
const LAST_PARTICIPATION_CTE: &str = r#"
    WITH last_participation AS (
        SELECT DISTINCT ON (p.user_handle)
            p.user_handle, p.new_rating, p.rating_change,
            c."startTimeSeconds" AS start_time
        FROM participations AS p
        JOIN contests AS c ON c.id = p.contest_id
        ORDER BY p.user_handle, c."startTimeSeconds" DESC, c.id DESC
    )
"#;

const EXPERIENCE_SQL: &str = r#"
    SELECT lp.new_rating AS rating,
        ((lp.start_time - u."registrationTimeSeconds") / (3600 * 24 * 365))::int4 AS years
    FROM last_participation AS lp
    JOIN users AS u ON u.handle = lp.user_handle
    WHERE lp.rating_change <= $1
    ORDER BY lp.new_rating, lp.user_handle
"#;

const SOLUTIONS_AMOUNT_SQL: &str = r#"
    SELECT lp.new_rating AS rating, COUNT(*)::int8 AS solved
    FROM last_participation AS lp
    JOIN solutions AS s ON s.user_handle = lp.user_handle
    WHERE lp.rating_change <= $1
    GROUP BY lp.user_handle, lp.new_rating
    ORDER BY lp.new_rating, lp.user_handle
"#;

const SOLUTIONS_RATING_SQL: &str = r#"
    SELECT lp.new_rating AS rating, AVG(pb.rating)::float8 AS avg_problem_rating
    FROM last_participation AS lp
    JOIN solutions AS s ON s.user_handle = lp.user_handle
    JOIN problems AS pb
        ON pb.contest_id = s.problem_contest_id AND pb.index = s.problem_index
    WHERE lp.rating_change <= $1
    GROUP BY lp.user_handle, lp.new_rating
    ORDER BY lp.new_rating, lp.user_handle
"#;

const SOLUTIONS_SOLVABILITY_SQL: &str = r#"
    SELECT lp.new_rating AS rating,
        AVG(pb.success_trials::float8
            / NULLIF(pb.success_trials + pb.unsuccess_trials, 0))::float8 AS avg_solvability
    FROM last_participation AS lp
    JOIN solutions AS s ON s.user_handle = lp.user_handle
    JOIN problems AS pb
        ON pb.contest_id = s.problem_contest_id AND pb.index = s.problem_index
    WHERE lp.rating_change <= $1
    GROUP BY lp.user_handle, lp.new_rating
    ORDER BY lp.new_rating, lp.user_handle
"#;

fn per_user_statement(db: &DatabaseConnection, select: &str) -> Statement {
    Statement::from_sql_and_values(
        db.get_database_backend(),
        format!("{LAST_PARTICIPATION_CTE}{select}"),
        [Value::from(MAX_RATING_CHANGE)],
    )
}

async fn per_user<R>(db: &DatabaseConnection, select: &str) -> Result<Vec<R>, DbErr>
where
    R: FromQueryResult,
{
    R::find_by_statement(per_user_statement(db, select))
        .all(db)
        .await
}

/// User rating against years of experience.
#[instrument(skip(db))]
pub async fn by_experience(
    db: &DatabaseConnection,
) -> Result<RatingDistribution<ExperiencePoint>, DbErr> {
    let rows: Vec<ExperienceRow> = per_user(db, EXPERIENCE_SQL).await?;
    Ok(to_distribution(rows))
}

/// User rating against the number of solved problems.
#[instrument(skip(db))]
pub async fn by_solutions_amount(
    db: &DatabaseConnection,
) -> Result<RatingDistribution<SolutionsAmountPoint>, DbErr> {
    let rows: Vec<SolutionsAmountRow> = per_user(db, SOLUTIONS_AMOUNT_SQL).await?;
    Ok(to_distribution(rows))
}

/// User rating against the mean rating of solved problems.
#[instrument(skip(db))]
pub async fn by_solutions_rating(
    db: &DatabaseConnection,
) -> Result<RatingDistribution<SolutionsRatingPoint>, DbErr> {
    let rows: Vec<SolutionsRatingRow> = per_user(db, SOLUTIONS_RATING_SQL).await?;
    Ok(to_distribution(rows))
}

/// User rating against the mean solvability of solved problems.
#[instrument(skip(db))]
pub async fn by_solutions_solvability(
    db: &DatabaseConnection,
) -> Result<RatingDistribution<SolutionsSolvabilityPoint>, DbErr> {
    let rows: Vec<SolutionsSolvabilityRow> = per_user(db, SOLUTIONS_SOLVABILITY_SQL).await?;
    Ok(to_distribution(rows))
}

/// Correlate rating with the row metric and bucket every row.
pub fn to_distribution<R: UserMetricRow>(rows: Vec<R>) -> RatingDistribution<R::Point> {
    let correlation = pearson_pairs(rows.iter().map(|r| (f64::from(r.rating()), r.metric())));
    let data = rows
        .into_iter()
        .map(|row| {
            let bucket = rating_bucket(row.rating());
            row.into_point(bucket)
        })
        .collect();

    RatingDistribution { correlation, data }
}
