use sea_orm::FromQueryResult;
use serde::Serialize;

/// A per-user row pairing the user's current rating with one metric.
pub trait UserMetricRow {
    type Point;

    fn rating(&self) -> i32;

    /// The metric as a float for correlation, `None` when it is undefined.
    fn metric(&self) -> Option<f64>;

    /// Build the response point, given the `[lower, upper]` rating bucket.
    fn into_point(self, bucket: (i32, i32)) -> Self::Point;
}

/// Rating distribution of users against a metric.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct RatingDistribution<T> {
    /// Pearson correlation between user rating and the metric over `data`;
    /// `null` when undefined (fewer than two users or zero variance).
    #[schema(example = 0.42)]
    pub correlation: Option<f64>,
    /// One point per user, ordered by rating.
    pub data: Vec<T>,
}

#[derive(Debug, FromQueryResult)]
pub struct ExperienceRow {
    pub rating: i32,
    pub years: i32,
}

/// A user's rating against the whole years between registration and their
/// last contest.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct ExperiencePoint {
    #[schema(example = 1534)]
    pub rating: i32,
    #[schema(example = 1500)]
    pub rating_lower_bound: i32,
    #[schema(example = 1599)]
    pub rating_upper_bound: i32,
    #[schema(example = 3)]
    pub time_registration_years: i32,
}

impl UserMetricRow for ExperienceRow {
    type Point = ExperiencePoint;

    fn rating(&self) -> i32 {
        self.rating
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.years))
    }

    fn into_point(self, (lower, upper): (i32, i32)) -> ExperiencePoint {
        ExperiencePoint {
            rating: self.rating,
            rating_lower_bound: lower,
            rating_upper_bound: upper,
            time_registration_years: self.years,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct SolutionsAmountRow {
    pub rating: i32,
    pub solved: i64,
}

/// A user's rating against the number of problems they solved.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SolutionsAmountPoint {
    #[schema(example = 1534)]
    pub rating: i32,
    #[schema(example = 1500)]
    pub rating_lower_bound: i32,
    #[schema(example = 1599)]
    pub rating_upper_bound: i32,
    #[schema(example = 412)]
    pub number_of_solved_problems: i64,
}

impl UserMetricRow for SolutionsAmountRow {
    type Point = SolutionsAmountPoint;

    fn rating(&self) -> i32 {
        self.rating
    }

    fn metric(&self) -> Option<f64> {
        Some(self.solved as f64)
    }

    fn into_point(self, (lower, upper): (i32, i32)) -> SolutionsAmountPoint {
        SolutionsAmountPoint {
            rating: self.rating,
            rating_lower_bound: lower,
            rating_upper_bound: upper,
            number_of_solved_problems: self.solved,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct SolutionsRatingRow {
    pub rating: i32,
    pub avg_problem_rating: f64,
}

/// A user's rating against the mean difficulty of the problems they solved.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SolutionsRatingPoint {
    #[schema(example = 1534)]
    pub rating: i32,
    #[schema(example = 1500)]
    pub rating_lower_bound: i32,
    #[schema(example = 1599)]
    pub rating_upper_bound: i32,
    #[schema(example = 1387.5)]
    pub avg_rating_of_solved_problems: f64,
}

impl UserMetricRow for SolutionsRatingRow {
    type Point = SolutionsRatingPoint;

    fn rating(&self) -> i32 {
        self.rating
    }

    fn metric(&self) -> Option<f64> {
        Some(self.avg_problem_rating)
    }

    fn into_point(self, (lower, upper): (i32, i32)) -> SolutionsRatingPoint {
        SolutionsRatingPoint {
            rating: self.rating,
            rating_lower_bound: lower,
            rating_upper_bound: upper,
            avg_rating_of_solved_problems: self.avg_problem_rating,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct SolutionsSolvabilityRow {
    pub rating: i32,
    pub avg_solvability: Option<f64>,
}

/// A user's rating against the mean solvability of the problems they solved.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SolutionsSolvabilityPoint {
    #[schema(example = 1534)]
    pub rating: i32,
    #[schema(example = 1500)]
    pub rating_lower_bound: i32,
    #[schema(example = 1599)]
    pub rating_upper_bound: i32,
    /// `null` when none of the solved problems has recorded submissions.
    #[schema(example = 0.61)]
    pub avg_solvability_of_solved_problems: Option<f64>,
}

impl UserMetricRow for SolutionsSolvabilityRow {
    type Point = SolutionsSolvabilityPoint;

    fn rating(&self) -> i32 {
        self.rating
    }

    fn metric(&self) -> Option<f64> {
        self.avg_solvability
    }

    fn into_point(self, (lower, upper): (i32, i32)) -> SolutionsSolvabilityPoint {
        SolutionsSolvabilityPoint {
            rating: self.rating,
            rating_lower_bound: lower,
            rating_upper_bound: upper,
            avg_solvability_of_solved_problems: self.avg_solvability,
        }
    }
}
