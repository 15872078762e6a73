/// Width of the rating ranges user distributions are grouped into.
pub const RATING_BUCKET_WIDTH: i32 = 100;

/// Users whose last rating change exceeds this are skipped; the jump after a
/// first few contests says little about skill.
pub const MAX_RATING_CHANGE: i32 = 250;

/// Inclusive rating range `[lower, upper]` containing `rating`.
pub fn rating_bucket(rating: i32) -> (i32, i32) {
    let lower = rating.div_euclid(RATING_BUCKET_WIDTH) * RATING_BUCKET_WIDTH;
    (lower, lower + RATING_BUCKET_WIDTH - 1)
}
