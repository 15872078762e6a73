/// Pearson correlation coefficient of two equally long samples.
///
/// Returns `None` when the coefficient is undefined: fewer than two points,
/// mismatched lengths, or zero variance on either side. Callers surface that
/// as `null` instead of inventing a value.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    // Round-off can push |r| marginally past 1 for perfectly linear data.
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Pearson correlation over `(x, y)` pairs, skipping pairs with a missing `y`.
pub fn pearson_pairs(pairs: impl IntoIterator<Item = (f64, Option<f64>)>) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = pairs
        .into_iter()
        .filter_map(|(x, y)| y.map(|y| (x, y)))
        .unzip();
    pearson(&xs, &ys)
}

/// Share of successful attempts, or `None` if nothing was attempted.
pub fn solvability(success: i64, failure: i64) -> Option<f64> {
    let total = success + failure;
    if total <= 0 {
        return None;
    }
    Some(success as f64 / total as f64)
}
