//! Weighted and unweighted means over grade percentages.

/// Weighted mean of `(value, weight)` pairs.
///
/// Returns `0.0` when there are no pairs or when the weights sum to zero.
pub fn weighted_mean<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut count = 0usize;

    for (value, weight) in pairs {
        weighted_sum += value * weight;
        total_weight += weight;
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }
    if total_weight == 0.0 {
        tracing::warn!(count, "weights sum to zero, treating weighted mean as 0.0");
        return 0.0;
    }

    weighted_sum / total_weight
}

/// Arithmetic mean, or `None` for an empty slice.
///
/// Every value counts equally, so a class mean built from per-student
/// averages is not re-weighted by how many assessments each student has.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round to `places` decimals, ties away from zero.
///
/// `format!("{:.2}", x)` breaks ties to even, so 89.125 would print as
/// 89.12. Renderers pass values through this first so that ties round up.
pub fn round_half_away(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
