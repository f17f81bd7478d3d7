// Math utilities and helper functions

/// Fold a coordinate that travelled freely along one axis back into
/// `[min, max]`, as if it had bounced off both ends.
pub fn fold_into_range(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        return min;
    }

    let t = (value - min).rem_euclid(2.0 * span);
    let folded = if t > span { 2.0 * span - t } else { t };
    min + folded
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
