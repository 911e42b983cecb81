/// Moves `progress` by `direction * speed`, stopping at either end of the path.
///
/// `direction` is expected in {-1, 0, +1}; progress never wraps.
pub fn advance(progress: f64, direction: f64, speed: f64) -> f64 {
    (progress + direction * speed).clamp(0.0, 1.0)
}
