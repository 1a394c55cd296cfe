//! The scorable-item capability shared by every kind of assessment.

/// Anything with a name, an earned score, and a maximum score.
///
/// Implementors get [`GradedItem::percentage`] for free.
pub trait GradedItem {
    /// Human-readable name of the item (e.g. "Homework 1").
    fn name(&self) -> &str;

    /// Points earned.
    fn score(&self) -> f64;

    /// Points available.
    fn max_score(&self) -> f64;

    /// Score as a percentage of the maximum.
    ///
    /// A zero `max_score` yields `0.0` instead of dividing by zero. The result
    /// is not clamped: a score above the maximum gives more than 100.
    fn percentage(&self) -> f64 {
        let max = self.max_score();
        if max == 0.0 {
            return 0.0;
        }
        (self.score() / max) * 100.0
    }
}
