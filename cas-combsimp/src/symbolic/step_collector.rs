/// A type that collects the steps of an algorithm, such as the rules applied by
/// [`simplify_with`](super::simplify_with) or [`combsimp_with`](super::combsimp_with).
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. Use it
/// when only the result is needed.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
