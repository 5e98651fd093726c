/// Realized range of escape counts over one frame.
///
/// Starts from the "no pixel yet" sentinel (`min = budget`, `max = 0`) and
/// widens as counts are recorded. The same value doubles as the normalization
/// window handed to the colour maps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameStats {
    pub min_iterations: u32,
    pub max_iterations: u32,
}

impl FrameStats {
    #[must_use]
    pub const fn new(min_iterations: u32, max_iterations: u32) -> Self {
        Self {
            min_iterations,
            max_iterations,
        }
    }

    #[must_use]
    pub const fn empty(iteration_budget: u32) -> Self {
        Self::new(iteration_budget, 0)
    }

    pub fn record(&mut self, count: u32) {
        self.min_iterations = self.min_iterations.min(count);
        self.max_iterations = self.max_iterations.max(count);
    }

    #[must_use]
    pub fn from_counts(iteration_budget: u32, counts: &[u32]) -> Self {
        counts.iter().fold(Self::empty(iteration_budget), |mut stats, &count| {
            stats.record(count);
            stats
        })
    }

    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.min_iterations >= self.max_iterations
    }

    /// Position of `count` inside the window, clamped to `0.0..=1.0`.
    ///
    /// A zero-width window yields `0.0`.
    #[must_use]
    pub fn ratio(&self, count: u32) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }

        let span = f64::from(self.max_iterations - self.min_iterations);
        let offset = f64::from(count) - f64::from(self.min_iterations);

        (offset / span).clamp(0.0, 1.0)
    }
}
