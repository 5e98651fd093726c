#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerLimits {
    /// Scale applied to the zoom by one zoom-in or zoom-out step.
    pub zoom_factor: f64,
    pub iteration_slider_max: u32,
    pub iteration_slider_step: u32,
}

impl ExplorerLimits {
    #[must_use]
    pub fn accepts_iterations(&self, max_iterations: u32) -> bool {
        max_iterations > 0 && max_iterations <= self.iteration_slider_max
    }

    /// Moves `max_iterations` by whole slider steps, staying within
    /// `1..=iteration_slider_max`.
    ///
    /// Steps are taken from the current budget, not snapped to the step grid,
    /// so a budget that starts off the grid stays off it.
    #[must_use]
    pub fn step_iterations(&self, max_iterations: u32, steps: i32) -> u32 {
        let step = i64::from(self.iteration_slider_step.max(1));
        let moved = i64::from(max_iterations) + i64::from(steps) * step;
        let ceiling = i64::from(self.iteration_slider_max.max(1));

        moved.clamp(1, ceiling) as u32
    }
}

impl Default for ExplorerLimits {
    fn default() -> Self {
        Self {
            zoom_factor: 1.5,
            iteration_slider_max: 2000,
            iteration_slider_step: 100,
        }
    }
}
