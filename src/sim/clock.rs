/// Minutes in a simulated day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Fractional hour of day (0.0 to 24.0) for a time in minutes since start.
pub fn hour_of_day(time_min: u32) -> f32 {
    (time_min % MINUTES_PER_DAY) as f32 / 60.0
}

/// Integer day index for a time in minutes since start.
pub fn day_index(time_min: u32) -> u32 {
    time_min / MINUTES_PER_DAY
}

/// A simulation clock advancing in fixed minute increments.
///
/// The clock owns simulated time exclusively: it is monotonically
/// non-decreasing and advances only by the configured step size.
///
/// # Examples
///
/// ```
/// use microgrid_sim::sim::clock::Clock;
///
/// let mut clock = Clock::new(180, 60);
/// let mut times = Vec::new();
///
/// clock.run(|t| times.push(t));
/// assert_eq!(times, vec![0, 60, 120]);
/// ```
pub struct Clock {
    /// Current simulated time in minutes since start.
    current_min: u32,
    /// Step size in minutes.
    step_min: u32,
    /// End of the simulated horizon in minutes (exclusive).
    end_min: u32,
}

impl Clock {
    /// Creates a clock covering `[0, end_min)` in `step_min` increments.
    ///
    /// # Panics
    ///
    /// Panics if `step_min` is zero.
    pub fn new(end_min: u32, step_min: u32) -> Self {
        assert!(step_min > 0, "step_min must be > 0");
        Self {
            current_min: 0,
            step_min,
            end_min,
        }
    }

    /// Advances the clock by one step.
    ///
    /// # Returns
    ///
    /// * `Some(time_min)` - The simulated time in minutes before advancing
    /// * `None` - If the horizon has elapsed
    pub fn tick(&mut self) -> Option<u32> {
        if self.current_min < self.end_min {
            let t = self.current_min;
            self.current_min += self.step_min;
            Some(t)
        } else {
            None
        }
    }

    /// Runs a function for each remaining tick of the clock.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that takes the simulated time in minutes
    pub fn run(&mut self, mut f: impl FnMut(u32)) {
        while let Some(t) = self.tick() {
            f(t);
        }
    }
}
