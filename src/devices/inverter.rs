use rand::{Rng, SeedableRng, rngs::StdRng};

/// A DC/AC inverter with a clipping ceiling and randomized failures.
///
/// The inverter is a two-state machine (working / broken). Each step it
/// may fail with a fixed probability; on failure an integer repair
/// duration in hours is drawn uniformly from the configured range and
/// counted down one unit per step. While broken, output is zero.
///
/// [`Inverter::check_status`] performs exactly one state transition check
/// and must be called exactly once per simulated step; repeated calls
/// within a step would corrupt the repair countdown. [`Inverter::clip_power`]
/// calls it internally, so the engine calls only `clip_power` per step.
#[derive(Debug, Clone)]
pub struct Inverter {
    /// Maximum AC output in kilowatts (clipping limit).
    pub max_output_kw: f32,

    /// Failure probability per step.
    pub failure_probability: f32,

    /// Minimum repair duration in hours.
    pub min_repair_hours: u32,

    /// Maximum repair duration in hours.
    pub max_repair_hours: u32,

    /// Whether the inverter is currently broken.
    is_broken: bool,

    /// Remaining repair time in hours; always 0 when not broken.
    hours_until_repair: u32,

    /// Random number generator for failure and repair draws.
    rng: StdRng,
}

impl Inverter {
    /// Creates a new inverter.
    ///
    /// # Arguments
    ///
    /// * `max_output_kw` - Clipping limit in kW
    /// * `failure_probability` - Per-step failure probability (0.0 to 1.0)
    /// * `min_repair_hours` - Shortest repair duration in hours
    /// * `max_repair_hours` - Longest repair duration in hours
    /// * `seed` - Random seed for reproducible failure sequences
    ///
    /// # Panics
    ///
    /// Panics if the probability is out of range or the repair bounds are
    /// inverted.
    pub fn new(
        max_output_kw: f32,
        failure_probability: f32,
        min_repair_hours: u32,
        max_repair_hours: u32,
        seed: u64,
    ) -> Self {
        assert!((0.0..=1.0).contains(&failure_probability));
        assert!(min_repair_hours <= max_repair_hours);

        Self {
            max_output_kw: max_output_kw.max(0.0),
            failure_probability,
            min_repair_hours,
            max_repair_hours,
            is_broken: false,
            hours_until_repair: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Whether the inverter is currently broken.
    pub fn is_broken(&self) -> bool {
        self.is_broken
    }

    /// Remaining repair time in hours (0 when working).
    pub fn hours_until_repair(&self) -> u32 {
        self.hours_until_repair
    }

    /// Advances the failure/repair state machine by one step.
    ///
    /// While broken, the repair counter decrements by one; when it reaches
    /// zero the inverter returns to service and immediately becomes
    /// eligible for a new failure roll in the same call. Must be called
    /// exactly once per simulated step.
    ///
    /// Returns `true` if the inverter is working after the check.
    pub fn check_status(&mut self) -> bool {
        if self.is_broken {
            self.hours_until_repair = self.hours_until_repair.saturating_sub(1);
            if self.hours_until_repair == 0 {
                self.is_broken = false;
            } else {
                return false;
            }
        }

        if self.rng.random::<f32>() < self.failure_probability {
            self.is_broken = true;
            self.hours_until_repair = self
                .rng
                .random_range(self.min_repair_hours..=self.max_repair_hours);
            return false;
        }

        true
    }

    /// Converts DC input to AC output for this step.
    ///
    /// Advances the state machine once, returns 0 while broken, and
    /// otherwise clips the input to `max_output_kw`.
    pub fn clip_power(&mut self, dc_power_kw: f32) -> f32 {
        if !self.check_status() {
            return 0.0;
        }
        dc_power_kw.min(self.max_output_kw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inverter() {
        let inv = Inverter::new(4.0, 0.005, 4, 72, 42);
        assert_eq!(inv.max_output_kw, 4.0);
        assert!(!inv.is_broken());
        assert_eq!(inv.hours_until_repair(), 0);
    }

    #[test]
    #[should_panic]
    fn test_inverted_repair_bounds_panic() {
        Inverter::new(4.0, 0.005, 72, 4, 42);
    }

    #[test]
    fn test_clipping_when_working() {
        let mut inv = Inverter::new(4.0, 0.0, 4, 72, 42);
        assert_eq!(inv.clip_power(3.0), 3.0);
        assert_eq!(inv.clip_power(5.5), 4.0);
        assert_eq!(inv.clip_power(0.0), 0.0);
    }

    #[test]
    fn test_never_fails_with_zero_probability() {
        let mut inv = Inverter::new(4.0, 0.0, 4, 72, 42);
        for _ in 0..10_000 {
            assert!(inv.check_status());
            assert_eq!(inv.hours_until_repair(), 0);
        }
    }

    #[test]
    fn test_certain_failure_zeroes_output_until_repaired() {
        // probability 1.0 breaks on the very first check
        let mut inv = Inverter::new(4.0, 1.0, 4, 72, 42);
        assert_eq!(inv.clip_power(3.0), 0.0);
        assert!(inv.is_broken());

        let duration = inv.hours_until_repair();
        assert!((4..=72).contains(&duration));

        // Output stays zero for the full countdown; with probability 1.0
        // the inverter re-breaks the moment the countdown finishes.
        for _ in 0..duration {
            assert_eq!(inv.clip_power(3.0), 0.0);
        }
        assert!(inv.is_broken());
    }

    #[test]
    fn test_resumes_clipping_after_repair() {
        let mut inv = Inverter::new(4.0, 1.0, 2, 2, 42);
        assert_eq!(inv.clip_power(3.0), 0.0);
        assert_eq!(inv.hours_until_repair(), 2);

        // Force the failure probability to zero mid-repair so the state
        // machine recovers cleanly.
        inv.failure_probability = 0.0;
        assert_eq!(inv.clip_power(3.0), 0.0); // counter 2 -> 1, still broken
        assert_eq!(inv.clip_power(3.0), 3.0); // counter 1 -> 0, repaired
        assert!(!inv.is_broken());
        assert_eq!(inv.hours_until_repair(), 0);
    }

    #[test]
    fn test_counter_zero_whenever_working() {
        let mut inv = Inverter::new(4.0, 0.3, 1, 5, 9);
        for _ in 0..1_000 {
            inv.check_status();
            if !inv.is_broken() {
                assert_eq!(inv.hours_until_repair(), 0);
            }
        }
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let mut a = Inverter::new(4.0, 0.1, 1, 10, 42);
        let mut b = Inverter::new(4.0, 0.1, 1, 10, 42);
        for _ in 0..500 {
            assert_eq!(a.check_status(), b.check_status());
            assert_eq!(a.hours_until_repair(), b.hours_until_repair());
        }
    }
}
