use rand::{Rng, SeedableRng, rngs::StdRng};

/// Fraction of the peak spike available outside the peak window.
const OFF_PEAK_SPIKE_FRACTION: f32 = 0.1;

/// A stochastic household demand model.
///
/// Demand is a constant base load plus a uniform random spike. Inside the
/// configured peak window (inclusive bounds) the spike is drawn from
/// `[0, peak_kw]`; outside it from `[0, 0.1 * peak_kw]`. No state is
/// carried between calls.
#[derive(Debug, Clone)]
pub struct HomeLoad {
    /// Always-on baseline consumption in kilowatts.
    pub base_kw: f32,

    /// Maximum spike magnitude during peak hours in kilowatts.
    pub peak_kw: f32,

    /// Start of the peak window, fractional hour of day (inclusive).
    pub peak_start_hour: f32,

    /// End of the peak window, fractional hour of day (inclusive).
    pub peak_end_hour: f32,

    /// Random number generator for spike draws.
    rng: StdRng,
}

impl HomeLoad {
    /// Creates a new household load model.
    ///
    /// # Panics
    ///
    /// Panics if the peak window bounds are inverted or a power value is
    /// negative.
    pub fn new(
        base_kw: f32,
        peak_kw: f32,
        peak_start_hour: f32,
        peak_end_hour: f32,
        seed: u64,
    ) -> Self {
        assert!(base_kw >= 0.0 && peak_kw >= 0.0);
        assert!(peak_start_hour <= peak_end_hour);

        Self {
            base_kw,
            peak_kw,
            peak_start_hour,
            peak_end_hour,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Instantaneous power demand in kW at the given fractional hour.
    pub fn demand_kw(&mut self, hour_of_day: f32) -> f32 {
        let spike_cap = if hour_of_day >= self.peak_start_hour && hour_of_day <= self.peak_end_hour
        {
            self.peak_kw
        } else {
            self.peak_kw * OFF_PEAK_SPIKE_FRACTION
        };

        let spike = if spike_cap > 0.0 {
            self.rng.random_range(0.0..spike_cap)
        } else {
            0.0
        };

        self.base_kw + spike
    }
}
