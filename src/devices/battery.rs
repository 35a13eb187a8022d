/// A residential battery energy storage system.
///
/// `Battery` models a storage unit with a fixed capacity, a round-trip
/// efficiency, and a minimum discharge-depth reserve. Stored energy is
/// mutated exclusively through [`Battery::charge`] and
/// [`Battery::discharge`]; both operations keep the stored energy within
/// `[min_soc_fraction * capacity, capacity]` by construction rather than
/// by post-hoc clamping.
///
/// Losses are split symmetrically between the two directions: the one-way
/// efficiency is `sqrt(round_trip_efficiency)` and is applied once on the
/// way in and once on the way out.
#[derive(Debug, Clone)]
pub struct Battery {
    /// Total energy capacity in kilowatt-hours.
    pub capacity_kwh: f32,

    /// Round-trip efficiency (0..=1.0), e.g. 0.90 for 10% total loss.
    pub efficiency_rt: f32,

    /// Minimum state of charge as a fraction of capacity (0.0 to 1.0).
    pub min_soc_fraction: f32,

    /// Currently stored energy in kilowatt-hours.
    pub current_energy_kwh: f32,

    /// One-way efficiency, `sqrt(efficiency_rt)`.
    efficiency_ow: f32,
}

impl Battery {
    /// Creates a new battery.
    ///
    /// # Arguments
    ///
    /// * `capacity_kwh` - Total capacity in kWh (must be > 0)
    /// * `efficiency_rt` - Round-trip efficiency (must be in (0, 1])
    /// * `min_soc_fraction` - Reserve floor as a fraction of capacity (0.0 to 1.0)
    /// * `initial_soc` - Initial state of charge as a fraction of capacity (0.0 to 1.0)
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero/negative or any fraction is out of range.
    pub fn new(capacity_kwh: f32, efficiency_rt: f32, min_soc_fraction: f32, initial_soc: f32) -> Self {
        assert!(capacity_kwh > 0.0);
        assert!(efficiency_rt > 0.0 && efficiency_rt <= 1.0);
        assert!((0.0..=1.0).contains(&min_soc_fraction));
        assert!((0.0..=1.0).contains(&initial_soc));

        Self {
            capacity_kwh,
            efficiency_rt,
            min_soc_fraction,
            current_energy_kwh: capacity_kwh * initial_soc,
            efficiency_ow: efficiency_rt.sqrt(),
        }
    }

    /// One-way (single-direction) efficiency.
    pub fn one_way_efficiency(&self) -> f32 {
        self.efficiency_ow
    }

    /// Energy level of the reserve floor in kWh.
    pub fn reserve_floor_kwh(&self) -> f32 {
        self.capacity_kwh * self.min_soc_fraction
    }

    /// Attempts to store `energy_input_kwh` drawn from a source.
    ///
    /// Charging losses are applied first, so only
    /// `energy_input_kwh * one_way_efficiency` reaches storage. If that
    /// exceeds the remaining headroom, the stored amount is clipped to the
    /// headroom and the input actually consumed is back-computed as
    /// `headroom / one_way_efficiency`.
    ///
    /// Returns the energy actually drawn from the source, which may be
    /// less than requested but never more. Zero or negative requests are
    /// no-ops returning 0.
    pub fn charge(&mut self, energy_input_kwh: f32) -> f32 {
        if energy_input_kwh <= 0.0 {
            return 0.0;
        }

        let to_store = energy_input_kwh * self.efficiency_ow;
        let headroom = (self.capacity_kwh - self.current_energy_kwh).max(0.0);

        let (stored, real_input) = if to_store > headroom {
            (headroom, headroom / self.efficiency_ow)
        } else {
            (to_store, energy_input_kwh)
        };

        self.current_energy_kwh += stored;
        real_input
    }

    /// Attempts to deliver `energy_needed_kwh` to a load.
    ///
    /// Only energy above the reserve floor is usable; if the floor leaves
    /// nothing usable, 0 is delivered and the state is untouched.
    /// Delivering `x` drains `x / one_way_efficiency` internally; when the
    /// required drain exceeds the usable energy, everything usable is
    /// drained and `usable * one_way_efficiency` is delivered instead.
    ///
    /// Returns the energy actually delivered, which may be less than
    /// requested but never more. Zero or negative requests are no-ops
    /// returning 0.
    pub fn discharge(&mut self, energy_needed_kwh: f32) -> f32 {
        if energy_needed_kwh <= 0.0 {
            return 0.0;
        }

        let usable = self.current_energy_kwh - self.reserve_floor_kwh();
        if usable <= 0.0 {
            return 0.0;
        }

        let drain_required = energy_needed_kwh / self.efficiency_ow;
        let (drain, delivered) = if drain_required > usable {
            (usable, usable * self.efficiency_ow)
        } else {
            (drain_required, energy_needed_kwh)
        };

        self.current_energy_kwh -= drain;
        delivered
    }
}
