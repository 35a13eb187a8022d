use std::f32::consts::PI;

/// Hour of day when generation begins.
const SUNRISE_HOUR: f32 = 6.0;
/// Hour of day when generation ends.
const SUNSET_HOUR: f32 = 18.0;

/// A solar panel array producing DC power from a sinusoidal day model.
///
/// The daylight window [6, 18] is mapped linearly onto [0, π] and the
/// clear-sky output is `peak_kw * sin(angle)`, attenuated by the current
/// cloud coverage. Output is zero outside the window.
#[derive(Debug, Clone)]
pub struct SolarPanel {
    /// Peak generation capacity in kilowatts under clear sky at solar noon.
    pub peak_kw: f32,
}

impl SolarPanel {
    /// Creates a new solar panel array with the given peak capacity.
    ///
    /// Negative peak values are clamped to zero.
    pub fn new(peak_kw: f32) -> Self {
        Self {
            peak_kw: peak_kw.max(0.0),
        }
    }

    /// DC power output in kW at the given fractional hour of day.
    ///
    /// # Arguments
    ///
    /// * `hour_of_day` - Fractional hour (0.0 to 24.0)
    /// * `cloud_cover` - Cloud coverage fraction, 0.0 (clear) to 1.0 (overcast)
    pub fn generation_kw(&self, hour_of_day: f32, cloud_cover: f32) -> f32 {
        if hour_of_day < SUNRISE_HOUR || hour_of_day > SUNSET_HOUR {
            return 0.0;
        }

        let daylight_hours = SUNSET_HOUR - SUNRISE_HOUR;
        let sun_angle = (hour_of_day - SUNRISE_HOUR) * (PI / daylight_hours);
        let clear_sky_kw = self.peak_kw * sun_angle.sin();

        // Floor at 0 against tiny negative sine values at the window edges.
        (clear_sky_kw * (1.0 - cloud_cover)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_negative_peak() {
        let panel = SolarPanel::new(-2.0);
        assert_eq!(panel.peak_kw, 0.0);
    }

    #[test]
    fn test_peak_at_solar_noon() {
        let panel = SolarPanel::new(5.0);
        let noon = panel.generation_kw(12.0, 0.0);
        assert!((noon - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_at_window_edges() {
        let panel = SolarPanel::new(5.0);
        assert!(panel.generation_kw(6.0, 0.0).abs() < 1e-5);
        assert!(panel.generation_kw(18.0, 0.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_at_night_for_any_cloud() {
        let panel = SolarPanel::new(5.0);
        for cloud in [0.0, 0.5, 1.0] {
            assert_eq!(panel.generation_kw(0.0, cloud), 0.0);
            assert_eq!(panel.generation_kw(5.9, cloud), 0.0);
            assert_eq!(panel.generation_kw(18.1, cloud), 0.0);
            assert_eq!(panel.generation_kw(23.5, cloud), 0.0);
        }
    }

    #[test]
    fn test_cloud_attenuation() {
        let panel = SolarPanel::new(5.0);
        let clear = panel.generation_kw(12.0, 0.0);
        let cloudy = panel.generation_kw(12.0, 0.3);
        assert!((cloudy - clear * 0.7).abs() < 1e-5);
        assert_eq!(panel.generation_kw(12.0, 1.0), 0.0);
    }

    #[test]
    fn test_morning_afternoon_symmetry() {
        let panel = SolarPanel::new(5.0);
        let morning = panel.generation_kw(9.0, 0.0);
        let afternoon = panel.generation_kw(15.0, 0.0);
        assert!((morning - afternoon).abs() < 1e-4);
        assert!(morning > 0.0 && morning < 5.0);
    }

    #[test]
    fn test_never_negative() {
        let panel = SolarPanel::new(5.0);
        let mut hour = 0.0;
        while hour < 24.0 {
            assert!(panel.generation_kw(hour, 0.99) >= 0.0);
            hour += 0.25;
        }
    }
}
