use rand::{Rng, SeedableRng, rngs::StdRng};

/// Cloud coverage sub-ranges for the four weather bands:
/// clear, partly cloudy, mostly cloudy, overcast.
const COVERAGE_BANDS: [(f32, f32); 4] = [(0.0, 0.2), (0.2, 0.6), (0.6, 0.8), (0.8, 1.0)];

/// Season of the simulated period, weighting the cloud band draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Parses a season from its configuration name.
    ///
    /// Returns `None` for unrecognized names; the weather model then uses
    /// uniform band weights.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Spring" => Some(Self::Spring),
            "Summer" => Some(Self::Summer),
            "Fall" => Some(Self::Fall),
            "Winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// Band weights (clear, partly, mostly, overcast); each row sums to 1.
    fn band_weights(self) -> [f32; 4] {
        match self {
            Self::Spring => [0.1, 0.3, 0.4, 0.2],
            Self::Summer => [0.05, 0.15, 0.3, 0.5],
            Self::Fall => [0.2, 0.4, 0.3, 0.1],
            Self::Winter => [0.3, 0.4, 0.2, 0.1],
        }
    }
}

/// Stochastic cloud coverage model.
///
/// Each call to [`Weather::cloud_coverage`] is an independent draw: a
/// coverage band is selected by a season-weighted roll, then a value is
/// drawn uniformly within that band. No state is carried between calls,
/// so the engine may sample at any granularity (it samples once per step).
#[derive(Debug, Clone)]
pub struct Weather {
    season: Option<Season>,
    rng: StdRng,
}

impl Weather {
    /// Creates a weather model for the given season.
    ///
    /// `season` is `None` when the configured name was unrecognized, in
    /// which case all four bands are equally likely.
    pub fn new(season: Option<Season>, seed: u64) -> Self {
        Self {
            season,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a cloud coverage fraction in [0, 1].
    pub fn cloud_coverage(&mut self) -> f32 {
        let weights = match self.season {
            Some(season) => season.band_weights(),
            None => [0.25; 4],
        };

        let mut roll = self.rng.random::<f32>();
        let mut band = COVERAGE_BANDS.len() - 1;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                band = i;
                break;
            }
            roll -= w;
        }

        let (low, high) = COVERAGE_BANDS[band];
        self.rng.random_range(low..high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parsing() {
        assert_eq!(Season::from_name("Summer"), Some(Season::Summer));
        assert_eq!(Season::from_name("Winter"), Some(Season::Winter));
        assert_eq!(Season::from_name("Monsoon"), None);
        assert_eq!(Season::from_name("summer"), None);
    }

    #[test]
    fn test_coverage_always_in_unit_range() {
        for season in [None, Some(Season::Spring), Some(Season::Summer)] {
            let mut weather = Weather::new(season, 42);
            for _ in 0..5_000 {
                let c = weather.cloud_coverage();
                assert!((0.0..=1.0).contains(&c), "coverage {c} out of range");
            }
        }
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let mut a = Weather::new(Some(Season::Fall), 42);
        let mut b = Weather::new(Some(Season::Fall), 42);
        for _ in 0..100 {
            assert_eq!(a.cloud_coverage(), b.cloud_coverage());
        }
    }

    #[test]
    fn test_summer_cloudier_than_winter_on_average() {
        // Summer weights are overcast-heavy (0.5), winter clear-heavy.
        let mut summer = Weather::new(Some(Season::Summer), 1);
        let mut winter = Weather::new(Some(Season::Winter), 1);
        let n = 10_000;
        let summer_mean: f32 = (0..n).map(|_| summer.cloud_coverage()).sum::<f32>() / n as f32;
        let winter_mean: f32 = (0..n).map(|_| winter.cloud_coverage()).sum::<f32>() / n as f32;
        assert!(summer_mean > winter_mean);
    }

    #[test]
    fn test_unknown_season_draws_all_bands() {
        let mut weather = Weather::new(None, 3);
        let mut hits = [false; 4];
        for _ in 0..2_000 {
            let c = weather.cloud_coverage();
            let band = COVERAGE_BANDS
                .iter()
                .position(|(lo, hi)| c >= *lo && c < *hi)
                .unwrap_or(3);
            hits[band] = true;
        }
        assert!(hits.iter().all(|h| *h), "expected draws from every band");
    }
}
