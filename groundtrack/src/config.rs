use crate::{
    error::ConfigError,
    units::{Angle, Time},
};
use serde::Deserialize;
use std::{fs, path::Path};
use tle_types::geo::Observer;

/// Every tunable of the engine. Times are in milliseconds, angles in degrees.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Used when a query doesn't name an observer
    pub observer: DefaultObserver,
    pub crossing_search: CrossingSearchConfig,
    pub orbit_track: OrbitTrackConfig,
    pub ground_track: GroundTrackConfig,
    pub bearing: BearingConfig,
}

impl EngineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let o = &self.observer.0;
        if !(-90.0..=90.0).contains(&o.latitude) {
            return Err(invalid(format!("observer latitude {} is out of range", o.latitude)));
        }
        if !(-180.0..=180.0).contains(&o.longitude) {
            return Err(invalid(format!("observer longitude {} is out of range", o.longitude)));
        }

        let c = &self.crossing_search;
        positive("crossing-search.coarse-step-ms", c.coarse_step_ms)?;
        positive("crossing-search.min-step-ms", c.min_step_ms)?;
        if c.max_iterations == 0 {
            return Err(invalid("crossing-search.max-iterations must be non-zero".to_owned()));
        }
        if !(0.0..180.0).contains(&c.threshold_deg) {
            return Err(invalid(format!(
                "crossing-search.threshold-deg {} must be within [0, 180)",
                c.threshold_deg
            )));
        }

        let t = &self.orbit_track;
        positive("orbit-track.step-ms", t.step_ms)?;
        positive("orbit-track.refine-step-ms", t.refine_step_ms)?;
        positive("orbit-track.max-duration-ms", t.max_duration_ms)?;

        let g = &self.ground_track;
        positive("ground-track.previous-orbit-offset-ms", g.previous_orbit_offset_ms)?;
        positive("ground-track.continuous-step-ms", g.continuous_step_ms)?;
        positive("ground-track.continuous-duration-ms", g.continuous_duration_ms)?;

        positive("bearing.sample-interval-ms", self.bearing.sample_interval_ms)?;

        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

fn positive(name: &str, millis: u64) -> Result<(), ConfigError> {
    if millis == 0 {
        Err(invalid(format!("{name} must be non-zero")))
    } else {
        Ok(())
    }
}

fn millis(ms: u64) -> Time {
    Time::from_millis(ms as f64)
}

#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
#[serde(transparent)]
pub struct DefaultObserver(pub Observer);

impl Default for DefaultObserver {
    fn default() -> Self {
        DefaultObserver(Observer::new(36.9613422, -122.0308, 0.37))
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrossingSearchConfig {
    /// Initial backwards step
    pub coarse_step_ms: u64,
    /// Refinement stops once the step drops below this
    pub min_step_ms: u64,
    /// Searches that don't converge within this many samples never will
    pub max_iterations: usize,
    /// Two longitudes of opposite sign only cross the antemeridian when one of
    /// them is further than this from the prime meridian
    pub threshold_deg: f64,
}

impl Default for CrossingSearchConfig {
    fn default() -> Self {
        Self {
            coarse_step_ms: 600_000,
            min_step_ms: 500,
            max_iterations: 1000,
            threshold_deg: 100.0,
        }
    }
}

impl CrossingSearchConfig {
    pub fn coarse_step(&self) -> Time {
        millis(self.coarse_step_ms)
    }

    pub fn min_step(&self) -> Time {
        millis(self.min_step_ms)
    }

    pub fn threshold(&self) -> Angle {
        Angle::from_degrees(self.threshold_deg)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OrbitTrackConfig {
    pub step_ms: u64,
    /// Step used once the walk has passed the first crossing
    pub refine_step_ms: u64,
    pub max_duration_ms: u64,
}

impl Default for OrbitTrackConfig {
    fn default() -> Self {
        Self {
            step_ms: 60_000,
            refine_step_ms: 500,
            max_duration_ms: 6_000_000,
        }
    }
}

impl OrbitTrackConfig {
    pub fn step(&self) -> Time {
        millis(self.step_ms)
    }

    pub fn refine_step(&self) -> Time {
        millis(self.refine_step_ms)
    }

    pub fn max_duration(&self) -> Time {
        millis(self.max_duration_ms)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GroundTrackConfig {
    /// How far before the current orbit's start to look for the previous one
    pub previous_orbit_offset_ms: u64,
    /// Added to the orbital period when looking for the next orbit's start
    pub next_orbit_margin_ms: u64,
    /// Sampling of orbits that never cross the antemeridian
    pub continuous_step_ms: u64,
    pub continuous_duration_ms: u64,
}

impl Default for GroundTrackConfig {
    fn default() -> Self {
        Self {
            previous_orbit_offset_ms: 10_000,
            next_orbit_margin_ms: 1_800_000,
            continuous_step_ms: 600_000,
            continuous_duration_ms: 86_400_000,
        }
    }
}

impl GroundTrackConfig {
    pub fn previous_orbit_offset(&self) -> Time {
        millis(self.previous_orbit_offset_ms)
    }

    pub fn next_orbit_margin(&self) -> Time {
        millis(self.next_orbit_margin_ms)
    }

    pub fn continuous_step(&self) -> Time {
        millis(self.continuous_step_ms)
    }

    pub fn continuous_duration(&self) -> Time {
        millis(self.continuous_duration_ms)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BearingConfig {
    /// Distance in time between the two sampled positions
    pub sample_interval_ms: u64,
}

impl Default for BearingConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 10_000,
        }
    }
}

impl BearingConfig {
    pub fn sample_interval(&self) -> Time {
        millis(self.sample_interval_ms)
    }
}
