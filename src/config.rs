use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Runtime settings of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Side length of the square torus in cells.
    pub grid_dims: usize,
    /// Probability of a cell being alive after randomization.
    pub fill_rate: f64,
    /// Seed of the randomization source; drawn from entropy when `None`.
    pub seed: Option<u64>,
    pub max_fps: f64,
    /// RLE file placed in the middle of the field at startup.
    pub pattern: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_dims: Self::GRID_DIMS,
            fill_rate: Self::FILL_RATE,
            seed: None,
            max_fps: Self::MAX_FPS,
            pattern: None,
        }
    }
}

impl Config {
    pub const GRID_DIMS: usize = 100;
    pub const FILL_RATE: f64 = 1. / 3.;
    pub const MAX_FPS: f64 = 30.;
    pub const FPS_RANGE: std::ops::RangeInclusive<f64> = 0.1..=1000.;

    pub fn validate(&self) -> Result<()> {
        if self.grid_dims == 0 {
            return Err(anyhow!("Grid size must be positive"));
        }
        if !(0.0..=1.0).contains(&self.fill_rate) {
            return Err(anyhow!(
                "Fill rate must lie in [0, 1], got {}",
                self.fill_rate
            ));
        }
        if !Self::FPS_RANGE.contains(&self.max_fps) {
            return Err(anyhow!(
                "Max FPS must lie in [{}, {}], got {}",
                Self::FPS_RANGE.start(),
                Self::FPS_RANGE.end(),
                self.max_fps
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.grid_dims, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        for config in [
            Config {
                grid_dims: 0,
                ..Default::default()
            },
            Config {
                fill_rate: 1.5,
                ..Default::default()
            },
            Config {
                fill_rate: f64::NAN,
                ..Default::default()
            },
            Config {
                max_fps: 0.,
                ..Default::default()
            },
            Config {
                max_fps: 1e-20,
                ..Default::default()
            },
            Config {
                max_fps: f64::INFINITY,
                ..Default::default()
            },
        ] {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }
}
