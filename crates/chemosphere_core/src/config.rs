//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. The defaults carry the tuned constants of the feedback loop; they
//! were chosen empirically for visual stability, so overriding them can
//! break the boundedness of long runs.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! seed = 42
//! snapshot_interval = 100
//!
//! [mutation]
//! rate = 0.01
//! amount = 10.0
//!
//! [speciation]
//! chance = 0.01
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    /// RNG seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Ticks between history snapshots and snapshot events.
    pub snapshot_interval: u64,
    /// Maximum generations retained by the in-memory history.
    pub history_capacity: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            snapshot_interval: 100,
            history_capacity: 1000,
        }
    }
}

/// Stochastic pathway mutation parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MutationConfig {
    /// Per-pathway chance of a perturbation each generation.
    pub rate: f64,
    /// Half-width of the uniform perturbation in percentage points.
    pub amount: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            rate: 0.01,
            amount: 10.0,
        }
    }
}

/// Stochastic speciation parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpeciationConfig {
    /// Per-tick chance of a new organism emerging.
    pub chance: f64,
    /// Independent chance for each existing organism to join the prey list.
    pub prey_chance: f64,
    /// Base energy values are drawn from `[min_energy_value,
    /// min_energy_value + energy_value_span)`.
    pub min_energy_value: f64,
    pub energy_value_span: f64,
}

impl Default for SpeciationConfig {
    fn default() -> Self {
        Self {
            chance: 0.01,
            prey_chance: 0.3,
            min_energy_value: 10.0,
            energy_value_span: 500.0,
        }
    }
}

/// Generational growth and trophic-coupling parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GrowthConfig {
    /// Floor applied to organism energy before it feeds growth terms.
    pub energy_floor: f64,
    /// Divisor normalizing organism energy into growth potential.
    pub growth_divisor: f64,
    /// Fraction of prey biomass that supports a predator population.
    pub energy_transfer_efficiency: f64,
    /// Rate at which the prey-support gap feeds back into the population.
    pub prey_support_rate: f64,
    /// Rate at which predator-to-prey imbalance stresses the population.
    pub predation_stress_rate: f64,
    /// Biomass-recycling bonus scale for decomposers.
    pub decomposer_recycling: f64,
    /// Scale of the (1 - habitability) environmental stress term.
    pub stress_factor: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            energy_floor: 0.01,
            growth_divisor: 120.0,
            energy_transfer_efficiency: 0.1,
            prey_support_rate: 0.08,
            predation_stress_rate: 0.04,
            decomposer_recycling: 5.0,
            stress_factor: 0.15,
        }
    }
}

/// Environment feedback damping, smoothing, and drift parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeedbackConfig {
    /// Global damping constant keeping per-tick condition drift bounded.
    pub damping: f64,
    /// Weight kept from the aggregated value when smoothing temperature; the
    /// remainder is pulled from the pre-tick value.
    pub temperature_smoothing: f64,
    /// Smoothing weight for pressure.
    pub pressure_smoothing: f64,
    /// Smoothing weight for pH.
    pub ph_smoothing: f64,
    /// mg/L of dissolved oxygen lost per °C of same-tick warming.
    pub oxygen_temperature_coupling: f64,
    /// Amplitude of the tectonic background oscillation in °C.
    pub drift_amplitude: f64,
    /// Tick divisor of the oscillator phase; larger values slow the cycle.
    pub drift_timescale: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            damping: 0.002,
            temperature_smoothing: 0.93,
            pressure_smoothing: 0.95,
            ph_smoothing: 0.97,
            oxygen_temperature_coupling: 0.01,
            drift_amplitude: 0.02,
            drift_timescale: 8.0,
        }
    }
}

/// Complete simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub mutation: MutationConfig,
    pub speciation: SpeciationConfig,
    pub growth: GrowthConfig,
    pub feedback: FeedbackConfig,
}

impl SimConfig {
    /// Loads `config.toml` from the working directory, writing a default
    /// file when none exists. Malformed files fall back to defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(config) = Self::from_path(path) {
            return config;
        }
        let default = Self::default();
        if let Ok(serialized) = toml::to_string(&default) {
            let _ = fs::write(path, serialized);
        }
        default
    }

    /// Strict variant of [`SimConfig::load_from`]: surfaces IO and syntax
    /// errors instead of falling back to defaults.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = SimConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: SimConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.mutation.rate, config.mutation.rate);
        assert_eq!(parsed.feedback.damping, config.feedback.damping);
    }

    #[test]
    fn test_partial_toml_is_rejected_not_panicking() {
        // Missing sections simply fail the parse; load_from falls back.
        let parsed: Result<SimConfig, _> = toml::from_str("[mutation]\nrate = 0.5\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let error = SimConfig::from_path(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(error.to_string().contains("does-not-exist.toml"));
    }
}
