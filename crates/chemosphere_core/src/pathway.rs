//! Thermodynamic-style efficiency model for chemosynthetic pathways.
//!
//! All functions here are total and deterministic: the same pathway and
//! conditions always produce the same value, with no hidden randomness.

use chemosphere_data::{Minerals, PathwayKind, PlanetaryConditions};

/// Universal gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// Celsius offset to absolute temperature.
const KELVIN_OFFSET: f64 = 273.15;

/// The neutral reference point for temperature and pressure; deviations from
/// it amplify or dampen reaction energetics.
const NEUTRAL_POINT: f64 = 50.0;

/// Standard Gibbs free energy change per pathway in J/mol.
fn gibbs_baseline(pathway: PathwayKind) -> f64 {
    match pathway {
        PathwayKind::Hydrogenic => -237_000.0,
        PathwayKind::Methanogenic => -131_000.0,
        PathwayKind::DarkOxygen => -247_000.0,
    }
}

/// Baseline activation energy per pathway in J/mol.
fn activation_baseline(pathway: PathwayKind) -> f64 {
    match pathway {
        PathwayKind::Hydrogenic => 70_000.0,
        PathwayKind::Methanogenic => 55_000.0,
        PathwayKind::DarkOxygen => 60_000.0,
    }
}

/// Gibbs free energy change for `pathway` at the given temperature (°C) and
/// pressure (atm).
///
/// The baseline is scaled linearly by deviation from the neutral reference
/// point, so conditions above it amplify the magnitude and conditions below
/// dampen it. Negative values mean the reaction is thermodynamically
/// favorable.
#[must_use]
pub fn gibbs_free_energy(pathway: PathwayKind, temperature: f64, pressure: f64) -> f64 {
    gibbs_baseline(pathway)
        * (1.0 + (temperature - NEUTRAL_POINT) / 100.0)
        * (1.0 + (pressure - NEUTRAL_POINT) / 100.0)
}

/// Activation energy for `pathway` under the given mineral availability.
///
/// Each pathway is catalysed by a fixed pair of minerals; their combined
/// concentration lowers the baseline proportionally.
#[must_use]
pub fn activation_energy(pathway: PathwayKind, minerals: &Minerals) -> f64 {
    let (a, b) = pathway.relevant_minerals();
    let mineral_effect = (minerals.get(a) + minerals.get(b)) / 200.0;
    activation_baseline(pathway) * (1.0 - mineral_effect)
}

/// Arrhenius-style reaction rate for `pathway` at `temperature` (°C).
///
/// Uses the uncatalysed activation energy (zero mineral availability), so
/// the rate is a function of temperature alone. Monotonically increasing in
/// temperature; always in (0, 1].
#[must_use]
pub fn reaction_rate(pathway: PathwayKind, temperature: f64) -> f64 {
    let t_kelvin = temperature + KELVIN_OFFSET;
    let ea = activation_energy(pathway, &Minerals::ZERO);
    (-ea / (GAS_CONSTANT * t_kelvin)).exp()
}

/// Usable energy yield of one reaction unit: the neutral-condition Gibbs
/// release discharged at the current reaction rate.
fn energy_yield(pathway: PathwayKind, rate: f64) -> f64 {
    -gibbs_free_energy(pathway, NEUTRAL_POINT, NEUTRAL_POINT) * rate
}

/// Efficiency of `pathway` under the current planetary conditions.
///
/// Combines the pathway's static impact coefficients (how strongly it
/// responds to temperature and pressure deviation) with the Arrhenius yield
/// term. The result can be negative when the impact direction and the Gibbs
/// sign disagree; a pathway may be net-unfavorable under given conditions.
#[must_use]
pub fn pathway_efficiency(pathway: PathwayKind, conditions: &PlanetaryConditions) -> f64 {
    let impact = pathway.impact();
    let base_efficiency = 1.0
        + impact.temperature * (conditions.temperature - NEUTRAL_POINT) / NEUTRAL_POINT
        + impact.pressure * (conditions.pressure - NEUTRAL_POINT) / NEUTRAL_POINT;

    let rate = reaction_rate(pathway, conditions.temperature);
    base_efficiency * energy_yield(pathway, rate)
}
