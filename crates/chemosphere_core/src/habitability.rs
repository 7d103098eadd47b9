//! Habitability scoring: how well current conditions suit an organism's
//! region and species tolerances.

use chemosphere_data::{Organism, PlanetaryConditions};

/// Weight of the temperature fitness term.
const TEMPERATURE_WEIGHT: f64 = 0.5;
/// Weight of the pressure fitness term.
const PRESSURE_WEIGHT: f64 = 0.3;
/// Weight of the pH fitness term.
const PH_WEIGHT: f64 = 0.2;

/// Pressure deviation (atm) at which pressure fitness bottoms out.
const PRESSURE_TOLERANCE: f64 = 400.0;
/// pH deviation at which pH fitness bottoms out.
const PH_TOLERANCE: f64 = 7.0;

/// Fitness in [0, 1] of `temperature` against a species tolerance range.
///
/// Zero outside the range; inside, a parabola peaking at 1 at the range
/// midpoint and falling to 0 at the bounds.
#[must_use]
pub fn temperature_fitness(temperature: f64, range: (f64, f64)) -> f64 {
    let (min, max) = range;
    if temperature < min || temperature > max {
        return 0.0;
    }
    let optimum = (min + max) / 2.0;
    let deviation = (temperature - optimum).abs();
    let span = max - min;
    1.0 - (deviation / span).powi(2)
}

/// The organism's fitness score for the current tick, in [0, 1].
///
/// Global temperature and pressure are blended with the organism's region
/// baseline (simple average) before scoring; pH is scored against the region
/// baseline directly. The three terms combine under fixed weights.
#[must_use]
pub fn habitability(organism: &Organism, conditions: &PlanetaryConditions) -> f64 {
    let region = organism.region;
    let local_temperature = (conditions.temperature + region.base_temperature()) / 2.0;
    let local_pressure = (conditions.pressure + region.base_pressure()) / 2.0;

    let temperature_term =
        temperature_fitness(local_temperature, organism.species.temperature_range());
    let pressure_term = 1.0
        - ((local_pressure - region.base_pressure()).abs() / PRESSURE_TOLERANCE).clamp(0.0, 1.0);
    let ph_term = 1.0 - ((conditions.ph - region.base_ph()).abs() / PH_TOLERANCE).clamp(0.0, 1.0);

    (temperature_term * TEMPERATURE_WEIGHT
        + pressure_term * PRESSURE_WEIGHT
        + ph_term * PH_WEIGHT)
        .clamp(0.0, 1.0)
}
