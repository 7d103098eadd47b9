//! Environment feedback: aggregates the organisms' energetic activity into
//! damped deltas on the planetary conditions, then smooths the result toward
//! the pre-tick values and layers a bounded tectonic oscillation on top.

use crate::config::FeedbackConfig;
use crate::energy::organism_energy;
use chemosphere_data::{
    ConditionField, MineralKind, Organism, PlanetaryConditions, PopulationTable,
};

/// Slow background oscillation applied to temperature, standing in for
/// tectonic noise. Driven by the tick counter so runs are reproducible.
#[must_use]
pub fn tectonic_pulse(tick: u64, cfg: &FeedbackConfig) -> f64 {
    (tick as f64 / cfg.drift_timescale).sin() * cfg.drift_amplitude
}

/// Computes the next planetary conditions from one tick of ecosystem
/// activity.
///
/// Each organism contributes `energy × pathway share × population share ×
/// damping`, scaled by the pathway's static impact coefficients; every field
/// is clamped to its declared range after each contribution. The aggregate
/// is then exponentially smoothed toward the pre-tick values, and dissolved
/// oxygen moves inversely to the tick's temperature delta.
#[must_use]
pub fn update_conditions(
    organisms: &[Organism],
    populations: &PopulationTable,
    conditions: &PlanetaryConditions,
    tick: u64,
    cfg: &FeedbackConfig,
) -> PlanetaryConditions {
    let mut next = *conditions;

    let total_population: u64 = populations.values().map(|&p| u64::from(p)).sum();
    // +1-style floor: an empty ecosystem divides by one, not zero
    let total = if total_population == 0 {
        1.0
    } else {
        total_population as f64
    };

    for organism in organisms {
        let energy = organism_energy(organism, conditions).max(0.0);
        let population_share =
            f64::from(populations.get(&organism.name).copied().unwrap_or(0)) / total;

        for (pathway, percentage) in organism.pathways.iter() {
            let impact = pathway.impact();
            let energy_impact = energy * (percentage / 100.0) * population_share * cfg.damping;

            next.nudge_clamped(
                ConditionField::Temperature,
                energy_impact * impact.temperature,
            );
            next.nudge_clamped(ConditionField::Pressure, energy_impact * impact.pressure);
            next.nudge_clamped(ConditionField::Ph, energy_impact * impact.ph);
            for kind in MineralKind::ALL {
                next.nudge_clamped(
                    ConditionField::Mineral(kind),
                    energy_impact * impact.minerals.get(kind),
                );
            }
        }
    }

    next.set_clamped(
        ConditionField::Temperature,
        next.temperature * cfg.temperature_smoothing
            + conditions.temperature * (1.0 - cfg.temperature_smoothing)
            + tectonic_pulse(tick, cfg),
    );
    next.set_clamped(
        ConditionField::Pressure,
        next.pressure * cfg.pressure_smoothing
            + conditions.pressure * (1.0 - cfg.pressure_smoothing),
    );
    next.set_clamped(
        ConditionField::Ph,
        next.ph * cfg.ph_smoothing + conditions.ph * (1.0 - cfg.ph_smoothing),
    );
    // Warmer water holds less oxygen; the delta is taken after smoothing.
    next.set_clamped(
        ConditionField::DissolvedOxygen,
        next.dissolved_oxygen
            - (next.temperature - conditions.temperature) * cfg.oxygen_temperature_coupling,
    );

    next
}

/// Manual override for a single condition field, with the same silent
/// clamping as the feedback path. Takes effect at the next tick.
#[must_use]
pub fn set_condition(
    conditions: &PlanetaryConditions,
    field: ConditionField,
    value: f64,
) -> PlanetaryConditions {
    let mut next = *conditions;
    next.set_clamped(field, value);
    next
}
