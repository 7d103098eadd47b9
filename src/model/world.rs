use chemosphere_core::config::SimConfig;
use chemosphere_core::history::History;
use chemosphere_core::{feedback, lifecycle, metrics, population};
use chemosphere_data::{
    ConditionField, EcosystemStats, GenerationSnapshot, LiveEvent, Organism,
    PlanetaryConditions, PopulationTable, MIN_POPULATION,
};
use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

fn default_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0)
}

/// The stateful driver facade over the pure engines.
///
/// Owns one consistent snapshot of the ecosystem and advances it one atomic
/// tick at a time. The external driver decides cadence; pausing is simply
/// not calling [`World::update`], and manual condition overrides applied
/// between ticks take effect at the start of the next one.
#[derive(Serialize, Deserialize)]
pub struct World {
    pub config: SimConfig,
    pub organisms: Vec<Organism>,
    pub populations: PopulationTable,
    pub conditions: PlanetaryConditions,
    pub tick: u64,
    #[serde(skip, default = "default_rng")]
    pub rng: ChaCha8Rng,
    #[serde(skip, default)]
    pub history: History,
    #[serde(skip, default)]
    floor_alerted: bool,
}

impl World {
    /// Creates a world from the fixed seed data, drawing starting
    /// populations from the configured seed (or entropy when unset).
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        let mut rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (organisms, populations, conditions) = lifecycle::initial_state(&mut rng);
        let history = History::new(config.world.history_capacity);
        Self {
            config,
            organisms,
            populations,
            conditions,
            tick: 0,
            rng,
            history,
            floor_alerted: false,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Runs the generational population step, rolls the speciation chance,
    /// and feeds the resulting activity back into the planetary conditions.
    /// Returns the live events emitted this tick.
    pub fn update(&mut self) -> Vec<LiveEvent> {
        self.tick += 1;
        let mut events = Vec::new();

        let outcome = population::step(
            &self.organisms,
            &self.populations,
            &self.conditions,
            &self.config,
            &mut self.rng,
        );
        self.organisms = outcome.organisms;
        self.populations = outcome.populations;

        if let Some(speciated) = population::maybe_speciate(
            &self.organisms,
            &self.populations,
            self.config.speciation.chance,
            &self.config.speciation,
            &mut self.rng,
        ) {
            tracing::info!(
                name = %speciated.organism.name,
                species = speciated.organism.species.name(),
                region = speciated.organism.region.name(),
                "Speciation"
            );
            events.push(LiveEvent::Speciation {
                name: speciated.organism.name.clone(),
                species: speciated.organism.species.name().to_string(),
                region: speciated.organism.region.name().to_string(),
                population: speciated.population,
                tick: self.tick,
                timestamp: Utc::now().to_rfc3339(),
            });
            self.populations
                .insert(speciated.organism.name.clone(), speciated.population);
            self.organisms.push(speciated.organism);
        }

        self.conditions = feedback::update_conditions(
            &self.organisms,
            &self.populations,
            &self.conditions,
            self.tick,
            &self.config.feedback,
        );

        let at_floor = !self.organisms.is_empty()
            && self.populations.values().all(|&p| p == MIN_POPULATION);
        if at_floor && !self.floor_alerted {
            events.push(LiveEvent::EcoAlert {
                message: "Every population has collapsed to the floor".to_string(),
                tick: self.tick,
                timestamp: Utc::now().to_rfc3339(),
            });
        }
        self.floor_alerted = at_floor;

        if self.tick % self.config.world.snapshot_interval.max(1) == 0 {
            let stats = self.stats();
            metrics::log_generation(&stats);
            self.history.record(GenerationSnapshot {
                tick: self.tick,
                populations: self.populations.clone(),
                conditions: self.conditions,
                total_energy: stats.total_energy,
            });
            events.push(LiveEvent::Snapshot {
                tick: self.tick,
                stats,
                timestamp: Utc::now().to_rfc3339(),
            });
        }

        for event in &events {
            self.history.push_event(event.clone());
        }
        events
    }

    /// Manual override of a single planetary-condition field, silently
    /// clamped to its declared range. Visible to the next tick.
    pub fn set_condition(&mut self, field: ConditionField, value: f64) {
        self.conditions = feedback::set_condition(&self.conditions, field, value);
    }

    /// Current macro statistics for display.
    #[must_use]
    pub fn stats(&self) -> EcosystemStats {
        metrics::ecosystem_stats(
            self.tick,
            &self.organisms,
            &self.populations,
            &self.conditions,
        )
    }

    /// Total ecosystem energy under the current conditions.
    #[must_use]
    pub fn total_energy(&self) -> f64 {
        metrics::total_ecosystem_energy(&self.organisms, &self.populations, &self.conditions)
    }
}
