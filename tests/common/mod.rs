use chemosphere_core::config::SimConfig;
use chemosphere_data::{Organism, PathwayMix, RegionKind, SpeciesKind};
use chemosphere_lib::model::World;

/// Builds worlds with a controlled organism set instead of the fixed seed
/// list, so tests can isolate single trophic interactions.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    organisms: Vec<(Organism, u32)>,
    keep_seed_list: bool,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.seed = Some(0);
        // Keep stochastic machinery quiet unless a test opts back in.
        config.mutation.rate = 0.0;
        config.speciation.chance = 0.0;
        Self {
            config,
            organisms: Vec::new(),
            keep_seed_list: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_organism(mut self, organism: Organism, population: u32) -> Self {
        self.organisms.push((organism, population));
        self
    }

    /// Keeps the fixed seed list instead of replacing it.
    pub fn with_seed_list(mut self) -> Self {
        self.keep_seed_list = true;
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config);
        if !self.keep_seed_list {
            world.organisms.clear();
            world.populations.clear();
        }
        for (organism, population) in self.organisms {
            world.populations.insert(organism.name.clone(), population);
            world.organisms.push(organism);
        }
        world
    }
}

#[allow(dead_code)]
pub struct OrganismBuilder {
    organism: Organism,
}

#[allow(dead_code)]
impl OrganismBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            organism: Organism {
                name: name.to_string(),
                species: SpeciesKind::MethanoBubbler,
                region: RegionKind::AbyssalPlains,
                prey: Vec::new(),
                energy_value: 20.0,
                pathways: PathwayMix::new(20.0, 60.0, 20.0),
            },
        }
    }

    pub fn species(mut self, species: SpeciesKind) -> Self {
        self.organism.species = species;
        self
    }

    pub fn region(mut self, region: RegionKind) -> Self {
        self.organism.region = region;
        self
    }

    pub fn prey(mut self, prey: &[&str]) -> Self {
        self.organism.prey = prey.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn energy(mut self, energy_value: f64) -> Self {
        self.organism.energy_value = energy_value;
        self
    }

    pub fn pathways(mut self, hydrogenic: f64, methanogenic: f64, dark_oxygen: f64) -> Self {
        self.organism.pathways = PathwayMix::new(hydrogenic, methanogenic, dark_oxygen);
        self
    }

    pub fn build(self) -> Organism {
        self.organism
    }
}
