mod common;

use chemosphere_data::{SpeciesKind, MAX_POPULATION};
use common::{OrganismBuilder, WorldBuilder};

#[test]
fn test_consumer_collapses_without_prey_support() {
    let consumer = OrganismBuilder::new("hunter")
        .species(SpeciesKind::OxyNox)
        .prey(&["vanished"])
        .build();
    let mut world = WorldBuilder::new().with_organism(consumer, 500).build();

    world.update();
    let after_one = world.populations["hunter"];
    assert!(after_one < 500, "unsupported consumer must decline");

    for _ in 0..100 {
        world.update();
    }
    assert!(world.populations["hunter"] < after_one);
}

#[test]
fn test_consumer_grows_on_abundant_prey() {
    let producer = OrganismBuilder::new("mat")
        .species(SpeciesKind::MethanoBubbler)
        .build();
    let consumer = OrganismBuilder::new("grazer")
        .species(SpeciesKind::OxyNox)
        .prey(&["mat"])
        .build();
    let mut world = WorldBuilder::new()
        .with_organism(producer, 1000)
        .with_organism(consumer, 10)
        .build();

    world.update();
    assert!(
        world.populations["grazer"] > 10,
        "a small consumer over a full prey base must grow"
    );
}

#[test]
fn test_predation_stress_caps_predator_overshoot() {
    // A predator population far above its prey base loses more to
    // predation stress than the prey-support term can replace.
    let producer = OrganismBuilder::new("mat")
        .species(SpeciesKind::MethanoBubbler)
        .build();
    let predator = OrganismBuilder::new("apex")
        .species(SpeciesKind::TwilightHunter)
        .prey(&["mat"])
        .build();
    let mut world = WorldBuilder::new()
        .with_organism(producer, 20)
        .with_organism(predator, 800)
        .build();

    world.update();
    assert!(world.populations["apex"] < 800);
}

#[test]
fn test_organism_records_survive_population_collapse() {
    let consumer = OrganismBuilder::new("doomed")
        .species(SpeciesKind::AbyssalSiphon)
        .prey(&["nothing"])
        .build();
    let mut world = WorldBuilder::new().with_organism(consumer, 40).build();

    for _ in 0..500 {
        world.update();
    }
    // The record persists at the floor; it is never deleted.
    assert_eq!(world.organisms.len(), 1);
    assert_eq!(world.populations["doomed"], 0);
}

#[test]
fn test_seeded_ecosystem_keeps_populations_in_declared_bounds() {
    let mut world = WorldBuilder::new()
        .with_seed_list()
        .with_seed(2024)
        .with_config(|c| {
            c.mutation.rate = 0.01;
            c.speciation.chance = 0.01;
        })
        .build();

    for _ in 0..1000 {
        world.update();
        for (name, &count) in &world.populations {
            assert!(
                count <= MAX_POPULATION,
                "{name} exceeded the ceiling: {count}"
            );
        }
    }
}
