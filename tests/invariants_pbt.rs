use chemosphere_core::config::MutationConfig;
use chemosphere_core::habitability::{habitability, temperature_fitness};
use chemosphere_core::population::mutate_pathways;
use chemosphere_data::{
    ConditionField, MineralKind, Organism, PathwayMix, PlanetaryConditions, RegionKind,
    SpeciesKind,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn condition_field(index: usize, mineral: usize) -> ConditionField {
    match index % 5 {
        0 => ConditionField::Temperature,
        1 => ConditionField::Pressure,
        2 => ConditionField::Ph,
        3 => ConditionField::DissolvedOxygen,
        _ => ConditionField::Mineral(MineralKind::ALL[mineral % MineralKind::ALL.len()]),
    }
}

proptest! {
    #[test]
    fn prop_renormalize_always_sums_to_100(
        a in -500.0..500.0f64,
        b in -500.0..500.0f64,
        c in -500.0..500.0f64,
    ) {
        let mut mix = PathwayMix::new(a, b, c);
        mix.renormalize();
        prop_assert!((mix.sum() - 100.0).abs() < 1e-6);
        for (_, pct) in mix.iter() {
            prop_assert!(pct >= 0.0);
        }
    }

    #[test]
    fn prop_mutation_keeps_the_mix_valid(
        seed in 0u64..1000,
        rate in 0.0..1.0f64,
        a in 0.0..100.0f64,
        b in 0.0..100.0f64,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cfg = MutationConfig { rate, amount: 10.0 };
        let mix = PathwayMix::new(a, b, (200.0 - a - b).max(0.0));
        let mutated = mutate_pathways(&mix, &cfg, &mut rng);
        prop_assert!((mutated.sum() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn prop_set_clamped_never_leaves_declared_ranges(
        field_index in 0usize..5,
        mineral_index in 0usize..4,
        value in -1e9..1e9f64,
    ) {
        let mut conditions = PlanetaryConditions::default();
        let field = condition_field(field_index, mineral_index);
        conditions.set_clamped(field, value);
        prop_assert!(conditions.in_bounds());
        let (min, max) = field.range();
        let stored = conditions.get(field);
        prop_assert!(stored >= min && stored <= max);
    }

    #[test]
    fn prop_habitability_stays_in_unit_interval(
        temperature in 0.0..120.0f64,
        pressure in 50.0..500.0f64,
        ph in 0.0..14.0f64,
        species_index in 0usize..7,
        region_index in 0usize..3,
    ) {
        let mut conditions = PlanetaryConditions::default();
        conditions.temperature = temperature;
        conditions.pressure = pressure;
        conditions.ph = ph;
        let organism = Organism {
            name: "probe".to_string(),
            species: SpeciesKind::ALL[species_index],
            region: RegionKind::ALL[region_index],
            prey: Vec::new(),
            energy_value: 10.0,
            pathways: PathwayMix::equal_split(),
        };
        let score = habitability(&organism, &conditions);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn prop_temperature_fitness_bounded_and_zero_outside(
        temperature in -100.0..300.0f64,
        low in -50.0..100.0f64,
        span in 1.0..150.0f64,
    ) {
        let range = (low, low + span);
        let fitness = temperature_fitness(temperature, range);
        prop_assert!((0.0..=1.0).contains(&fitness));
        if temperature < range.0 || temperature > range.1 {
            prop_assert!(fitness == 0.0);
        }
    }
}
