//! Organism bioenergetics: the usable energy an organism extracts from its
//! pathway mix under the current planetary conditions.

use crate::pathway::pathway_efficiency;
use chemosphere_data::{Organism, PlanetaryConditions};

/// Total usable energy for `organism` under `conditions`.
///
/// Sums `energy_value × share × efficiency` over every pathway in the mix.
/// No bounds are enforced here; callers floor the result at a small positive
/// epsilon before using it as a divisor or growth multiplier.
#[must_use]
pub fn organism_energy(organism: &Organism, conditions: &PlanetaryConditions) -> f64 {
    organism
        .pathways
        .iter()
        .map(|(pathway, percentage)| {
            organism.energy_value * (percentage / 100.0) * pathway_efficiency(pathway, conditions)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemosphere_data::{PathwayKind, PathwayMix, RegionKind, SpeciesKind};

    fn pure_hydrogenic() -> Organism {
        Organism {
            name: "HydroThermus".to_string(),
            species: SpeciesKind::HydroThermus,
            region: RegionKind::VolcanicOases,
            prey: Vec::new(),
            energy_value: 10.0,
            pathways: PathwayMix::new(100.0, 0.0, 0.0),
        }
    }

    #[test]
    fn test_single_pathway_energy_matches_efficiency() {
        let organism = pure_hydrogenic();
        let conditions = PlanetaryConditions::default();
        let expected = 10.0 * pathway_efficiency(PathwayKind::Hydrogenic, &conditions);
        assert_eq!(organism_energy(&organism, &conditions), expected);
    }

    #[test]
    fn test_mixed_pathways_weight_each_efficiency() {
        let mut organism = pure_hydrogenic();
        organism.pathways = PathwayMix::new(60.0, 40.0, 0.0);
        let conditions = PlanetaryConditions::default();
        let expected = 10.0
            * (0.6 * pathway_efficiency(PathwayKind::Hydrogenic, &conditions)
                + 0.4 * pathway_efficiency(PathwayKind::Methanogenic, &conditions));
        let actual = organism_energy(&organism, &conditions);
        assert!((actual - expected).abs() < 1e-12 * expected.abs().max(1.0));
    }

    #[test]
    fn test_energy_scales_with_base_value() {
        let mut organism = pure_hydrogenic();
        let conditions = PlanetaryConditions::default();
        let base = organism_energy(&organism, &conditions);
        organism.energy_value = 20.0;
        let doubled = organism_energy(&organism, &conditions);
        assert!((doubled - 2.0 * base).abs() < 1e-12 * base.abs().max(1.0));
    }
}
