//! # Chemosphere Data
//!
//! Pure data types shared across the Chemosphere workspace: pathway and
//! species lookup tables, organism records, planetary conditions, and the
//! aggregate statistics/event types consumed by display layers.
//!
//! This crate contains no simulation logic beyond accessors and bound
//! clamping; the engines live in `chemosphere_core`.

pub mod data;

pub use data::conditions::{
    ConditionField, MineralKind, Minerals, PlanetaryConditions, MAX_POPULATION, MIN_POPULATION,
};
pub use data::organism::{Organism, PopulationTable, SpeciesKind, TrophicLevel};
pub use data::pathway::{EnvironmentalImpact, MineralImpacts, PathwayKind, PathwayMix};
pub use data::region::RegionKind;
pub use data::stats::{EcosystemStats, GenerationSnapshot, LiveEvent};
