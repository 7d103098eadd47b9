//! # Chemosphere
//!
//! A population-dynamics simulation of a chemosynthetic deep-sea ecosystem:
//! organisms derive energy from competing chemical pathways, populations
//! evolve generation by generation, and their aggregate activity feeds back
//! into the shared planetary conditions.
//!
//! This crate is the in-process library consumed by a display shell. The
//! shell decides tick cadence and forwards user actions; all simulation
//! state and logic live here and in the `chemosphere_core` /
//! `chemosphere_data` crates.
//!
//! ## Example
//!
//! ```
//! use chemosphere_core::config::SimConfig;
//! use chemosphere_data::ConditionField;
//! use chemosphere_lib::model::World;
//!
//! let mut config = SimConfig::default();
//! config.world.seed = Some(42);
//! let mut world = World::new(config);
//!
//! let events = world.update();
//! world.set_condition(ConditionField::Temperature, 80.0);
//! assert!(world.conditions.in_bounds());
//! assert!(events.len() <= 3);
//! ```

pub mod model;

pub use chemosphere_core::{
    habitability, init_logging, organism_energy, pathway_efficiency, total_ecosystem_energy,
    SimConfig,
};
pub use model::World;
