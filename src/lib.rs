//! Native Pokédex detail viewer.
//!
//! Fetches one Pokémon from PokeAPI and shows its artwork, physical
//! attributes, abilities and base stats in an egui window.

pub mod core;
pub mod gui;
pub mod persistence;
