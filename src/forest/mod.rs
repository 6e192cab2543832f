// src/forest/mod.rs
//! Tree scattering and cloning.

pub mod plugin;
pub mod scatter;
pub mod tree;

pub use plugin::ForestPlugin;
