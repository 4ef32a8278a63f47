//! Configuration models for the engine and its emotion catalog.

pub mod engine;

pub use engine::{EngineConfig, RegistryConfig};
