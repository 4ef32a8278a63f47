//! Runtime adapters and the untyped API surface.

pub mod api;
pub mod tokio_spawner;

pub use api::{health, snapshot, submit_trigger, EngineSnapshot, Health, TriggerRequest};
pub use tokio_spawner::TokioSpawner;
