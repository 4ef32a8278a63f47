//! Composition root: validate configuration and build a [`ReactionEngine`].

use crate::config::{EngineConfig, RegistryConfig};
use crate::core::{EmotionRegistry, ReactionEngine, ReactionError, Spawn};

/// Build an engine after validating its configuration.
pub fn build_engine<S>(
    cfg: &EngineConfig,
    registry: EmotionRegistry,
    spawner: S,
) -> Result<ReactionEngine<S>, ReactionError>
where
    S: Spawn + Clone,
{
    cfg.validate().map_err(ReactionError::InvalidConfig)?;
    if registry.is_empty() {
        tracing::warn!("emotion registry is empty; every trigger will be dropped");
    }
    tracing::info!(
        "reaction engine ready: {} emotions, grace {}ms, delay {}ms, history {}",
        registry.len(),
        cfg.grace_period_ms,
        cfg.inter_reaction_delay_ms,
        cfg.history_capacity
    );
    Ok(ReactionEngine::new(cfg.clone(), registry, spawner))
}

/// Build an engine from JSON documents. A missing catalog selects the built-in one.
pub fn build_engine_from_json<S>(
    engine_json: &str,
    registry_json: Option<&str>,
    spawner: S,
) -> Result<ReactionEngine<S>, ReactionError>
where
    S: Spawn + Clone,
{
    let cfg = EngineConfig::from_json_str(engine_json).map_err(ReactionError::InvalidConfig)?;
    let registry = match registry_json {
        Some(json) => RegistryConfig::from_json_str(json)?.into_registry()?,
        None => EmotionRegistry::default(),
    };
    build_engine(&cfg, registry, spawner)
}
