//! Tests for engine construction

use std::future::Future;

use prometheus_reactions::builders::{build_engine, build_engine_from_json};
use prometheus_reactions::config::EngineConfig;
use prometheus_reactions::core::{EmotionRegistry, ReactionError, Spawn};

#[derive(Clone)]
struct NoopSpawner;

impl Spawn for NoopSpawner {
    fn spawn<F>(&self, _fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
    }
}

#[test]
fn test_build_engine_default() {
    let engine = build_engine(
        &EngineConfig::default(),
        EmotionRegistry::default(),
        NoopSpawner,
    )
    .unwrap();
    assert!(engine.current_reaction().is_none());
    assert_eq!(engine.generation(), 0);
}

#[test]
fn test_build_engine_rejects_invalid_config() {
    let cfg = EngineConfig {
        history_capacity: 0,
        ..EngineConfig::default()
    };
    let result = build_engine(&cfg, EmotionRegistry::default(), NoopSpawner);
    assert!(matches!(result, Err(ReactionError::InvalidConfig(_))));
}

#[test]
fn test_build_engine_from_json_with_catalog() {
    let catalog = r#"{"emotions":[
        {"id":"only","name":"Only","glyph":"o","animation":"wave","color":"blue",
         "duration_ms":100,"priority":1,"triggers":["welcome"]}
    ]}"#;
    let engine = build_engine_from_json("{}", Some(catalog), NoopSpawner).unwrap();
    assert_eq!(engine.registry().len(), 1);
}

#[test]
fn test_build_engine_from_json_default_catalog() {
    let engine = build_engine_from_json(r#"{"auto_hide": false}"#, None, NoopSpawner).unwrap();
    assert!(!engine.config().auto_hide);
    assert_eq!(engine.registry().len(), EmotionRegistry::default().len());
}
