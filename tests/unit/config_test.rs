//! Tests for configuration validation

use prometheus_reactions::config::{EngineConfig, RegistryConfig};

#[test]
fn test_engine_config_defaults() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.grace_period_ms, 2000);
    assert_eq!(cfg.inter_reaction_delay_ms, 500);
    assert_eq!(cfg.history_capacity, 50);
    assert!(cfg.auto_hide);
    assert!(cfg.message_seed.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_engine_config_invalid_capacity() {
    let cfg = EngineConfig {
        history_capacity: 0,
        ..EngineConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_engine_config_from_json_partial() {
    let cfg = EngineConfig::from_json_str(r#"{ "grace_period_ms": 0, "message_seed": 3 }"#)
        .unwrap();
    assert_eq!(cfg.grace_period_ms, 0);
    assert_eq!(cfg.message_seed, Some(3));
    assert_eq!(cfg.history_capacity, 50);
}

#[test]
fn test_engine_config_from_json_rejects_invalid() {
    assert!(EngineConfig::from_json_str(r#"{ "history_capacity": 0 }"#).is_err());
    assert!(EngineConfig::from_json_str("not json").is_err());
}

#[test]
fn test_registry_config_from_json() {
    let json = r#"{
        "emotions": [
            {
                "id": "happy",
                "name": "Happy",
                "glyph": "mascot_happy",
                "animation": "bounce",
                "color": "green",
                "duration_ms": 3000,
                "priority": 5,
                "triggers": ["task_completed"]
            }
        ]
    }"#;

    let registry = RegistryConfig::from_json_str(json)
        .unwrap()
        .into_registry()
        .unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("happy").unwrap().priority, 5);
}

#[test]
fn test_registry_config_rejects_empty_triggers() {
    let json = r#"{
        "emotions": [
            {
                "id": "blank",
                "name": "Blank",
                "glyph": "g",
                "animation": "pulse",
                "color": "grey",
                "duration_ms": 1000,
                "priority": 1,
                "triggers": []
            }
        ]
    }"#;

    let cfg = RegistryConfig::from_json_str(json).unwrap();
    assert!(cfg.into_registry().is_err());
}
