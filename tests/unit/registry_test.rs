//! Tests for the emotion catalog and trigger resolution

use prometheus_reactions::core::{resolve, EmotionRegistry, TriggerType};

#[test]
fn test_default_catalog_lookup() {
    let registry = EmotionRegistry::default();
    assert!(!registry.is_empty());
    let celebrating = registry.get("celebrating").unwrap();
    assert!(celebrating.responds_to(TriggerType::GoalCompleted));
    assert!(registry.get("unknown").is_none());
}

#[test]
fn test_default_catalog_resolution() {
    let registry = EmotionRegistry::default();
    let cases = [
        (TriggerType::TaskCompleted, "happy"),
        (TriggerType::StreakMilestone, "excited"),
        (TriggerType::AchievementUnlocked, "celebrating"),
        (TriggerType::BudgetUnder, "proud"),
        (TriggerType::ExpenseSpike, "worried"),
        (TriggerType::Welcome, "waving"),
    ];
    for (trigger, expected) in cases {
        assert_eq!(resolve(&registry, trigger).unwrap().id, expected, "{trigger}");
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let registry = EmotionRegistry::default();
    let first = resolve(&registry, TriggerType::AchievementUnlocked).unwrap();
    for _ in 0..100 {
        let again = resolve(&registry, TriggerType::AchievementUnlocked).unwrap();
        assert_eq!(again.id, first.id);
    }
}

#[test]
fn test_every_trigger_tag_parses() {
    for t in TriggerType::ALL {
        assert_eq!(t.to_string().parse::<TriggerType>().unwrap(), t);
    }
}

#[test]
fn test_registry_from_json_array() {
    let json = r#"[
        {"id":"a","name":"A","glyph":"a","animation":"spin","color":"red",
         "duration_ms":10,"priority":1,"triggers":["welcome"]},
        {"id":"a","name":"A2","glyph":"a","animation":"spin","color":"red",
         "duration_ms":10,"priority":2,"triggers":["welcome"]}
    ]"#;
    assert!(EmotionRegistry::from_json_str(json).is_err());
}
