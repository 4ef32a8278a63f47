//! Tests for the untyped API surface

use std::future::Future;

use prometheus_reactions::builders::build_engine;
use prometheus_reactions::config::EngineConfig;
use prometheus_reactions::core::{EmotionRegistry, ReactionEngine, Spawn};
use prometheus_reactions::runtime::{health, snapshot, submit_trigger, TriggerRequest};

#[derive(Clone)]
struct NoopSpawner;

impl Spawn for NoopSpawner {
    fn spawn<F>(&self, _fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
    }
}

fn engine() -> ReactionEngine<NoopSpawner> {
    build_engine(
        &EngineConfig::default(),
        EmotionRegistry::default(),
        NoopSpawner,
    )
    .unwrap()
}

#[test]
fn test_submit_known_tag() {
    let engine = engine();
    let req: TriggerRequest =
        serde_json::from_str(r#"{"type":"goal_completed","data":{"goal":"emergency fund"}}"#)
            .unwrap();
    let id = submit_trigger(&engine, req).unwrap();

    let current = engine.current_reaction().unwrap();
    assert_eq!(current.id(), id);
    assert_eq!(current.state().id, "celebrating");
    assert_eq!(current.context()["goal"], "emergency fund");
}

#[test]
fn test_submit_unknown_tag_dropped() {
    let engine = engine();
    let req: TriggerRequest = serde_json::from_str(r#"{"type":"unknown_event"}"#).unwrap();
    assert!(submit_trigger(&engine, req).is_none());
    assert!(engine.current_reaction().is_none());
}

#[test]
fn test_snapshot_serializes() {
    let engine = engine();
    let req: TriggerRequest = serde_json::from_str(r#"{"type":"welcome"}"#).unwrap();
    submit_trigger(&engine, req);
    let req: TriggerRequest = serde_json::from_str(r#"{"type":"welcome"}"#).unwrap();
    submit_trigger(&engine, req);

    let snap = snapshot(&engine);
    assert_eq!(snap.pending.len(), 1);
    assert_eq!(snap.generation, 1);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["current"]["state"]["id"], "waving");
    assert_eq!(json["current"]["message"], "Hey there!");
    assert_eq!(json["current"]["shown"], true);
}

#[test]
fn test_health() {
    let engine = engine();
    let h = health(&engine);
    assert!(h.ok);
    assert_eq!(h.emotions, 6);
}
