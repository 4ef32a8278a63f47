//! Tests for message composition

use prometheus_reactions::core::composer::message_pool;
use prometheus_reactions::core::{compose_message, MessageComposer, TriggerType, DEFAULT_MESSAGE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_every_message_is_non_empty_and_from_pool() {
    let mut rng = StdRng::seed_from_u64(11);
    for t in TriggerType::ALL {
        for _ in 0..16 {
            let msg = compose_message(t, &mut rng);
            assert!(!msg.is_empty());
            let pool = message_pool(t);
            assert!(pool.is_empty() || pool.contains(&msg), "{t}: {msg}");
        }
    }
}

#[test]
fn test_fallback_is_deterministic() {
    let composer = MessageComposer::from_os_rng();
    assert_eq!(composer.compose(TriggerType::Welcome), DEFAULT_MESSAGE);
}

#[test]
fn test_pool_choice_covers_candidates() {
    let mut rng = StdRng::seed_from_u64(5);
    let pool = message_pool(TriggerType::TaskCompleted);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(compose_message(TriggerType::TaskCompleted, &mut rng));
    }
    assert_eq!(seen.len(), pool.len());
}
