//! The reaction scheduler: one active slot, a pending queue and the timers
//! that move reactions between them.
//!
//! Every state change happens under a single lock. Listener callbacks and
//! timer spawns are collected while the lock is held and executed after it is
//! released, so listeners are free to call back into the engine.
//!
//! A second, reentrant delivery lock is taken before the state lock and held
//! until the collected notifications have been delivered. Mutations from
//! different threads (a hide timer and a domain trigger, say) therefore reach
//! listeners in the order they were applied to the slot.
//!
//! Each promotion bumps a generation counter. Hide timers remember the
//! generation they were started for and do nothing if the slot has moved on,
//! which keeps a preempted reaction's old timer from expiring its successor.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, ReentrantMutex};

use crate::config::EngineConfig;
use crate::core::composer::MessageComposer;
use crate::core::error::AppResult;
use crate::core::history::HistoryLog;
use crate::core::reaction::{Reaction, ReactionTrigger};
use crate::core::registry::EmotionRegistry;
use crate::core::resolver::resolve;
use crate::core::subscription::{Subscription, SubscriptionBus};
use crate::infra::queue::PendingQueue;
use crate::util::serde::{Generation, ListenerId, ReactionId};

/// Abstraction for spawning timer futures on a runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// The reaction currently on screen.
#[derive(Debug, Clone)]
struct ActiveSlot {
    reaction: Reaction,
    generation: Generation,
}

/// Everything the scheduler mutates, guarded by one mutex.
#[derive(Debug)]
struct SchedulerState {
    active: Option<ActiveSlot>,
    queue: PendingQueue,
    history: HistoryLog,
    generation: Generation,
    /// Queue head popped on expiry, waiting out the inter-reaction delay.
    handoff: Option<Reaction>,
}

/// Side effects produced under the lock and run after it is released.
enum Effect {
    Notify(Option<Reaction>),
    Hide { generation: Generation, after_ms: u64 },
    Handoff { generation: Generation, after_ms: u64 },
}

struct EngineInner {
    config: EngineConfig,
    registry: EmotionRegistry,
    composer: MessageComposer,
    bus: SubscriptionBus,
    /// Serializes mutate-then-notify; reentrant for listeners that call back in.
    delivery: ReentrantMutex<()>,
    state: Mutex<SchedulerState>,
    next_id: AtomicU64,
}

/// Priority-preemptive, single-slot reaction scheduler.
///
/// Cheap to clone; clones share the same slot, queue, history and listeners.
/// Hand one clone to the producers and another to the rendering layer.
pub struct ReactionEngine<S> {
    inner: Arc<EngineInner>,
    spawner: S,
}

impl<S: Clone> Clone for ReactionEngine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            spawner: self.spawner.clone(),
        }
    }
}

impl<S> ReactionEngine<S> {
    /// Create an engine from its parts. Configuration is assumed valid; use
    /// [`crate::builders::build_engine`] to validate first.
    pub fn new(config: EngineConfig, registry: EmotionRegistry, spawner: S) -> Self {
        let composer = config
            .message_seed
            .map_or_else(MessageComposer::from_os_rng, MessageComposer::seeded);
        let state = SchedulerState {
            active: None,
            queue: PendingQueue::new(),
            history: HistoryLog::new(config.history_capacity),
            generation: 0,
            handoff: None,
        };
        Self {
            inner: Arc::new(EngineInner {
                config,
                registry,
                composer,
                bus: SubscriptionBus::new(),
                delivery: ReentrantMutex::new(()),
                state: Mutex::new(state),
                next_id: AtomicU64::new(1),
            }),
            spawner,
        }
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Emotion catalog.
    pub fn registry(&self) -> &EmotionRegistry {
        &self.inner.registry
    }

    /// Register a listener for active-slot changes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Reaction>) -> AppResult<()> + Send + Sync + 'static,
    {
        self.inner.bus.subscribe(listener)
    }

    /// Remove a listener by id.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.bus.unsubscribe(id)
    }

    /// The reaction on screen, if any.
    pub fn current_reaction(&self) -> Option<Reaction> {
        self.inner
            .state
            .lock()
            .active
            .as_ref()
            .map(|slot| slot.reaction.clone())
    }

    /// Reactions that finished their display, newest first.
    pub fn history(&self) -> Vec<Reaction> {
        self.inner.state.lock().history.snapshot()
    }

    /// Reactions waiting for the slot, in promotion order.
    pub fn pending(&self) -> Vec<Reaction> {
        self.inner.state.lock().queue.snapshot()
    }

    /// Generation of the most recent promotion.
    pub fn generation(&self) -> Generation {
        self.inner.state.lock().generation
    }

    /// Discard every pending reaction. The active slot is left alone.
    pub fn clear_queue(&self) -> usize {
        let cleared = self.inner.state.lock().queue.clear();
        tracing::debug!("cleared {} pending reactions", cleared);
        cleared
    }

    fn next_id(&self) -> ReactionId {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl<S> ReactionEngine<S>
where
    S: Spawn + Clone + Send + Sync + 'static,
{
    /// Resolve `trigger` to an emotion and schedule a reaction for it.
    ///
    /// Triggers no emotion responds to are dropped without side effects.
    /// Returns the id of the created reaction.
    pub fn trigger_reaction(&self, trigger: ReactionTrigger) -> Option<ReactionId> {
        let Some(state) = resolve(&self.inner.registry, trigger.trigger_type) else {
            tracing::debug!("no emotion responds to {}, dropping", trigger.trigger_type);
            return None;
        };
        let message = self.inner.composer.compose(trigger.trigger_type);
        let reaction = Reaction::new(
            self.next_id(),
            state,
            message,
            trigger.data,
            self.inner.config.auto_hide,
            self.inner.config.grace_period_ms,
        );
        let id = reaction.id();
        self.enqueue(reaction);
        Some(id)
    }

    /// Promote `reaction` now, preempting a lower-priority active reaction,
    /// or queue it behind everything of equal or higher priority.
    pub fn enqueue(&self, reaction: Reaction) {
        let _delivery = self.inner.delivery.lock();
        let mut effects = Vec::new();
        {
            let mut state = self.inner.state.lock();
            Self::enqueue_locked(&mut state, reaction, &mut effects);
        }
        self.run(effects);
    }

    /// Force `state_id` onto the screen immediately.
    ///
    /// Whatever was active is discarded: it is neither re-queued nor recorded
    /// in history. Unknown ids are ignored. When `message` is `None` a line is
    /// composed from the state's first trigger type.
    pub fn override_active(&self, state_id: &str, message: Option<String>) -> Option<ReactionId> {
        let Some(emotion) = self.inner.registry.get(state_id).map(Arc::clone) else {
            tracing::debug!("override for unknown emotion `{}` ignored", state_id);
            return None;
        };
        let message = message.unwrap_or_else(|| {
            emotion
                .triggers
                .first()
                .map(|t| self.inner.composer.compose(*t))
                .unwrap_or_default()
        });
        let reaction = Reaction::new(
            self.next_id(),
            emotion,
            message,
            serde_json::Value::Null,
            true,
            self.inner.config.grace_period_ms,
        );
        let id = reaction.id();

        let _delivery = self.inner.delivery.lock();
        let mut effects = Vec::new();
        {
            let mut state = self.inner.state.lock();
            if let Some(displaced) = state.active.take() {
                tracing::info!(
                    "reaction {} discarded by override to `{}`",
                    displaced.reaction.id(),
                    state_id
                );
            }
            Self::promote_locked(&mut state, reaction, &mut effects);
        }
        self.run(effects);
        Some(id)
    }

    /// Expire the active reaction now instead of waiting for its timer.
    ///
    /// Returns `false` when the slot was already empty.
    pub fn expire(&self) -> bool {
        let _delivery = self.inner.delivery.lock();
        let mut effects = Vec::new();
        let expired = {
            let mut state = self.inner.state.lock();
            let generation = state.active.as_ref().map(|slot| slot.generation);
            generation.is_some_and(|g| {
                Self::expire_locked(&mut state, g, &self.inner.config, &mut effects)
            })
        };
        self.run(effects);
        expired
    }

    fn expire_generation(&self, generation: Generation) {
        let _delivery = self.inner.delivery.lock();
        let mut effects = Vec::new();
        {
            let mut state = self.inner.state.lock();
            Self::expire_locked(&mut state, generation, &self.inner.config, &mut effects);
        }
        self.run(effects);
    }

    fn complete_handoff(&self, generation: Generation) {
        let _delivery = self.inner.delivery.lock();
        let mut effects = Vec::new();
        {
            let mut state = self.inner.state.lock();
            let Some(next) = state.handoff.take() else {
                return;
            };
            if state.generation != generation {
                tracing::debug!(
                    "slot changed owner before reaction {} could take it, rescheduling",
                    next.id()
                );
            }
            match state.active.as_ref().map(|slot| slot.reaction.priority()) {
                // it was the queue head: equal-priority arrivals stay behind it
                Some(current) if next.priority() <= current => {
                    state.queue.requeue_front(next);
                }
                _ => Self::enqueue_locked(&mut state, next, &mut effects),
            }
        }
        self.run(effects);
    }

    fn enqueue_locked(state: &mut SchedulerState, reaction: Reaction, effects: &mut Vec<Effect>) {
        let current_priority = state.active.as_ref().map(|slot| slot.reaction.priority());
        match current_priority {
            None => Self::promote_locked(state, reaction, effects),
            Some(current) if reaction.priority() > current => {
                if let Some(preempted) = state.active.take() {
                    tracing::info!(
                        "reaction {} preempted by {} (priority {} > {})",
                        preempted.reaction.id(),
                        reaction.id(),
                        reaction.priority(),
                        current
                    );
                    state.queue.requeue_front(preempted.reaction);
                }
                Self::promote_locked(state, reaction, effects);
            }
            Some(_) => {
                tracing::debug!(
                    "reaction {} queued (depth {})",
                    reaction.id(),
                    state.queue.len() + 1
                );
                state.queue.insert(reaction);
            }
        }
    }

    fn promote_locked(state: &mut SchedulerState, mut reaction: Reaction, effects: &mut Vec<Effect>) {
        state.generation += 1;
        let generation = state.generation;
        reaction.mark_shown();
        tracing::info!(
            "reaction {} promoted: {} (generation {})",
            reaction.id(),
            reaction.state().id,
            generation
        );
        effects.push(Effect::Notify(Some(reaction.clone())));
        if reaction.auto_hide() {
            effects.push(Effect::Hide {
                generation,
                after_ms: reaction.hide_after_ms(),
            });
        }
        state.active = Some(ActiveSlot {
            reaction,
            generation,
        });
    }

    fn expire_locked(
        state: &mut SchedulerState,
        generation: Generation,
        config: &EngineConfig,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let owns_slot = state
            .active
            .as_ref()
            .is_some_and(|slot| slot.generation == generation);
        if !owns_slot {
            tracing::debug!("stale hide timer for generation {} ignored", generation);
            return false;
        }
        let Some(expired) = state.active.take() else {
            return false;
        };
        tracing::info!("reaction {} expired", expired.reaction.id());
        state.history.record(expired.reaction);
        effects.push(Effect::Notify(None));

        if state.handoff.is_none() {
            if let Some(next) = state.queue.pop_front() {
                state.handoff = Some(next);
                effects.push(Effect::Handoff {
                    generation: state.generation,
                    after_ms: config.inter_reaction_delay_ms,
                });
            }
        }
        true
    }

    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify(reaction) => {
                    let failures = self.inner.bus.notify(reaction.as_ref());
                    if failures > 0 {
                        tracing::warn!("{} listener(s) failed during notification", failures);
                    }
                }
                Effect::Hide {
                    generation,
                    after_ms,
                } => {
                    let engine = self.clone();
                    self.spawner.spawn(async move {
                        tokio::time::sleep(Duration::from_millis(after_ms)).await;
                        engine.expire_generation(generation);
                    });
                }
                Effect::Handoff {
                    generation,
                    after_ms,
                } => {
                    let engine = self.clone();
                    self.spawner.spawn(async move {
                        tokio::time::sleep(Duration::from_millis(after_ms)).await;
                        engine.complete_handoff(generation);
                    });
                }
            }
        }
    }
}
