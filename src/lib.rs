//! # Prometheus Reactions
//!
//! A priority-preemptive scheduler for transient UI notifications.
//!
//! Domain code (budget analysis, goal tracking, streak counters, achievement
//! unlocks) raises typed triggers. The engine resolves each trigger to an
//! emotion from a static catalog and turns the resulting stream into a
//! single-slot sequence of time-boxed reactions for the mascot renderer.
//!
//! ## Key Features
//!
//! - **Single Active Slot**: At most one reaction is on screen at any instant
//! - **Preemption**: A higher-priority reaction replaces the active one, which goes back to the head of the queue
//! - **Stable Queueing**: Pending reactions are ordered by priority, FIFO within a priority
//! - **Automatic Expiry**: Each reaction hides after its emotion's duration plus a grace period
//! - **Stale-Timer Safety**: A generation counter keeps superseded hide timers from touching the slot
//! - **Isolated Listeners**: A failing renderer never blocks the others
//! - **Fail-Closed**: Unknown triggers and emotion ids are silently ignored
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prometheus_reactions::builders::build_engine;
//! use prometheus_reactions::config::EngineConfig;
//! use prometheus_reactions::core::{EmotionRegistry, ReactionTrigger, TriggerType};
//! use prometheus_reactions::runtime::TokioSpawner;
//!
//! let engine = build_engine(
//!     &EngineConfig::default(),
//!     EmotionRegistry::default(),
//!     TokioSpawner::current(),
//! )?;
//!
//! let _sub = engine.subscribe(|reaction| {
//!     match reaction {
//!         Some(r) => println!("{}: {}", r.state().name, r.message()),
//!         None => println!("(hidden)"),
//!     }
//!     Ok(())
//! });
//!
//! engine.trigger_reaction(ReactionTrigger::new(TriggerType::TaskCompleted));
//! engine.override_active("celebrating", Some("Welcome back!".into()));
//! ```
//!
//! For complete examples, see:
//! - `tests/reaction_engine_test.rs` - Timer-driven integration tests

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: registry, resolver, composer, engine.
pub mod core;
/// Configuration models for the engine and its catalog.
pub mod config;
/// Builders to construct the engine from configuration.
pub mod builders;
/// Infrastructure adapters backing scheduler state.
pub mod infra;
/// Adapters that turn domain metrics into triggers.
pub mod producers;
/// Runtime adapters and API surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
