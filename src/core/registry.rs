//! Emotion registry: the static catalog of behavior profiles.
//!
//! The registry is built once at startup and never mutated afterwards. Each
//! [`EmotionState`] names the trigger types it responds to, its priority and
//! how long it stays on screen.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::ReactionError;
use crate::util::serde::Priority;

/// Closed set of domain events that can request a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    /// A task was checked off.
    TaskCompleted,
    /// A savings or spending goal was reached.
    GoalCompleted,
    /// A daily streak hit a milestone day count.
    StreakMilestone,
    /// An achievement badge was unlocked.
    AchievementUnlocked,
    /// The budget score is healthy.
    BudgetUnder,
    /// Spending went past a budget limit.
    BudgetOver,
    /// A category's spending trend jumped.
    ExpenseSpike,
    /// The user opened the app.
    Welcome,
}

impl TriggerType {
    /// Every trigger type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::TaskCompleted,
        Self::GoalCompleted,
        Self::StreakMilestone,
        Self::AchievementUnlocked,
        Self::BudgetUnder,
        Self::BudgetOver,
        Self::ExpenseSpike,
        Self::Welcome,
    ];

    /// Wire tag for this trigger type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskCompleted => "task_completed",
            Self::GoalCompleted => "goal_completed",
            Self::StreakMilestone => "streak_milestone",
            Self::AchievementUnlocked => "achievement_unlocked",
            Self::BudgetUnder => "budget_under",
            Self::BudgetOver => "budget_over",
            Self::ExpenseSpike => "expense_spike",
            Self::Welcome => "welcome",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerType {
    type Err = ReactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ReactionError::Parse(format!("unknown trigger type `{s}`")))
    }
}

/// Animation the renderer plays while a reaction is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    /// Small vertical hop.
    Bounce,
    /// Large jump.
    Jump,
    /// Full rotation.
    Spin,
    /// Horizontal shake.
    Shake,
    /// Scale pulse.
    Pulse,
    /// Hand wave.
    Wave,
}

/// A named, statically registered behavior profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionState {
    /// Unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Glyph identifier for the renderer.
    pub glyph: String,
    /// Animation played while shown.
    pub animation: Animation,
    /// Color token.
    pub color: String,
    /// Display duration in milliseconds.
    pub duration_ms: u64,
    /// Priority; higher wins.
    pub priority: Priority,
    /// Trigger types this state responds to.
    pub triggers: Vec<TriggerType>,
}

impl EmotionState {
    /// Whether this state responds to `trigger`.
    pub fn responds_to(&self, trigger: TriggerType) -> bool {
        self.triggers.contains(&trigger)
    }

    fn validate(&self) -> Result<(), ReactionError> {
        let invalid = |reason: &str| ReactionError::InvalidEmotion {
            id: self.id.clone(),
            reason: reason.into(),
        };
        if self.id.is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if self.duration_ms == 0 {
            return Err(invalid("duration_ms must be greater than 0"));
        }
        if self.priority == 0 {
            return Err(invalid("priority must be greater than 0"));
        }
        if self.triggers.is_empty() {
            return Err(invalid("at least one trigger type is required"));
        }
        Ok(())
    }
}

/// Read-only catalog of emotion states, kept in registration order.
#[derive(Debug, Clone)]
pub struct EmotionRegistry {
    states: Vec<Arc<EmotionState>>,
}

impl EmotionRegistry {
    /// Build a registry, validating every state and rejecting duplicate ids.
    pub fn new(states: Vec<EmotionState>) -> Result<Self, ReactionError> {
        let mut seen: Vec<&str> = Vec::with_capacity(states.len());
        for state in &states {
            state.validate()?;
            if seen.contains(&state.id.as_str()) {
                return Err(ReactionError::DuplicateEmotion(state.id.clone()));
            }
            seen.push(&state.id);
        }
        Ok(Self {
            states: states.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a JSON array of emotion states and validate it.
    pub fn from_json_str(input: &str) -> Result<Self, ReactionError> {
        let states: Vec<EmotionState> =
            serde_json::from_str(input).map_err(|e| ReactionError::Parse(e.to_string()))?;
        Self::new(states)
    }

    /// Look up a state by id.
    pub fn get(&self, id: &str) -> Option<&Arc<EmotionState>> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Full catalog in registration order.
    pub fn states(&self) -> &[Arc<EmotionState>] {
        &self.states
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for EmotionRegistry {
    /// The catalog shipped with the mascot.
    fn default() -> Self {
        Self {
            states: default_catalog().into_iter().map(Arc::new).collect(),
        }
    }
}

fn state(
    id: &str,
    name: &str,
    animation: Animation,
    color: &str,
    duration_ms: u64,
    priority: Priority,
    triggers: &[TriggerType],
) -> EmotionState {
    EmotionState {
        id: id.into(),
        name: name.into(),
        glyph: format!("mascot_{id}"),
        animation,
        color: color.into(),
        duration_ms,
        priority,
        triggers: triggers.to_vec(),
    }
}

/// Built-in emotion states.
pub fn default_catalog() -> Vec<EmotionState> {
    use TriggerType as T;
    vec![
        state("happy", "Happy", Animation::Bounce, "green", 3000, 5, &[T::TaskCompleted]),
        state(
            "excited",
            "Excited",
            Animation::Jump,
            "orange",
            4000,
            8,
            &[T::StreakMilestone, T::AchievementUnlocked],
        ),
        state(
            "celebrating",
            "Celebrating",
            Animation::Spin,
            "gold",
            5000,
            10,
            &[T::GoalCompleted, T::AchievementUnlocked],
        ),
        state("proud", "Proud", Animation::Pulse, "blue", 3000, 6, &[T::BudgetUnder]),
        state(
            "worried",
            "Worried",
            Animation::Shake,
            "red",
            4000,
            7,
            &[T::BudgetOver, T::ExpenseSpike],
        ),
        state("waving", "Waving", Animation::Wave, "purple", 2500, 2, &[T::Welcome]),
    ]
}
