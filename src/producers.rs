//! Domain-integration adapters.
//!
//! Producers own the threshold logic and hand the engine only triggers that
//! should actually fire. Each `*_trigger` function is pure; [`DomainFeedback`]
//! wires them to any [`TriggerSink`].

use serde_json::json;

use crate::core::{ReactionEngine, ReactionTrigger, Spawn, TriggerType};
use crate::util::serde::ReactionId;

/// Streak lengths, in days, that earn a reaction.
pub const STREAK_MILESTONES: [u32; 5] = [7, 14, 30, 60, 100];

/// Minimum budget score for a "budget under" reaction.
pub const BUDGET_SCORE_THRESHOLD: u8 = 80;

/// Trend percentage a category must exceed to count as a spike.
pub const EXPENSE_SPIKE_THRESHOLD_PCT: f64 = 50.0;

/// Anything that accepts typed triggers.
pub trait TriggerSink {
    /// Hand over a trigger; returns the id of the reaction it produced, if any.
    fn submit(&self, trigger: ReactionTrigger) -> Option<ReactionId>;
}

impl<S> TriggerSink for ReactionEngine<S>
where
    S: Spawn + Clone + Send + Sync + 'static,
{
    fn submit(&self, trigger: ReactionTrigger) -> Option<ReactionId> {
        self.trigger_reaction(trigger)
    }
}

/// Trigger for a completed task.
pub fn task_trigger(total_completed: u32) -> ReactionTrigger {
    ReactionTrigger::with_data(
        TriggerType::TaskCompleted,
        json!({ "total_completed": total_completed }),
    )
}

/// Trigger for a reached goal.
pub fn goal_trigger(goal: &str) -> ReactionTrigger {
    ReactionTrigger::with_data(TriggerType::GoalCompleted, json!({ "goal": goal }))
}

/// Trigger for an unlocked achievement.
pub fn achievement_trigger(id: &str, title: &str) -> ReactionTrigger {
    ReactionTrigger::with_data(
        TriggerType::AchievementUnlocked,
        json!({ "achievement": id, "title": title }),
    )
}

/// Fires only when `days` is one of [`STREAK_MILESTONES`].
pub fn streak_trigger(days: u32) -> Option<ReactionTrigger> {
    STREAK_MILESTONES.contains(&days).then(|| {
        ReactionTrigger::with_data(TriggerType::StreakMilestone, json!({ "days": days }))
    })
}

/// Fires when the budget score reaches [`BUDGET_SCORE_THRESHOLD`].
pub fn budget_score_trigger(score: u8) -> Option<ReactionTrigger> {
    (score >= BUDGET_SCORE_THRESHOLD)
        .then(|| ReactionTrigger::with_data(TriggerType::BudgetUnder, json!({ "score": score })))
}

/// Fires when spending in `category` is above its limit.
pub fn over_budget_trigger(category: &str, spent: f64, limit: f64) -> Option<ReactionTrigger> {
    (spent > limit).then(|| {
        ReactionTrigger::with_data(
            TriggerType::BudgetOver,
            json!({ "category": category, "spent": spent, "limit": limit }),
        )
    })
}

/// Fires when the category trend exceeds [`EXPENSE_SPIKE_THRESHOLD_PCT`].
pub fn expense_spike_trigger(category: &str, trend_pct: f64) -> Option<ReactionTrigger> {
    (trend_pct > EXPENSE_SPIKE_THRESHOLD_PCT).then(|| {
        ReactionTrigger::with_data(
            TriggerType::ExpenseSpike,
            json!({ "category": category, "trend_pct": trend_pct }),
        )
    })
}

/// Forwards domain events to a sink, applying the thresholds above.
pub struct DomainFeedback<T> {
    sink: T,
}

impl<T: TriggerSink> DomainFeedback<T> {
    /// Wrap a sink, typically a clone of the engine.
    pub const fn new(sink: T) -> Self {
        Self { sink }
    }

    /// A task was completed.
    pub fn task_completed(&self, total_completed: u32) -> Option<ReactionId> {
        self.sink.submit(task_trigger(total_completed))
    }

    /// A goal was reached.
    pub fn goal_completed(&self, goal: &str) -> Option<ReactionId> {
        self.sink.submit(goal_trigger(goal))
    }

    /// An achievement was unlocked.
    pub fn achievement_unlocked(&self, id: &str, title: &str) -> Option<ReactionId> {
        self.sink.submit(achievement_trigger(id, title))
    }

    /// The streak counter moved to `days`.
    pub fn streak(&self, days: u32) -> Option<ReactionId> {
        streak_trigger(days).and_then(|t| self.sink.submit(t))
    }

    /// A budget score was computed.
    pub fn budget_score(&self, score: u8) -> Option<ReactionId> {
        budget_score_trigger(score).and_then(|t| self.sink.submit(t))
    }

    /// Spending for a category was updated.
    pub fn spending(&self, category: &str, spent: f64, limit: f64) -> Option<ReactionId> {
        over_budget_trigger(category, spent, limit).and_then(|t| self.sink.submit(t))
    }

    /// A category's month-over-month trend was computed.
    pub fn expense_trend(&self, category: &str, trend_pct: f64) -> Option<ReactionId> {
        expense_spike_trigger(category, trend_pct).and_then(|t| self.sink.submit(t))
    }

    /// The wrapped sink.
    pub const fn sink(&self) -> &T {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    /// Accepts everything and remembers what it was handed.
    #[derive(Default)]
    struct RecordingSink {
        seen: Mutex<Vec<ReactionTrigger>>,
    }

    impl RecordingSink {
        fn types(&self) -> Vec<TriggerType> {
            self.seen.lock().iter().map(|t| t.trigger_type).collect()
        }
    }

    impl TriggerSink for RecordingSink {
        fn submit(&self, trigger: ReactionTrigger) -> Option<ReactionId> {
            let mut seen = self.seen.lock();
            seen.push(trigger);
            Some(seen.len() as ReactionId)
        }
    }

    #[test]
    fn test_feedback_forwards_only_past_thresholds() {
        let feedback = DomainFeedback::new(RecordingSink::default());

        assert_eq!(feedback.goal_completed("vacation"), Some(1));
        assert_eq!(feedback.achievement_unlocked("saver", "Super saver"), Some(2));
        assert!(feedback.spending("rent", 900.0, 1000.0).is_none());
        assert_eq!(feedback.spending("rent", 1200.0, 1000.0), Some(3));
        assert!(feedback.expense_trend("food", 50.0).is_none());
        assert_eq!(feedback.expense_trend("food", 62.5), Some(4));
        assert!(feedback.streak(8).is_none());
        assert!(feedback.budget_score(40).is_none());

        let sink = feedback.sink();
        assert_eq!(
            sink.types(),
            vec![
                TriggerType::GoalCompleted,
                TriggerType::AchievementUnlocked,
                TriggerType::BudgetOver,
                TriggerType::ExpenseSpike,
            ]
        );
        let seen = sink.seen.lock();
        assert_eq!(seen[0].data["goal"], "vacation");
        assert_eq!(seen[1].data["title"], "Super saver");
        assert_eq!(seen[2].data["category"], "rent");
        assert_eq!(seen[3].data["trend_pct"], 62.5);
    }

    #[test]
    fn test_streak_only_on_milestones() {
        for days in 0..=120 {
            assert_eq!(streak_trigger(days).is_some(), STREAK_MILESTONES.contains(&days));
        }
        assert_eq!(streak_trigger(30).unwrap().data["days"], 30);
    }

    #[test]
    fn test_budget_score_threshold() {
        assert!(budget_score_trigger(79).is_none());
        assert!(budget_score_trigger(80).is_some());
        assert!(budget_score_trigger(100).is_some());
    }

    #[test]
    fn test_expense_spike_is_strict() {
        assert!(expense_spike_trigger("food", 50.0).is_none());
        let trigger = expense_spike_trigger("food", 50.5).unwrap();
        assert_eq!(trigger.trigger_type, TriggerType::ExpenseSpike);
        assert_eq!(trigger.data["category"], "food");
    }

    #[test]
    fn test_over_budget() {
        assert!(over_budget_trigger("rent", 100.0, 100.0).is_none());
        assert!(over_budget_trigger("rent", 100.01, 100.0).is_some());
    }
}
