//! Message composition for reactions.
//!
//! Each trigger type owns a small fixed pool of candidate lines and one is
//! picked uniformly at random. The pick itself is a pure function over an
//! injected [`Rng`] so it can be driven deterministically.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::registry::TriggerType;

/// Line used for trigger types without a pool.
pub const DEFAULT_MESSAGE: &str = "Hey there!";

/// Candidate lines for `trigger`. Empty for unmapped trigger types.
pub const fn message_pool(trigger: TriggerType) -> &'static [&'static str] {
    match trigger {
        TriggerType::TaskCompleted => &[
            "Nice work!",
            "One more done!",
            "Task crushed!",
            "Keep it rolling!",
        ],
        TriggerType::GoalCompleted => &[
            "Goal reached!",
            "You did it!",
            "That goal is history!",
        ],
        TriggerType::StreakMilestone => &[
            "Look at that streak!",
            "You're on fire!",
            "Consistency pays off!",
        ],
        TriggerType::AchievementUnlocked => &[
            "Achievement unlocked!",
            "New badge earned!",
            "Another one for the shelf!",
        ],
        TriggerType::BudgetUnder => &[
            "Your budget looks great!",
            "Smart spending!",
            "Right on track!",
        ],
        TriggerType::BudgetOver => &[
            "Careful, you went over budget.",
            "That budget needs some attention.",
        ],
        TriggerType::ExpenseSpike => &[
            "Spending jumped here.",
            "Whoa, that category spiked!",
            "Worth a second look at these expenses.",
        ],
        TriggerType::Welcome => &[],
    }
}

/// Pick a message for `trigger` using `rng`.
pub fn compose_message<R: Rng + ?Sized>(trigger: TriggerType, rng: &mut R) -> &'static str {
    let pool = message_pool(trigger);
    if pool.is_empty() {
        return DEFAULT_MESSAGE;
    }
    pool[rng.random_range(0..pool.len())]
}

/// Thread-safe composer owning its own randomness source.
pub struct MessageComposer {
    rng: Mutex<StdRng>,
}

impl MessageComposer {
    /// Composer with a fixed seed; identical seeds yield identical sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Composer seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Compose a message for `trigger`.
    pub fn compose(&self, trigger: TriggerType) -> String {
        let mut rng = self.rng.lock();
        compose_message(trigger, &mut *rng).to_owned()
    }
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
