//! Shared identifier and ordering types.

/// Unique, creation-ordered reaction identifier.
pub type ReactionId = u64;

/// Emotion priority. Higher wins; zero is rejected at registry construction.
pub type Priority = u32;

/// Identity of a registered listener on the subscription bus.
pub type ListenerId = u64;

/// Monotonic tag bumped on every promotion into the active slot.
pub type Generation = u64;
