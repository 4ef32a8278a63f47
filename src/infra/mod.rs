//! Infrastructure adapters backing the scheduler state.

pub mod queue;
pub use queue::PendingQueue;
