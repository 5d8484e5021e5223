//! Aggregate root trait for the stateful domain models.

/// Aggregate root marker + minimal interface.
///
/// Kept small so each module decides how it models state transitions. The
/// aggregate owns its children; callers only reach them through it.
pub trait AggregateRoot {
    /// Aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped by exactly one per committed mutation of the aggregate's history.
    fn version(&self) -> u64;
}
