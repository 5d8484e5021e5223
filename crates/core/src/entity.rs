//! Entities: records an aggregate keeps by identity.

/// A record that an aggregate stores under its own identifier.
///
/// A menu item is keyed by its name, so a stand's catalog entry and the item it
/// holds can never disagree about that key.
pub trait Entity {
    /// Key the owning aggregate files the entity under.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
