//! Entity identifiers

slotmap::new_key_type! {
    /// Generational handle of a game object
    ///
    /// A destroyed entity's id is never handed out again, so stale ids held
    /// in collision lists or behaviours simply stop resolving.
    pub struct EntityId;
}
