//! Lifecycle state of an entity

use std::fmt;

/// Which of the engine's collections an entity belongs to
///
/// An entity is in exactly one state at a time. `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    /// Updated, collided and rendered every frame
    Enabled,
    /// Kept by the engine but skipped by the frame loop
    Disabled,
    /// Removed from the engine for good
    Destroyed,
}

impl EntityState {
    /// Whether the frame loop visits the entity
    pub fn is_active(self) -> bool {
        self == Self::Enabled
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}
