//! Keyboard input state
//!
//! The platform layer feeds key presses into an [`InputManager`]. Once per
//! frame the engine takes an immutable [`InputEvent`] snapshot of the keys
//! currently held and hands it to every behaviour.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Any other platform key code
    Other(u32),
}

/// Immutable set of keys captured at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEvent {
    keys: HashSet<KeyCode>,
}

impl InputEvent {
    /// Snapshot of the given keys
    pub fn new(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Whether `key` is in the set
    pub fn contains(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Number of keys in the set
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no key is in the set
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the keys in no particular order
    pub fn iter(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter().copied()
    }
}

impl FromIterator<KeyCode> for InputEvent {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Input manager
///
/// Tracks keys currently held and keys released since the last
/// [`InputManager::clear_released`].
#[derive(Debug, Default)]
pub struct InputManager {
    pressed: HashSet<KeyCode>,
    released: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key going down
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    /// Handle a key going up
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
        self.released.insert(key);
    }

    /// Forget keys released during the previous frame
    pub fn clear_released(&mut self) {
        self.released.clear();
    }

    /// Whether `key` is held
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether `key` was released since the last clear
    pub fn is_released(&self, key: KeyCode) -> bool {
        self.released.contains(&key)
    }

    /// Snapshot of the held keys
    pub fn pressed_keys(&self) -> InputEvent {
        InputEvent::new(self.pressed.iter().copied())
    }

    /// Snapshot of the keys released since the last clear
    pub fn released_keys(&self) -> InputEvent {
        InputEvent::new(self.released.iter().copied())
    }
}
