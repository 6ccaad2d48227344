//! Brute-force pairwise collision detection
//!
//! Every unordered pair of candidates is tested once. Layers partition the
//! collision space: candidates on different layers never collide. The
//! system does not depend on the entity storage, it only needs a key, a
//! layer and a collider per candidate.

use crate::physics::collision::Collider;
use std::collections::HashMap;
use std::hash::Hash;

/// One entity taking part in collision detection
#[derive(Debug, Clone, Copy)]
pub struct CollisionCandidate<'a, K> {
    /// Identifier reported back in the collision map
    pub key: K,
    /// Collision layer
    pub layer: u32,
    /// World-space collider
    pub collider: &'a Collider,
}

/// Two candidates that overlap, in candidate order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair<K> {
    /// Earlier candidate
    pub first: K,
    /// Later candidate
    pub second: K,
}

/// Whether two layers may collide at all
pub fn layers_collide(a: u32, b: u32) -> bool {
    a == b
}

/// Tests every unordered pair `(i, j)` with `i < j`
pub fn detect_pairs<K: Copy>(candidates: &[CollisionCandidate<'_, K>]) -> Vec<CollisionPair<K>> {
    let mut pairs = Vec::new();
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if layers_collide(a.layer, b.layer) && a.collider.overlaps(b.collider) {
                pairs.push(CollisionPair {
                    first: a.key,
                    second: b.key,
                });
            }
        }
    }
    pairs
}

/// Per-candidate lists of everything it collided with this frame
#[derive(Debug, Clone)]
pub struct CollisionMap<K> {
    order: Vec<K>,
    lists: HashMap<K, Vec<K>>,
}

impl<K: Copy + Eq + Hash> CollisionMap<K> {
    /// Builds the map for one frame
    ///
    /// Each overlap is registered on both sides, so the map is symmetric.
    pub fn build(candidates: &[CollisionCandidate<'_, K>]) -> Self {
        let mut order = Vec::new();
        let mut lists: HashMap<K, Vec<K>> = HashMap::new();

        for pair in detect_pairs(candidates) {
            for (own, other) in [(pair.first, pair.second), (pair.second, pair.first)] {
                lists
                    .entry(own)
                    .or_insert_with(|| {
                        order.push(own);
                        Vec::new()
                    })
                    .push(other);
            }
        }

        // Report in candidate order rather than first-hit order.
        let position: HashMap<K, usize> = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key, i))
            .collect();
        order.sort_by_key(|key| position.get(key).copied().unwrap_or(usize::MAX));

        Self { order, lists }
    }

    /// Everything `key` collided with (empty when nothing)
    pub fn colliding_with(&self, key: K) -> &[K] {
        self.lists.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidates with a non-empty list, in candidate order
    pub fn iter(&self) -> impl Iterator<Item = (K, &[K])> + '_ {
        self.order
            .iter()
            .map(move |&key| (key, self.colliding_with(key)))
    }

    /// Number of candidates involved in at least one collision
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing collided
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
