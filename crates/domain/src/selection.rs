//! Drawing an (actor, color) pair from a catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// One actor and one color drawn together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub actor: String,
    pub color: String,
}

impl Catalog {
    /// Draw one actor and one color.
    ///
    /// `index` is called with the list length and must return a position in
    /// `0..len`; it is called once for actors, then once for colors. The RNG
    /// lives outside the domain, so callers pass a uniform draw here.
    pub fn pick_pair_with<F>(&self, mut index: F) -> Pair
    where
        F: FnMut(usize) -> usize,
    {
        let actor = pick(self.actors(), &mut index);
        let color = pick(self.colors(), &mut index);
        Pair { actor, color }
    }
}

// Lists are non-empty, so `% len` is always defined. Wrapping keeps
// out-of-range draws inside the list.
fn pick<F>(items: &[String], index: &mut F) -> String
where
    F: FnMut(usize) -> usize,
{
    let len = items.len();
    items[index(len) % len].clone()
}
