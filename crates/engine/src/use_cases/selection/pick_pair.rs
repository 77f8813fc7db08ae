//! Pick pair use case - draws one actor and one color for a request.

use std::sync::Arc;

use actorpick_domain::{Catalog, Pair};

use crate::infrastructure::ports::RandomPort;

/// Draws a fresh (actor, color) pair from the shared catalog.
///
/// The two draws are independent uniform picks through the injected
/// [`RandomPort`]. Nothing is stored between calls.
pub struct PickPair {
    catalog: Arc<Catalog>,
    random: Arc<dyn RandomPort>,
}

impl PickPair {
    pub fn new(catalog: Arc<Catalog>, random: Arc<dyn RandomPort>) -> Self {
        Self { catalog, random }
    }

    pub fn execute(&self) -> Pair {
        let pair = self
            .catalog
            .pick_pair_with(|len| self.random.gen_index(len));
        tracing::debug!(actor = %pair.actor, color = %pair.color, "Picked pair");
        pair
    }
}
