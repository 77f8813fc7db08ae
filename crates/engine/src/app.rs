//! Application state and composition.

use std::sync::Arc;

use actorpick_domain::Catalog;

use crate::infrastructure::{ports::RandomPort, random::SystemRandom};
use crate::use_cases::selection::{PickPair, SelectionUseCases};

/// Main application state.
///
/// Holds the read-only catalog and the use cases built on it.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub catalog: Arc<Catalog>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub selection: SelectionUseCases,
}

impl App {
    pub fn new(catalog: Catalog, random: Arc<dyn RandomPort>) -> Self {
        let catalog = Arc::new(catalog);
        let pick_pair = PickPair::new(catalog.clone(), random);

        Self {
            catalog,
            use_cases: UseCases {
                selection: SelectionUseCases::new(pick_pair),
            },
        }
    }

    /// App backed by real randomness.
    pub fn with_system_random(catalog: Catalog) -> Self {
        Self::new(catalog, Arc::new(SystemRandom::new()))
    }
}
