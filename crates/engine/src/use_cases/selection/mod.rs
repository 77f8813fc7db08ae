//! Selection use cases.

mod pick_pair;

pub use pick_pair::PickPair;

/// Container for selection use cases.
pub struct SelectionUseCases {
    pub pick_pair: PickPair,
}

impl SelectionUseCases {
    pub fn new(pick_pair: PickPair) -> Self {
        Self { pick_pair }
    }
}
