//! Actor picker domain.
//!
//! Pure types and invariants: the fixed catalog, the pair it yields and the
//! errors that guard it. Randomness is injected by the caller.

pub mod catalog;
pub mod error;
pub mod selection;

pub use catalog::{Catalog, DEFAULT_ACTORS, DEFAULT_COLORS};
pub use error::DomainError;
pub use selection::Pair;
