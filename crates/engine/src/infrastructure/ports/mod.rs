//! Port traits for infrastructure boundaries.

mod testing;

pub use testing::RandomPort;

#[cfg(test)]
pub use testing::MockRandomPort;
