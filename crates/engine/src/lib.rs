//! Actor picker engine library.
//!
//! This crate contains all server-side code for the actor picker.
//!
//! ## Structure
//!
//! - `use_cases/` - Selection orchestration over the domain catalog
//! - `infrastructure/` - Config, ports and their adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
