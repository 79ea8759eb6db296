//! Domain layer for Pelada, a casual sports-match coordination app.
//!
//! Everything here is headless and synchronous: entities and their
//! invariants, the application state container, the view router, pure
//! state-to-viewmodel projections, and the trait seams (user persistence,
//! geolocation) the infrastructure crate implements.

pub mod error;
pub mod location;
pub mod matches;
pub mod projection;
pub mod state;
pub mod user;
pub mod view;

// Re-export common error type
pub use error::PeladaError;
