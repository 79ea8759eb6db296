//! Application state module.

mod model;

pub use model::AppState;
