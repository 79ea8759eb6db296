//! Infrastructure layer for Pelada.
//!
//! Implements the core's trait seams: platform path resolution, the JSON
//! file repository for the single persisted user record, an in-memory
//! repository for tests, and geolocation providers.

pub mod geolocation;
pub mod json_user_repository;
pub mod memory_user_repository;
pub mod paths;

pub use geolocation::{FixedLocationProvider, UnavailableLocationProvider, UnsupportedLocationProvider};
pub use json_user_repository::JsonUserRepository;
pub use memory_user_repository::InMemoryUserRepository;
pub use paths::PeladaPaths;
