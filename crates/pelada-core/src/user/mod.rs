//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: the [`User`] domain model
//! - `request`: login and profile-update request models
//! - `repository`: persistence seam for the single persisted user record

mod model;
mod repository;
mod request;

pub use model::User;
pub(crate) use model::initial_of;
pub use repository::UserRepository;
pub use request::{LoginRequest, ProfileUpdate};
