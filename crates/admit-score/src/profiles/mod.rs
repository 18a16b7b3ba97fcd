//! Profile snapshot storage contracts and the HTTP surface over them.
//!
//! The store itself is an injected [`ProfileRepository`]; this module only defines the
//! contract, the service that pairs it with the score engine, and the router.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ProfileId, StoredProfile};
pub use repository::{ProfileRepository, RepositoryError};
pub use router::profile_router;
pub use service::{ProfileService, ProfileServiceError};
