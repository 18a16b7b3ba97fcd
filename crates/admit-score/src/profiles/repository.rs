use super::domain::StoredProfile;
use crate::scoring::Profile;

/// Storage abstraction so the service and router can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    /// Most recently updated snapshot, if any has been stored.
    fn latest(&self) -> Result<Option<StoredProfile>, RepositoryError>;
    /// Persist a new snapshot, assigning its id and timestamps.
    fn insert(&self, profile: Profile) -> Result<StoredProfile, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
