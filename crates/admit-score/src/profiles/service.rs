use std::sync::Arc;

use tracing::info;

use super::domain::StoredProfile;
use super::repository::{ProfileRepository, RepositoryError};
use crate::scoring::{Metrics, ProfileDraft, ScoreEngine};

/// Service composing the profile store with the score engine.
pub struct ProfileService<R> {
    repository: Arc<R>,
    engine: ScoreEngine,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: ScoreEngine::new(),
        }
    }

    /// Coerce a draft to a full profile and store it as the newest snapshot.
    pub fn save(&self, draft: ProfileDraft) -> Result<StoredProfile, ProfileServiceError> {
        let stored = self.repository.insert(draft.into_profile())?;
        info!(profile_id = stored.id.0, "profile snapshot saved");
        Ok(stored)
    }

    pub fn latest(&self) -> Result<Option<StoredProfile>, ProfileServiceError> {
        Ok(self.repository.latest()?)
    }

    /// Score a draft without touching the store.
    pub fn score(&self, draft: ProfileDraft) -> Metrics {
        self.engine.compute(&draft.into_profile())
    }

    /// Latest snapshot together with freshly computed metrics.
    pub fn score_latest(&self) -> Result<Option<(StoredProfile, Metrics)>, ProfileServiceError> {
        let scored = self.repository.latest()?.map(|stored| {
            let metrics = self.engine.compute(&stored.profile);
            (stored, metrics)
        });
        Ok(scored)
    }
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
