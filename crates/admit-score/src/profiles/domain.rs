use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::Profile;

/// Identifier assigned by the profile store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u64);

/// Persisted profile snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub id: ProfileId,
    #[serde(flatten)]
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredProfile {
    /// Ordering key for "most recently updated"; later ids win timestamp ties.
    pub fn recency_key(&self) -> (DateTime<Utc>, ProfileId) {
        (self.updated_at, self.id)
    }
}
