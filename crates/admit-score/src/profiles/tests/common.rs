use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::profiles::domain::{ProfileId, StoredProfile};
use crate::profiles::repository::{ProfileRepository, RepositoryError};
use crate::profiles::{profile_router, ProfileService};
use crate::scoring::{Profile, ProfileDraft};

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<StoredProfile>>>,
}

impl ProfileRepository for MemoryRepository {
    fn latest(&self) -> Result<Option<StoredProfile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().max_by_key(|record| record.recency_key()).cloned())
    }

    fn insert(&self, profile: Profile) -> Result<StoredProfile, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let now = Utc::now();
        let stored = StoredProfile {
            id: ProfileId(guard.len() as u64 + 1),
            profile,
            created_at: now,
            updated_at: now,
        };
        guard.push(stored.clone());
        Ok(stored)
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn latest(&self) -> Result<Option<StoredProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _profile: Profile) -> Result<StoredProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ProfileService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ProfileService::new(repository.clone());
    (service, repository)
}

pub(super) fn act_only_draft() -> ProfileDraft {
    ProfileDraft {
        gpa: Some(3.6),
        sat: Some(0),
        act: Some(29),
        ap_offered: Some(6),
        ap_taken: Some(5),
        is_legacy: Some(true),
        ..ProfileDraft::default()
    }
}

pub(super) fn router_with_service(service: ProfileService<MemoryRepository>) -> axum::Router {
    profile_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
