use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::SignupError;
use crate::models::{Activity, ActivityCatalog};

/// Shared handle to the in-memory activity catalog.
///
/// Clones point at the same data. Every operation takes the lock for its
/// full read-modify-write, so concurrent commands never lose updates.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<ActivityCatalog>>,
}

impl ActivityRegistry {
    pub fn from_catalog(catalog: ActivityCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn seeded() -> Self {
        Self::from_catalog(seed::seed_catalog())
    }

    pub async fn snapshot(&self) -> ActivityCatalog {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().await.get(name).cloned()
    }

    /// Appends `email` to the roster and returns the updated activity.
    ///
    /// Capacity is not checked here; callers decide what to do with an
    /// activity that is over `max_participants`.
    pub async fn sign_up(&self, name: &str, email: &str) -> Result<Activity, SignupError> {
        let mut catalog = self.inner.write().await;
        let activity = catalog
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    /// Removes `email` from the roster, keeping the order of everyone else.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<Activity, SignupError> {
        let mut catalog = self.inner.write().await;
        let activity = catalog
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(SignupError::NotRegistered);
        };

        activity.participants.remove(pos);
        Ok(activity.clone())
    }
}
