use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::ActivityError;
use crate::models::{Activity, ActivityMap};

/// Process-wide activity registry. Cheap to clone; all clones share one map.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub async fn list_activities(&self) -> ActivityMap {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Runs `f` against one activity while holding the write lock, so the
    /// check and the mutation inside `f` happen as a single step.
    pub async fn update_activity<T, F>(&self, name: &str, f: F) -> Result<T, ActivityError>
    where
        F: FnOnce(&mut Activity) -> Result<T, ActivityError>,
    {
        let mut activities = self.inner.write().await;
        let activity = activities.get_mut(name).ok_or(ActivityError::NotFound)?;
        f(activity)
    }
}
