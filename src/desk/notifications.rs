use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::constants::NOTIFICATIONS_KEY;
use crate::domain::errors::DeskError;
use crate::domain::model::notification::Notification;
use crate::domain::traits::KeyValueStore;

/// Persisted, newest-first list of notifications
pub struct NotificationCenter {
    store: Arc<dyn KeyValueStore>,
    notifications: RwLock<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let notifications = match store.get(NOTIFICATIONS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Malformed notifications in storage, starting empty: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read notifications, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            store,
            notifications: RwLock::new(notifications),
        }
    }

    pub async fn add(&self, title: &str, message: &str) -> Result<Notification, DeskError> {
        let notification = Notification::new(title, message);
        let mut guard = self.notifications.write().await;

        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(notification.clone());
        next.extend(guard.iter().cloned());
        self.persist(&next)?;
        *guard = next;

        debug!("Notification added: {}", title);
        Ok(notification)
    }

    /// Dismiss by id; unknown ids are ignored
    pub async fn remove(&self, id: Uuid) -> Result<(), DeskError> {
        let mut guard = self.notifications.write().await;
        if !guard.iter().any(|n| n.id == id) {
            return Ok(());
        }

        let next: Vec<_> = guard.iter().filter(|n| n.id != id).cloned().collect();
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    pub async fn list(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    fn persist(&self, notifications: &[Notification]) -> Result<(), DeskError> {
        let raw = serde_json::to_string(notifications)?;
        self.store.set(NOTIFICATIONS_KEY, &raw)
    }
}
