use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::RwLock;
use tokio::time::{timeout, Duration};

use crate::domain::constants::{MSG_ORDER_FAILED, MSG_ORDER_TIMED_OUT};
use crate::domain::errors::DeskError;
use crate::domain::model::ack::ExecutionAck;
use crate::domain::model::order::OrderConfirmation;
use crate::domain::traits::OrderGateway;

use super::config;
use super::notifications::NotificationCenter;

/// Sends confirmed orders to the gateway, one at a time.
///
/// A second submission while one is in flight is refused. Dropping a
/// pending `place_order` future abandons it and frees the desk.
pub struct OrderDesk {
    gateway: Arc<dyn OrderGateway>,
    notifications: Option<Arc<NotificationCenter>>,
    timeout: Duration,
    in_flight: AtomicBool,
    last_ack: RwLock<Option<ExecutionAck>>,
    last_error: RwLock<Option<String>>,
}

// Clears the in-flight flag however the submission ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl OrderDesk {
    pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
        Self {
            gateway,
            notifications: None,
            timeout: Duration::from_millis(config::GATEWAY_TIMEOUT_MS),
            in_flight: AtomicBool::new(false),
            last_ack: RwLock::new(None),
            last_error: RwLock::new(None),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Post a notification for every executed order
    pub fn with_notifications(mut self, notifications: Arc<NotificationCenter>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn last_ack(&self) -> Option<ExecutionAck> {
        self.last_ack.read().await.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    /// Submit once. No retries.
    pub async fn place_order(&self, order: &OrderConfirmation) -> Result<ExecutionAck, DeskError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Refusing {}: a submission is already pending", order.headline());
            return Err(DeskError::SubmissionPending);
        }
        let _guard = InFlightGuard(&self.in_flight);

        *self.last_ack.write().await = None;
        *self.last_error.write().await = None;

        let result = match timeout(self.timeout, self.gateway.submit(order)).await {
            Ok(Ok(ack)) if ack.success => Ok(ack),
            Ok(Ok(ack)) => {
                error!("Gateway declined order {}", ack.order_id);
                Err(DeskError::gateway(MSG_ORDER_FAILED))
            }
            Ok(Err(e)) => {
                error!("Order submission failed: {}", e);
                Err(e)
            }
            Err(_) => {
                error!("Order submission timed out after {:?}", self.timeout);
                Err(DeskError::gateway(MSG_ORDER_TIMED_OUT))
            }
        };

        match &result {
            Ok(ack) => {
                info!("Order {} {}", ack.order_id, ack.status);
                *self.last_ack.write().await = Some(ack.clone());
                self.notify_executed(ack).await;
            }
            Err(e) => {
                *self.last_error.write().await = Some(e.to_string());
            }
        }

        result
    }

    async fn notify_executed(&self, ack: &ExecutionAck) {
        let Some(notifications) = &self.notifications else {
            return;
        };

        let message = format!("#{}: {} ({})", ack.order_id, ack.order.headline(), ack.status);
        if let Err(e) = notifications
            .add(config::EXECUTED_NOTIFICATION_TITLE, &message)
            .await
        {
            warn!("Failed to record order notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    use crate::domain::enums::{OrderSide, OrderType};
    use crate::domain::model::order::{Charges, OrderRequest};
    use crate::infrastructure::mock::MockOrderGateway;
    use crate::infrastructure::storage::MemoryStore;

    mock! {
        Gateway {}
        #[async_trait]
        impl OrderGateway for Gateway {
            async fn submit(&self, order: &OrderConfirmation) -> Result<ExecutionAck, DeskError>;
        }
    }

    fn confirmation() -> OrderConfirmation {
        let request = OrderRequest::new("RELIANCE", OrderSide::Buy, OrderType::Market, 50.0, None).unwrap();
        OrderConfirmation::new(&request, 2900.5, Charges::new(72.5125, 14.5025))
    }

    #[tokio::test]
    async fn declined_ack_becomes_gateway_error() {
        let mut gateway = MockGateway::new();
        gateway.expect_submit().times(1).returning(|order| {
            Ok(ExecutionAck {
                success: false,
                order_id: 7,
                status: "Rejected".to_string(),
                order: order.clone(),
            })
        });

        let desk = OrderDesk::new(Arc::new(gateway));
        let err = desk.place_order(&confirmation()).await.unwrap_err();

        assert_eq!(err, DeskError::Gateway(MSG_ORDER_FAILED.to_string()));
        assert_eq!(desk.last_error().await.as_deref(), Some(MSG_ORDER_FAILED));
        assert!(desk.last_ack().await.is_none());
        assert!(!desk.is_pending());
    }

    #[tokio::test]
    async fn gateway_errors_are_not_retried() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_submit()
            .times(1)
            .returning(|_| Err(DeskError::gateway("connection reset")));

        let desk = OrderDesk::new(Arc::new(gateway));
        let err = desk.place_order(&confirmation()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }

    #[tokio::test(start_paused = true)]
    async fn second_submission_is_refused_while_pending() {
        let desk = Arc::new(OrderDesk::new(Arc::new(MockOrderGateway::default())));

        let first = tokio::spawn({
            let desk = desk.clone();
            async move { desk.place_order(&confirmation()).await }
        });
        tokio::task::yield_now().await;
        assert!(desk.is_pending());

        let second = desk.place_order(&confirmation()).await;
        assert_eq!(second.unwrap_err(), DeskError::SubmissionPending);

        let ack = first.await.unwrap().unwrap();
        assert!(ack.success);
        assert!(!desk.is_pending());
        assert_eq!(desk.last_ack().await, Some(ack));
    }

    #[tokio::test(start_paused = true)]
    async fn hung_gateway_times_out() {
        let desk = OrderDesk::new(Arc::new(MockOrderGateway::new(Duration::from_secs(60))))
            .with_timeout(Duration::from_secs(2));

        let err = desk.place_order(&confirmation()).await.unwrap_err();
        assert_eq!(err, DeskError::Gateway(MSG_ORDER_TIMED_OUT.to_string()));
        assert!(!desk.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_submission_frees_the_desk() {
        let desk = OrderDesk::new(Arc::new(MockOrderGateway::default()));

        let abandoned = timeout(Duration::from_millis(10), desk.place_order(&confirmation())).await;
        assert!(abandoned.is_err());
        assert!(!desk.is_pending());

        assert!(desk.place_order(&confirmation()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn executed_orders_are_announced() {
        let notifications = Arc::new(NotificationCenter::load(Arc::new(MemoryStore::new())));
        let desk = OrderDesk::new(Arc::new(MockOrderGateway::new(Duration::ZERO)))
            .with_notifications(notifications.clone());

        let ack = desk.place_order(&confirmation()).await.unwrap();

        let posted = notifications.list().await;
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].title, config::EXECUTED_NOTIFICATION_TITLE);
        assert!(posted[0].message.starts_with(&format!("#{}:", ack.order_id)));
    }
}
