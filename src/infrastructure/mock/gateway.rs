use async_trait::async_trait;
use log::{debug, info};
use rand::Rng;
use tokio::time::{sleep, Duration};

use crate::domain::constants::MOCK_EXECUTED_STATUS;
use crate::domain::errors::DeskError;
use crate::domain::model::ack::ExecutionAck;
use crate::domain::model::order::OrderConfirmation;
use crate::domain::traits::OrderGateway;

pub const SUBMISSION_DELAY_MS: u64 = 1000;

/// Exclusive upper bound for generated order ids
pub const ORDER_ID_LIMIT: u32 = 100_000;

/// Gateway that always executes after a fixed delay. Single attempt, no retries.
#[derive(Clone, Debug)]
pub struct MockOrderGateway {
    delay: Duration,
}

impl Default for MockOrderGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(SUBMISSION_DELAY_MS))
    }
}

impl MockOrderGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn submit(&self, order: &OrderConfirmation) -> Result<ExecutionAck, DeskError> {
        debug!("Submitting {} (simulated delay {:?})", order.headline(), self.delay);
        sleep(self.delay).await;

        let order_id = rand::thread_rng().gen_range(0..ORDER_ID_LIMIT);
        info!("Order {} executed: {}", order_id, order.headline());

        Ok(ExecutionAck {
            success: true,
            order_id,
            status: MOCK_EXECUTED_STATUS.to_string(),
            order: order.clone(),
        })
    }
}
