use serde::Serialize;

use crate::domain::model::order::OrderConfirmation;

/// Acknowledgment returned by the order gateway
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionAck {
    /// Whether the gateway accepted the order
    pub success: bool,

    /// Gateway-assigned order ID
    pub order_id: u32,

    /// Execution status reported by the gateway
    pub status: String,

    /// The order as submitted
    pub order: OrderConfirmation,
}
