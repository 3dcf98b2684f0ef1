// Domain model for orders
use serde::{Deserialize, Serialize};

use crate::domain::constants::{MOCK_EXECUTED_STATUS, MSG_INVALID_PRICE, MSG_INVALID_QUANTITY};
use crate::domain::enums::{OrderSide, OrderType};
use crate::domain::errors::DeskError;

/// Raw, unvalidated order fields exactly as typed into the ticket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderInput {
    pub instrument: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: String,
    pub price: String,
}

// OrderRequest is a validated send-side intent
// Therefore separate from OrderInput and OrderConfirmation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderRequest {
    instrument: String,
    side: OrderSide,
    order_type: OrderType,
    quantity: f64,
    limit_price: Option<f64>,
}

impl OrderRequest {
    /// Build a request, enforcing quantity > 0 and a positive price
    /// for every order type other than Market.
    pub fn new(
        instrument: &str,
        side: OrderSide,
        order_type: OrderType,
        quantity: f64,
        limit_price: Option<f64>,
    ) -> Result<Self, DeskError> {
        if !is_positive(quantity) {
            return Err(DeskError::validation(MSG_INVALID_QUANTITY));
        }

        let limit_price = if order_type.requires_price() {
            match limit_price {
                Some(price) if is_positive(price) => Some(price),
                _ => return Err(DeskError::validation(MSG_INVALID_PRICE)),
            }
        } else {
            None
        };

        Ok(Self {
            instrument: instrument.to_string(),
            side,
            order_type,
            quantity,
            limit_price,
        })
    }

    /// Parse and validate raw ticket fields. The price field is only
    /// looked at when the order type needs one.
    pub fn from_input(input: &OrderInput) -> Result<Self, DeskError> {
        let quantity = parse_positive_decimal(&input.quantity)
            .ok_or_else(|| DeskError::validation(MSG_INVALID_QUANTITY))?;

        let limit_price = if input.order_type.requires_price() {
            Some(
                parse_positive_decimal(&input.price)
                    .ok_or_else(|| DeskError::validation(MSG_INVALID_PRICE))?,
            )
        } else {
            None
        };

        Self::new(&input.instrument, input.side, input.order_type, quantity, limit_price)
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn limit_price(&self) -> Option<f64> {
        self.limit_price
    }
}

/// Brokerage and transaction tax for one order, unrounded
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Charges {
    pub brokerage: f64,
    pub tax: f64,
    pub total: f64,
}

impl Charges {
    pub fn new(brokerage: f64, tax: f64) -> Self {
        Self {
            brokerage,
            tax,
            total: brokerage + tax,
        }
    }
}

/// A priced, fee-assessed order ready for submission.
///
/// Only obtainable from a validated [`OrderRequest`], so a confirmation can
/// never be built from a partially filled ticket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderConfirmation {
    instrument: String,
    side: OrderSide,
    order_type: OrderType,
    quantity: f64,
    execution_price: f64,
    brokerage: f64,
    transaction_tax: f64,
    total_charges: f64,
    net_amount: f64,
    status: String,
}

impl OrderConfirmation {
    pub fn new(request: &OrderRequest, execution_price: f64, charges: Charges) -> Self {
        let order_value = execution_price * request.quantity;
        let net_amount = match request.side {
            OrderSide::Buy => order_value + charges.total,
            OrderSide::Sell => order_value - charges.total,
        };

        Self {
            instrument: request.instrument.clone(),
            side: request.side,
            order_type: request.order_type,
            quantity: request.quantity,
            execution_price,
            brokerage: charges.brokerage,
            transaction_tax: charges.tax,
            total_charges: charges.total,
            net_amount,
            status: MOCK_EXECUTED_STATUS.to_string(),
        }
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn execution_price(&self) -> f64 {
        self.execution_price
    }

    pub fn order_value(&self) -> f64 {
        self.execution_price * self.quantity
    }

    pub fn brokerage(&self) -> f64 {
        self.brokerage
    }

    pub fn transaction_tax(&self) -> f64 {
        self.transaction_tax
    }

    pub fn total_charges(&self) -> f64 {
        self.total_charges
    }

    pub fn net_amount(&self) -> f64 {
        self.net_amount
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Amounts rounded for display
    pub fn displayed(&self) -> DisplayedAmounts {
        DisplayedAmounts::from_confirmation(self)
    }

    /// One-line description, e.g. `Buy 50 shares of RELIANCE at ₹2900.50 (Market)`
    pub fn headline(&self) -> String {
        format!(
            "{} {} shares of {} at ₹{:.2} ({})",
            self.side, self.quantity, self.instrument, self.execution_price, self.order_type
        )
    }
}

/// Confirmation amounts in whole paise.
///
/// Brokerage and tax are rounded individually; total and net are derived
/// from the rounded parts so the displayed figures always add up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayedAmounts {
    pub brokerage_paise: i64,
    pub tax_paise: i64,
    pub total_paise: i64,
    pub net_paise: i64,
}

impl DisplayedAmounts {
    pub fn from_confirmation(confirmation: &OrderConfirmation) -> Self {
        let brokerage_paise = to_paise(confirmation.brokerage);
        let tax_paise = to_paise(confirmation.transaction_tax);
        let total_paise = brokerage_paise.saturating_add(tax_paise);
        let value_paise = to_paise(confirmation.order_value());
        let net_paise = match confirmation.side {
            OrderSide::Buy => value_paise.saturating_add(total_paise),
            OrderSide::Sell => value_paise.saturating_sub(total_paise),
        };

        Self {
            brokerage_paise,
            tax_paise,
            total_paise,
            net_paise,
        }
    }

    pub fn brokerage(&self) -> String {
        format_paise(self.brokerage_paise)
    }

    pub fn tax(&self) -> String {
        format_paise(self.tax_paise)
    }

    pub fn total(&self) -> String {
        format_paise(self.total_paise)
    }

    pub fn net(&self) -> String {
        format_paise(self.net_paise)
    }
}

// `as` saturates out-of-range values and maps NaN to 0
fn to_paise(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Render a paise amount with two decimals, e.g. `-1234` as `-12.34`
pub fn format_paise(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a finite, strictly positive decimal
pub fn parse_positive_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| is_positive(*v))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
