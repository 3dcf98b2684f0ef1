use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::constants::MSG_ORDER_TOO_LARGE;
use crate::domain::enums::{OrderSide, OrderType};
use crate::domain::errors::DeskError;
use crate::domain::model::order::{OrderConfirmation, OrderInput, OrderRequest};
use crate::domain::traits::PriceOracle;

use super::config;
use super::fee_calculator::FeeCalculator;

// ASCII digits with at most one decimal point. Empty input is allowed so a field can be cleared.
static DECIMAL_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("decimal input pattern is valid"));

/// Where the ticket is in its lifecycle
#[derive(Clone, Debug, PartialEq)]
pub enum FormState {
    Editing,
    Rejected(String),
    Confirmed(OrderConfirmation),
}

/// Order ticket controller.
///
/// Holds raw field values, filters keystrokes, and on submit turns the
/// fields into an [`OrderConfirmation`]. Any accepted edit discards the
/// previous error and confirmation. A rejected submit only records the
/// error; an earlier confirmation is kept as it was.
#[derive(Clone, Debug)]
pub struct OrderForm {
    input: OrderInput,
    confirmation: Option<OrderConfirmation>,
    error: Option<String>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    pub fn new() -> Self {
        Self::from_input(OrderInput {
            instrument: config::DEFAULT_INSTRUMENT.to_string(),
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            quantity: config::DEFAULT_QUANTITY.to_string(),
            price: String::new(),
        })
    }

    /// Ticket prefilled with the given values. The keystroke filter is not
    /// applied, validation still runs on submit.
    pub fn from_input(input: OrderInput) -> Self {
        Self {
            input,
            confirmation: None,
            error: None,
        }
    }

    pub fn input(&self) -> &OrderInput {
        &self.input
    }

    /// The latest rejection takes precedence over an earlier confirmation
    pub fn state(&self) -> FormState {
        match (&self.error, &self.confirmation) {
            (Some(msg), _) => FormState::Rejected(msg.clone()),
            (None, Some(confirmation)) => FormState::Confirmed(confirmation.clone()),
            (None, None) => FormState::Editing,
        }
    }

    /// Last successful confirmation, kept across a later rejection
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_instrument(&mut self, symbol: &str) {
        self.input.instrument = symbol.to_string();
        self.touch();
    }

    pub fn set_side(&mut self, side: OrderSide) {
        self.input.side = side;
        self.touch();
    }

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.input.order_type = order_type;
        self.touch();
    }

    /// Returns false, leaving the ticket untouched, when `raw` is not an
    /// unsigned decimal.
    pub fn set_quantity(&mut self, raw: &str) -> bool {
        if !is_decimal_input(raw) {
            debug!("Ignoring quantity input {:?}", raw);
            return false;
        }
        self.input.quantity = raw.to_string();
        self.touch();
        true
    }

    /// Same filtering as [`OrderForm::set_quantity`].
    pub fn set_price(&mut self, raw: &str) -> bool {
        if !is_decimal_input(raw) {
            debug!("Ignoring price input {:?}", raw);
            return false;
        }
        self.input.price = raw.to_string();
        self.touch();
        true
    }

    /// Back to the initial ticket
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate, price and assess fees.
    ///
    /// Market orders execute at the oracle price, every other type at the
    /// user's price.
    pub fn submit(
        &mut self,
        oracle: &dyn PriceOracle,
        fees: &FeeCalculator,
    ) -> Result<OrderConfirmation, DeskError> {
        match self.price(oracle, fees) {
            Ok(confirmation) => {
                info!("Order confirmed: {}", confirmation.headline());
                self.error = None;
                self.confirmation = Some(confirmation.clone());
                Ok(confirmation)
            }
            Err(e) => {
                info!("Order rejected: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn price(&self, oracle: &dyn PriceOracle, fees: &FeeCalculator) -> Result<OrderConfirmation, DeskError> {
        let request = OrderRequest::from_input(&self.input)?;

        let execution_price = match request.limit_price() {
            Some(price) => price,
            None => oracle.get_price(request.instrument()),
        };

        let order_value = execution_price * request.quantity();
        if !order_value.is_finite() || order_value > config::MAX_ORDER_VALUE {
            return Err(DeskError::validation(MSG_ORDER_TOO_LARGE));
        }

        let charges = fees.compute_charges(order_value);
        Ok(OrderConfirmation::new(&request, execution_price, charges))
    }

    fn touch(&mut self) {
        self.confirmation = None;
        self.error = None;
    }
}

pub(crate) fn is_decimal_input(raw: &str) -> bool {
    DECIMAL_INPUT.is_match(raw)
}
