use anyhow::Result;

use paper_trading_desk::desk::{compute_charges, FeeCalculator, FormState, OrderForm};
use paper_trading_desk::domain::constants::{MSG_INVALID_PRICE, MSG_INVALID_QUANTITY};
use paper_trading_desk::domain::enums::{OrderSide, OrderType};
use paper_trading_desk::domain::model::order::OrderInput;
use paper_trading_desk::infrastructure::mock::StaticPriceOracle;

fn ticket(side: OrderSide, order_type: OrderType, quantity: &str, price: &str) -> OrderForm {
    OrderForm::from_input(OrderInput {
        instrument: "RELIANCE".to_string(),
        side,
        order_type,
        quantity: quantity.to_string(),
        price: price.to_string(),
    })
}

#[test]
fn test_market_buy_confirmation_amounts() -> Result<()> {
    let oracle = StaticPriceOracle::default();
    let mut form = ticket(OrderSide::Buy, OrderType::Market, "50", "");

    let confirmation = form.submit(&oracle, &FeeCalculator::default())?;

    assert_eq!(confirmation.execution_price(), 2900.5);
    assert!((confirmation.order_value() - 145_025.0).abs() < 1e-9);

    let shown = confirmation.displayed();
    assert_eq!(shown.brokerage(), "72.51");
    assert_eq!(shown.tax(), "14.50");
    assert_eq!(shown.total(), "87.01");
    assert_eq!(shown.net(), "145112.01");

    assert_eq!(form.state(), FormState::Confirmed(confirmation));
    Ok(())
}

#[test]
fn test_negative_quantity_creates_no_confirmation() {
    let oracle = StaticPriceOracle::default();
    let mut form = ticket(OrderSide::Buy, OrderType::Market, "-5", "");

    let err = form.submit(&oracle, &FeeCalculator::default()).unwrap_err();

    assert_eq!(err.to_string(), MSG_INVALID_QUANTITY);
    assert!(form.confirmation().is_none());
    assert_eq!(form.error(), Some(MSG_INVALID_QUANTITY));
}

#[test]
fn test_limit_order_without_price_is_rejected() {
    let oracle = StaticPriceOracle::default();
    let mut form = ticket(OrderSide::Buy, OrderType::Limit, "10", "");

    let err = form.submit(&oracle, &FeeCalculator::default()).unwrap_err();

    assert_eq!(err.to_string(), MSG_INVALID_PRICE);
    assert!(form.confirmation().is_none());
}

#[test]
fn test_rejected_ticket_recovers_after_edit() -> Result<()> {
    let oracle = StaticPriceOracle::default();
    let fees = FeeCalculator::default();
    let mut form = ticket(OrderSide::Sell, OrderType::StopLoss, "10", "");

    assert!(form.submit(&oracle, &fees).is_err());
    assert!(form.set_price("2850"));
    assert_eq!(form.state(), FormState::Editing);

    let confirmation = form.submit(&oracle, &fees)?;
    assert_eq!(confirmation.execution_price(), 2850.0);
    assert_eq!(
        confirmation.net_amount(),
        confirmation.order_value() - confirmation.total_charges()
    );
    Ok(())
}

#[test]
fn test_fee_identities_hold_across_order_values() {
    for value in [0.0, 1.0, 99.99, 2_500.0, 145_025.0, 4_800_000.0] {
        let charges = compute_charges(value);
        assert!((charges.brokerage - 0.0005 * value).abs() < 1e-9);
        assert!((charges.tax - 0.0001 * value).abs() < 1e-9);
        assert!((charges.brokerage + charges.tax - charges.total).abs() < 1e-9);
    }
}
