use std::sync::Arc;

use anyhow::Result;
use tokio::time::{Duration, Instant};

use paper_trading_desk::desk::{FeeCalculator, NotificationCenter, OrderDesk, OrderForm};
use paper_trading_desk::domain::constants::{MOCK_EXECUTED_STATUS, NOTIFICATIONS_KEY};
use paper_trading_desk::domain::enums::{OrderSide, OrderType};
use paper_trading_desk::domain::errors::DeskError;
use paper_trading_desk::domain::traits::KeyValueStore;
use paper_trading_desk::infrastructure::mock::gateway::SUBMISSION_DELAY_MS;
use paper_trading_desk::infrastructure::mock::{MockOrderGateway, StaticPriceOracle};
use paper_trading_desk::infrastructure::storage::MemoryStore;

#[tokio::test(start_paused = true)]
async fn test_ticket_to_execution() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let notifications = Arc::new(NotificationCenter::load(store.clone()));
    let desk = OrderDesk::new(Arc::new(MockOrderGateway::default())).with_notifications(notifications.clone());

    let mut form = OrderForm::new();
    form.set_instrument("TCS");
    form.set_side(OrderSide::Sell);
    form.set_order_type(OrderType::Limit);
    assert!(form.set_quantity("3"));
    assert!(form.set_price("4210.25"));
    let confirmation = form.submit(&StaticPriceOracle::default(), &FeeCalculator::default())?;

    let started = Instant::now();
    let ack = desk.place_order(&confirmation).await?;

    assert!(started.elapsed() >= Duration::from_millis(SUBMISSION_DELAY_MS));
    assert!(ack.success);
    assert_eq!(ack.status, MOCK_EXECUTED_STATUS);
    assert_eq!(ack.order, confirmation);
    assert_eq!(desk.last_ack().await, Some(ack));
    assert!(desk.last_error().await.is_none());

    assert_eq!(notifications.list().await.len(), 1);
    assert!(store.get(NOTIFICATIONS_KEY)?.is_some());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_submission_is_refused() -> Result<()> {
    let desk = OrderDesk::new(Arc::new(MockOrderGateway::default()));
    let confirmation = OrderForm::new().submit(&StaticPriceOracle::default(), &FeeCalculator::default())?;

    let (first, second) = tokio::join!(desk.place_order(&confirmation), desk.place_order(&confirmation));

    assert!(first?.success);
    assert_eq!(second.unwrap_err(), DeskError::SubmissionPending);
    assert!(!desk.is_pending());
    Ok(())
}
