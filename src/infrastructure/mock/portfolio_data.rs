use chrono::NaiveDate;

use crate::domain::enums::{Exchange, InstrumentType, OrderSide};
use crate::domain::model::portfolio::{Holding, Transaction};

/// Fixed holdings and transaction history for the demo account
pub fn mock_portfolio() -> (Vec<Holding>, Vec<Transaction>) {
    let holdings = vec![
        Holding::new("RELIANCE", InstrumentType::Stock, 50.0, 2800.0),
        Holding::new("TCS", InstrumentType::Stock, 20.0, 4000.0),
        Holding::new("NIFTYBEES", InstrumentType::Etf, 100.0, 145.0),
        Holding::new("SBI Mutual Fund", InstrumentType::MutualFund, 200.0, 110.0),
        Holding::new("GOLDBEES", InstrumentType::Etf, 150.0, 53.0),
    ];

    let transactions = vec![
        transaction(1, (2024, 7, 21), "RELIANCE", 30.0, 2750.0, Exchange::Nse),
        transaction(2, (2024, 8, 1), "RELIANCE", 20.0, 2850.0, Exchange::Nse),
        transaction(3, (2024, 7, 25), "TCS", 20.0, 4000.0, Exchange::Bse),
        transaction(4, (2024, 7, 28), "NIFTYBEES", 100.0, 145.0, Exchange::Nse),
        transaction(5, (2024, 7, 30), "SBI Mutual Fund", 200.0, 110.0, Exchange::Amfi),
    ];

    (holdings, transactions)
}

fn transaction(
    id: u64,
    (year, month, day): (i32, u32, u32),
    symbol: &str,
    quantity: f64,
    price: f64,
    exchange: Exchange,
) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        symbol: symbol.to_string(),
        side: OrderSide::Buy,
        quantity,
        price,
        exchange,
    }
}
