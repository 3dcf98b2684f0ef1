use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::errors::DeskError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Buy",
            OrderSide::Sell => "Sell",
        }
    }

    /// Word used for the cash movement of a confirmed order
    pub fn cash_flow_label(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Debit",
            OrderSide::Sell => "Credit",
        }
    }
}

impl Serialize for OrderSide {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderSide::Buy),
            "sell" => Ok(OrderSide::Sell),
            _ => Err(DeskError::validation(format!("Unknown order side: {}", s))),
        }
    }
}

/// Market orders take the oracle price, every other type needs a user price
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
    #[serde(rename = "Stop-Loss")]
    StopLoss,
    #[serde(rename = "Intraday (MIS)")]
    Intraday,
}

impl OrderType {
    pub const ALL: [OrderType; 4] = [
        OrderType::Market,
        OrderType::Limit,
        OrderType::StopLoss,
        OrderType::Intraday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "Market",
            OrderType::Limit => "Limit",
            OrderType::StopLoss => "Stop-Loss",
            OrderType::Intraday => "Intraday (MIS)",
        }
    }

    pub fn requires_price(&self) -> bool {
        !matches!(self, OrderType::Market)
    }
}

impl Serialize for OrderType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" => Ok(OrderType::Market),
            "limit" => Ok(OrderType::Limit),
            "stop-loss" | "stoploss" | "sl" => Ok(OrderType::StopLoss),
            "intraday" | "intraday (mis)" | "mis" => Ok(OrderType::Intraday),
            _ => Err(DeskError::validation(format!("Unknown order type: {}", s))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    #[serde(rename = "NSE")]
    Nse,
    #[serde(rename = "BSE")]
    Bse,
    WazirX,
    Forex,
    // Mutual fund transactions settle through AMFI
    #[serde(rename = "AMFI")]
    Amfi,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Nse => "NSE",
            Exchange::Bse => "BSE",
            Exchange::WazirX => "WazirX",
            Exchange::Forex => "Forex",
            Exchange::Amfi => "AMFI",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nse" => Ok(Exchange::Nse),
            "bse" => Ok(Exchange::Bse),
            "wazirx" => Ok(Exchange::WazirX),
            "forex" => Ok(Exchange::Forex),
            "amfi" => Ok(Exchange::Amfi),
            _ => Err(DeskError::validation(format!("Unknown exchange: {}", s))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    Stock,
    #[serde(rename = "ETF")]
    Etf,
    Crypto,
    Forex,
    Index,
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    Bond,
}

impl InstrumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentType::Stock => "Stock",
            InstrumentType::Etf => "ETF",
            InstrumentType::Crypto => "Crypto",
            InstrumentType::Forex => "Forex",
            InstrumentType::Index => "Index",
            InstrumentType::MutualFund => "Mutual Fund",
            InstrumentType::Bond => "Bond",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentType {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stock" => Ok(InstrumentType::Stock),
            "etf" => Ok(InstrumentType::Etf),
            "crypto" => Ok(InstrumentType::Crypto),
            "forex" => Ok(InstrumentType::Forex),
            "index" => Ok(InstrumentType::Index),
            "mutual fund" | "mutualfund" | "mf" => Ok(InstrumentType::MutualFund),
            "bond" => Ok(InstrumentType::Bond),
            _ => Err(DeskError::validation(format!("Unknown instrument type: {}", s))),
        }
    }
}
