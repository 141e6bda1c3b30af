// Trade data injected by the dashboard host

use eyre::{eyre, Result, WrapErr};
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Bids,
    Asks,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bids => f.write_str("bids"),
            Self::Asks => f.write_str("asks"),
        }
    }
}

/// Identifies one marker series: a trade tag (e.g. `core`) and a side.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    pub tag: String,
    pub side: TradeSide,
}

impl SeriesKey {
    pub fn new(tag: impl Into<String>, side: TradeSide) -> Self {
        Self {
            tag: tag.into(),
            side,
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tag, self.side)
    }
}

/// One executed trade. `price` is the plotted y value; the remaining fields
/// are display text as the dashboard formatted them (e.g. `"1.5 BTC"`).
#[derive(Clone, Debug, PartialEq)]
pub struct Trade {
    pub time: f64,
    pub price: f64,
    pub exchange: String,
    pub volume: String,
    pub unit_price: String,
    pub fee: String,
    pub order_id: String,
}

impl Trade {
    /// Lines shown when the trade is hovered.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            self.exchange.clone(),
            format!("{} @ {}", self.volume, self.unit_price),
            format!("Fee: {}", self.fee),
            format!("Order ID: {}", self.order_id),
        ]
    }
}

/// A row cell the host may send either as a JSON number or as text.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum Field {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Numeric value sent as `1.5` or `"1.5"`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Amount(f64);

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Field::deserialize(deserializer)? {
            Field::Number(n) => n.as_f64(),
            Field::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value
            .filter(|v| v.is_finite())
            .map(Amount)
            .ok_or_else(|| D::Error::custom("expected a number or a numeric string"))
    }
}

/// `[time, plotted_price, exchange, volume, unit_price, fee, order_id]`
#[derive(Clone, Debug, Deserialize)]
struct TradeRow(Amount, Amount, Field, Field, Field, Field, Field);

impl From<TradeRow> for Trade {
    fn from(row: TradeRow) -> Self {
        let TradeRow(time, price, exchange, volume, unit_price, fee, order_id) = row;
        Self {
            time: time.0,
            price: price.0,
            exchange: exchange.to_string(),
            volume: volume.to_string(),
            unit_price: unit_price.to_string(),
            fee: fee.to_string(),
            order_id: order_id.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct SideBook {
    prices: Vec<TradeRow>,
    volumes: Vec<Amount>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct TagBook {
    bids: SideBook,
    asks: SideBook,
}

/// Trades per tag and side, together with the volume list that sizes each
/// marker. The volume list is kept as supplied and is not derived from the
/// trade rows.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct TradeBook {
    tags: HashMap<String, TagBook>,
}

impl TradeBook {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).wrap_err("failed to parse trade book")
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn series(&self, tag: &str, side: TradeSide) -> Result<TradeSeries> {
        let book = self
            .tags
            .get(tag)
            .ok_or_else(|| eyre!("trade book has no tag {:?}", tag))?;
        let side_book = match side {
            TradeSide::Bids => &book.bids,
            TradeSide::Asks => &book.asks,
        };
        Ok(TradeSeries {
            key: SeriesKey::new(tag, side),
            trades: side_book.prices.iter().cloned().map(Trade::from).collect(),
            volumes: side_book.volumes.iter().map(|v| v.0).collect(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TradeSeries {
    pub key: SeriesKey,
    pub trades: Vec<Trade>,
    pub volumes: Vec<f64>,
}

impl TradeSeries {
    pub fn new(key: SeriesKey, trades: Vec<Trade>, volumes: Vec<f64>) -> Self {
        Self {
            key,
            trades,
            volumes,
        }
    }
}
