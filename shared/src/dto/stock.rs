use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Key figures for one ticker, as returned by `GET /stock/query/{ticker}`.
///
/// The backend substitutes the literal string `"N/A"` for any figure its
/// data source cannot provide, so every numeric field decodes leniently:
/// numbers and numeric strings parse, anything else becomes `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockQuote {
    pub ticker: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub previous_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub open_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub day_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub day_low: Option<f64>,
    #[serde(rename = "52_week_high", default, deserialize_with = "lenient_f64")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(rename = "52_week_low", default, deserialize_with = "lenient_f64")]
    pub fifty_two_week_low: Option<f64>,
}

impl StockQuote {
    /// Price to show and trade against: the live price when present,
    /// otherwise the previous close.
    pub fn effective_price(&self) -> Option<f64> {
        self.current_price.or(self.previous_close)
    }
}

/// Price series for charting, as returned by `GET /stock/chart/{ticker}`.
///
/// Dates arrive as `YYYY-MM-DD` strings aligned index-for-index with the
/// closing prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockChart {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
}

impl StockChart {
    /// Pair parsed dates with their closing prices, skipping rows whose
    /// date string does not parse.
    pub fn points(&self) -> Vec<(NaiveDate, f64)> {
        self.dates
            .iter()
            .zip(self.prices.iter())
            .filter_map(|(date, price)| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .ok()
                    .map(|d| (d, *price))
            })
            .collect()
    }
}

/// One company-search match from `GET /stock/search/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyMatch {
    pub name: String,
    pub symbol: String,
}

/// Chart lookback window. Serializes to the query-string values the
/// backend's data source understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartPeriod {
    OneDay,
    FiveDays,
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    FiveYears,
    Max,
}

impl ChartPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::OneDay => "1d",
            ChartPeriod::FiveDays => "5d",
            ChartPeriod::OneMonth => "1mo",
            ChartPeriod::ThreeMonths => "3mo",
            ChartPeriod::SixMonths => "6mo",
            ChartPeriod::OneYear => "1y",
            ChartPeriod::FiveYears => "5y",
            ChartPeriod::Max => "max",
        }
    }
}

/// Spacing between chart samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartInterval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    OneHour,
    #[default]
    OneDay,
    OneWeek,
}

impl ChartInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartInterval::OneMinute => "1m",
            ChartInterval::FiveMinutes => "5m",
            ChartInterval::FifteenMinutes => "15m",
            ChartInterval::OneHour => "1h",
            ChartInterval::OneDay => "1d",
            ChartInterval::OneWeek => "1wk",
        }
    }
}

/// Decode a number that may arrive as a JSON number, a numeric string, or
/// the `"N/A"` placeholder.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse::<f64>().ok(),
        _ => None,
    })
}
