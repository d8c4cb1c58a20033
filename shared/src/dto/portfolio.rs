use serde::{Deserialize, Serialize};

/// One holding row in the user's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioEntry {
    pub id: i64,
    pub ticker: String,
    pub quantity: i64,
}

/// Response of `GET /portfolio/view`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    pub portfolio: Vec<PortfolioEntry>,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.portfolio.is_empty()
    }

    /// Total shares held for a ticker, summed across entries.
    pub fn shares_of(&self, ticker: &str) -> i64 {
        self.portfolio
            .iter()
            .filter(|entry| entry.ticker.eq_ignore_ascii_case(ticker))
            .map(|entry| entry.quantity)
            .sum()
    }
}

/// Buy/sell request body, echoed back by the backend on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockTransaction {
    pub ticker: String,
    pub quantity: i64,
}
