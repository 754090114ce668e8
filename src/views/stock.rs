use tracing::debug;

use crate::core::models::StockQuote;
use crate::core::services::MarketService;
use crate::views::history::History;
use crate::views::state::{RequestState, SubmitLabels};

pub const EMPTY_SYMBOL: &str = "Please enter a stock symbol";
pub const INVALID_SYMBOL: &str = "Invalid stock symbol format. Should be 1-5 capital letters.";
pub const LOOKUP_HISTORY_CAP: usize = 10;
pub const LOOKUP_LABELS: SubmitLabels = SubmitLabels {
    idle: "Look Up",
    busy: "Loading...",
};

/// Normalizes ticker input and checks it is 1 to 5 letters.
pub fn validate_symbol(input: &str) -> Result<String, &'static str> {
    let symbol = input.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(EMPTY_SYMBOL);
    }
    if symbol.len() > 5 || !symbol.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(INVALID_SYMBOL);
    }
    Ok(symbol)
}

pub struct StockLookup<'a, S: MarketService + ?Sized> {
    service: &'a S,
    pub ticker: String,
    state: RequestState<StockQuote>,
    history: History<StockQuote>,
}

impl<'a, S: MarketService + ?Sized> StockLookup<'a, S> {
    pub fn new(service: &'a S) -> Self {
        StockLookup {
            service,
            ticker: String::new(),
            state: RequestState::Idle,
            history: History::new(LOOKUP_HISTORY_CAP),
        }
    }

    pub fn state(&self) -> &RequestState<StockQuote> {
        &self.state
    }

    pub fn history(&self) -> &History<StockQuote> {
        &self.history
    }


    pub async fn submit(&mut self) {
        if self.state.is_loading() {
            return;
        }
        let symbol = match validate_symbol(&self.ticker) {
            Ok(symbol) => symbol,
            Err(message) => {
                self.state.fail(message);
                return;
            }
        };

        self.state.begin();
        match self.service.stock_price(&symbol).await {
            Ok(quote) => {
                debug!(symbol = %quote.symbol, "Stock lookup succeeded");
                self.history.push(quote.clone());
                self.state.succeed(quote);
            }
            Err(e) => self.state.fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::views::test_doubles::FakeBackend;

    #[test]
    fn test_validate_symbol() {
        assert_eq!(validate_symbol("AAPL"), Ok("AAPL".to_string()));
        assert_eq!(validate_symbol(" msft "), Ok("MSFT".to_string()));
        assert_eq!(validate_symbol("aapl1"), Err(INVALID_SYMBOL));
        assert_eq!(validate_symbol("GOOGLE"), Err(INVALID_SYMBOL));
        assert_eq!(validate_symbol("BRK.B"), Err(INVALID_SYMBOL));
        assert_eq!(validate_symbol("   "), Err(EMPTY_SYMBOL));
        assert_eq!(validate_symbol("É"), Err(INVALID_SYMBOL));
    }

    #[tokio::test]
    async fn test_invalid_symbol_makes_no_call() {
        let backend = FakeBackend::new();
        let mut lookup = StockLookup::new(&backend);
        lookup.ticker = "aapl1".to_string();
        lookup.submit().await;

        assert_eq!(lookup.state().error(), Some(INVALID_SYMBOL));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_error_clears_stale_quote() {
        let backend = FakeBackend::new();
        let mut lookup = StockLookup::new(&backend);
        lookup.ticker = "aapl".to_string();
        lookup.submit().await;
        assert_eq!(lookup.state().data().unwrap().symbol, "AAPL");

        backend.fail_with(ApiError::Server {
            status: 404,
            detail: Some("No price data found for symbol ZZZ".to_string()),
        });
        lookup.ticker = "ZZZ".to_string();
        lookup.submit().await;

        assert!(lookup.state().data().is_none());
        assert_eq!(
            lookup.state().error(),
            Some("No price data found for symbol ZZZ")
        );
        assert_eq!(lookup.history().len(), 1);
    }

    #[tokio::test]
    async fn test_history_is_capped_newest_first() {
        let backend = FakeBackend::new();
        let mut lookup = StockLookup::new(&backend);
        let symbols = [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L",
        ];
        for symbol in symbols {
            lookup.ticker = symbol.to_string();
            lookup.submit().await;
        }

        assert_eq!(lookup.history().len(), LOOKUP_HISTORY_CAP);
        let order: Vec<_> = lookup.history().iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(order.first(), Some(&"L"));
        assert_eq!(order.last(), Some(&"C"));
    }
}
