//! Quote, rate and news lookups. The backend proxies all of them.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::api::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::models::{ExchangeRate, SearchResults, StockQuote};
use crate::core::services::MarketService;

pub struct MarketApi {
    client: ApiClient,
}

impl MarketApi {
    pub fn new(client: ApiClient) -> Self {
        MarketApi { client }
    }
}

#[async_trait]
impl MarketService for MarketApi {
    #[instrument(name = "StockPrice", skip(self), fields(ticker = %ticker))]
    async fn stock_price(&self, ticker: &str) -> ApiResult<StockQuote> {
        let quote: StockQuote = self.client.get(&format!("/stock-price/{ticker}")).await?;
        debug!(price = quote.price, currency = %quote.currency, "Received quote");
        Ok(quote)
    }

    #[instrument(name = "WebSearch", skip(self))]
    async fn web_search(&self, query: &str) -> ApiResult<SearchResults> {
        self.client
            .get_with_query("/web-search", &[("query", query)])
            .await
    }

    #[instrument(name = "ExchangeRate", skip(self))]
    async fn exchange_rate(&self, base: &str, target: &str) -> ApiResult<ExchangeRate> {
        let rate: ExchangeRate = self
            .client
            .get_with_query("/exchange-rate", &[("base", base), ("target", target)])
            .await?;
        debug!(rate = rate.rate, "Received exchange rate");
        Ok(rate)
    }
}
