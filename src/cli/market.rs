//! Stock lookup, currency conversion and news search pages.

use anyhow::Result;
use comfy_table::Cell;

use super::{ensure_settled, ui};
use crate::core::models::{SearchResults, StockQuote};
use crate::core::services::MarketService;
use crate::views::catalog::{COMMON_STOCKS, SUGGESTED_QUERIES, company_name};
use crate::views::exchange::{CONVERT_LABELS, ExchangeConverter};
use crate::views::news::{NewsSearch, SEARCH_LABELS};
use crate::views::stock::{LOOKUP_LABELS, StockLookup};

impl StockQuote {
    pub fn display(&self) -> String {
        let name = company_name(&self.symbol).unwrap_or("");
        format!(
            "{} {}\n{}: {}\n{}",
            ui::style_text(&self.symbol, ui::StyleType::Title),
            name,
            ui::style_text("Price", ui::StyleType::TotalLabel),
            ui::style_text(
                &format!("{:.2} {}", self.price, self.currency),
                ui::StyleType::TotalValue
            ),
            ui::style_text(&format!("As of {}", self.timestamp), ui::StyleType::Subtle)
        )
    }
}

impl<S: MarketService + ?Sized> StockLookup<'_, S> {
    pub fn display(&self) -> String {
        let mut sections = Vec::new();
        if let Some(banner) = ui::error_banner(self.state()) {
            sections.push(banner);
        }
        if let Some(quote) = self.state().data() {
            sections.push(quote.display());
        }

        if self.history().is_empty() {
            let popular: Vec<&str> = COMMON_STOCKS.iter().map(|(symbol, _)| *symbol).collect();
            sections.push(format!(
                "{} {}",
                ui::style_text("Popular:", ui::StyleType::Subtle),
                popular.join(", ")
            ));
        } else {
            let mut table = ui::new_styled_table();
            table.set_header(vec![
                ui::header_cell("Symbol"),
                ui::header_cell("Company"),
                ui::header_cell("Price"),
                ui::header_cell("Time"),
            ]);
            for quote in self.history().iter() {
                table.add_row(vec![
                    Cell::new(&quote.symbol),
                    Cell::new(company_name(&quote.symbol).unwrap_or("-")),
                    Cell::new(format!("{:.2} {}", quote.price, quote.currency)),
                    Cell::new(&quote.timestamp),
                ]);
            }
            sections.push(format!(
                "{}\n{table}",
                ui::style_text("Recent Lookups", ui::StyleType::TotalLabel)
            ));
        }
        sections.join("\n\n")
    }
}

impl<S: MarketService + ?Sized> ExchangeConverter<'_, S> {
    pub fn display(&self) -> String {
        let mut sections = Vec::new();
        if let Some(banner) = ui::error_banner(self.state()) {
            sections.push(banner);
        }
        if let Some(conversion) = self.state().data() {
            sections.push(format!(
                "{} = {}\n{}",
                conversion.amount_label(),
                ui::style_text(&conversion.result_label(), ui::StyleType::TotalValue),
                ui::style_text(&conversion.rate_line(), ui::StyleType::Subtle)
            ));
        }
        if !self.history().is_empty() {
            let mut table = ui::new_styled_table();
            table.set_header(vec![
                ui::header_cell("Amount"),
                ui::header_cell("Result"),
                ui::header_cell("Rate"),
                ui::header_cell("Time"),
            ]);
            for conversion in self.history().iter() {
                table.add_row(vec![
                    Cell::new(conversion.amount_label()),
                    Cell::new(conversion.result_label()),
                    Cell::new(format!("{:.4}", conversion.rate)),
                    Cell::new(&conversion.timestamp),
                ]);
            }
            sections.push(format!(
                "{}\n{table}",
                ui::style_text("Recent Conversions", ui::StyleType::TotalLabel)
            ));
        }
        sections.join("\n\n")
    }
}

impl SearchResults {
    pub fn display(&self) -> String {
        let mut output = ui::style_text(
            &format!("Results for \"{}\"", self.query),
            ui::StyleType::TotalLabel,
        );
        if self.results.is_empty() {
            output.push('\n');
            output.push_str(&ui::style_text("No results found.", ui::StyleType::Subtle));
        }
        for (i, result) in self.results.iter().enumerate() {
            output.push_str(&format!("\n{}. {result}", i + 1));
        }
        output
    }
}

impl<S: MarketService + ?Sized> NewsSearch<'_, S> {
    pub fn display(&self) -> String {
        let mut sections = Vec::new();
        if let Some(banner) = ui::error_banner(self.state()) {
            sections.push(banner);
        }
        if let Some(results) = self.state().data() {
            sections.push(results.display());
        }
        if self.history().is_empty() {
            sections.push(format!(
                "{} {}",
                ui::style_text("Try:", ui::StyleType::Subtle),
                SUGGESTED_QUERIES.join(", ")
            ));
        } else {
            let recent: Vec<&str> = self.history().iter().map(|s| s.query.as_str()).collect();
            sections.push(format!(
                "{} {}",
                ui::style_text("Recent searches:", ui::StyleType::Subtle),
                recent.join(", ")
            ));
        }
        sections.join("\n\n")
    }
}

/// Looks up each symbol in turn; a failed symbol is reported inline and the
/// rest still run.
pub async fn stock<S: MarketService + ?Sized>(service: &S, symbols: &[String]) -> Result<()> {
    let mut lookup = StockLookup::new(service);
    if let [symbol] = symbols {
        lookup.ticker = symbol.clone();
        ui::while_loading(LOOKUP_LABELS, lookup.submit()).await;
        ensure_settled(lookup.state())?;
        println!("{}", lookup.display());
        return Ok(());
    }

    for symbol in symbols {
        lookup.ticker = symbol.clone();
        ui::while_loading(LOOKUP_LABELS, lookup.submit()).await;
        if let Some(banner) = ui::error_banner(lookup.state()) {
            println!("{symbol}: {banner}");
        }
    }
    println!("{}", lookup.display());
    Ok(())
}

pub async fn exchange<S: MarketService + ?Sized>(
    service: &S,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<()> {
    let mut converter = ExchangeConverter::new(service);
    converter.amount = amount.to_string();
    converter.from = from.to_string();
    converter.to = to.to_string();
    ui::while_loading(CONVERT_LABELS, converter.submit()).await;
    ensure_settled(converter.state())?;
    println!("{}", converter.display());
    Ok(())
}

pub async fn news<S: MarketService + ?Sized>(service: &S, query: &str) -> Result<()> {
    let mut search = NewsSearch::new(service);
    search.query = query.to_string();
    ui::while_loading(SEARCH_LABELS, search.submit()).await;
    ensure_settled(search.state())?;
    println!("{}", search.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ApiError, NO_RESPONSE_MESSAGE};
    use crate::views::exchange::SAME_CURRENCIES;
    use crate::views::test_doubles::FakeBackend;

    #[tokio::test]
    async fn test_stock_display_shows_company_and_history() {
        let backend = FakeBackend::new();
        let mut lookup = StockLookup::new(&backend);
        assert!(lookup.display().contains("AAPL"));

        lookup.ticker = "aapl".to_string();
        lookup.submit().await;
        let output = lookup.display();
        assert!(output.contains("Apple Inc."));
        assert!(output.contains("123.46 USD"));
        assert!(output.contains("Recent Lookups"));
    }

    #[tokio::test]
    async fn test_exchange_display() {
        let backend = FakeBackend::new();
        let mut converter = ExchangeConverter::new(&backend);
        converter.amount = "10".to_string();
        converter.submit().await;

        let output = converter.display();
        assert!(output.contains("10.00 USD"));
        assert!(output.contains("9.20 EUR"));
        assert!(output.contains("1 USD = 0.9200 EUR"));
    }

    #[tokio::test]
    async fn test_news_display_numbers_results() {
        let backend = FakeBackend::new();
        let mut search = NewsSearch::new(&backend);
        assert!(search.display().contains("market trends"));

        search.query = "bonds".to_string();
        search.submit().await;
        let output = search.display();
        assert!(output.contains("1. Latest financial news related to: bonds"));
        assert!(output.contains("Recent searches:"));
    }

    #[tokio::test]
    async fn test_exchange_command_fails_on_same_currency() {
        let backend = FakeBackend::new();
        let err = exchange(&backend, "5", "EUR", "EUR").await.unwrap_err();
        assert_eq!(err.to_string(), SAME_CURRENCIES);
    }

    #[tokio::test]
    async fn test_single_stock_failure_is_an_error() {
        let backend = FakeBackend::new();
        backend.fail_with(ApiError::NoResponse {
            reason: "refused".to_string(),
        });
        let err = stock(&backend, &["MSFT".to_string()]).await.unwrap_err();
        assert_eq!(err.to_string(), NO_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_many_stocks_report_inline() {
        let backend = FakeBackend::new();
        let symbols = vec!["MSFT".to_string(), "toolong".to_string()];
        assert!(stock(&backend, &symbols).await.is_ok());
        assert_eq!(backend.calls(), 1);
    }
}
