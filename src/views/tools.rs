//! The aggregate tools view: assistant, stock lookup, news and exchange side
//! by side, each with its own state.

use crate::core::services::{AssistantService, MarketService};
use crate::views::assistant::FinancialAssistant;
use crate::views::exchange::ExchangeConverter;
use crate::views::news::NewsSearch;
use crate::views::stock::StockLookup;

/// Form values for one round of the tools page. A slice whose input is
/// `None` is not submitted and keeps its previous state.
#[derive(Debug, Clone, Default)]
pub struct ToolsInput {
    pub question: Option<String>,
    pub symbol: Option<String>,
    pub query: Option<String>,
    pub exchange: Option<ExchangeInput>,
}

#[derive(Debug, Clone)]
pub struct ExchangeInput {
    pub amount: String,
    pub from: String,
    pub to: String,
}

pub struct ToolsDashboard<'a, A, M>
where
    A: AssistantService + ?Sized,
    M: MarketService + ?Sized,
{
    pub assistant: FinancialAssistant<'a, A>,
    pub stock: StockLookup<'a, M>,
    pub news: NewsSearch<'a, M>,
    pub exchange: ExchangeConverter<'a, M>,
}

impl<'a, A, M> ToolsDashboard<'a, A, M>
where
    A: AssistantService + ?Sized,
    M: MarketService + ?Sized,
{
    pub fn new(assistant: &'a A, market: &'a M) -> Self {
        ToolsDashboard {
            assistant: FinancialAssistant::new(assistant),
            stock: StockLookup::new(market),
            news: NewsSearch::new(market),
            exchange: ExchangeConverter::new(market),
        }
    }

    /// Fills and submits every slice present in `input`. The requests run
    /// concurrently and settle independently.
    pub async fn submit(&mut self, input: ToolsInput) {
        let ToolsDashboard {
            assistant,
            stock,
            news,
            exchange,
        } = self;
        let ToolsInput {
            question,
            symbol,
            query,
            exchange: conversion,
        } = input;

        futures::join!(
            async move {
                if let Some(question) = question {
                    assistant.question = question;
                    assistant.submit().await;
                }
            },
            async move {
                if let Some(symbol) = symbol {
                    stock.ticker = symbol;
                    stock.submit().await;
                }
            },
            async move {
                if let Some(query) = query {
                    news.query = query;
                    news.submit().await;
                }
            },
            async move {
                if let Some(ExchangeInput { amount, from, to }) = conversion {
                    exchange.amount = amount;
                    exchange.from = from;
                    exchange.to = to;
                    exchange.submit().await;
                }
            }
        );
    }
}
