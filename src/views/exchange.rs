//! Currency converter with a history of recent conversions.

use tracing::debug;

use crate::core::services::MarketService;
use crate::views::catalog::is_supported_currency;
use crate::views::history::History;
use crate::views::state::{RequestState, SubmitLabels};
use crate::views::{INVALID_AMOUNT, parse_amount};

pub const SAME_CURRENCIES: &str = "Please select different currencies";
pub const CONVERSION_HISTORY_CAP: usize = 10;
pub const CONVERT_LABELS: SubmitLabels = SubmitLabels {
    idle: "Convert",
    busy: "Converting...",
};

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    pub result: f64,
    pub timestamp: String,
}

impl Conversion {
    pub fn amount_label(&self) -> String {
        format!("{:.2} {}", self.amount, self.from)
    }

    pub fn result_label(&self) -> String {
        format!("{:.2} {}", self.result, self.to)
    }

    pub fn rate_line(&self) -> String {
        format!("1 {} = {:.4} {}", self.from, self.rate, self.to)
    }
}

pub struct ExchangeConverter<'a, S: MarketService + ?Sized> {
    service: &'a S,
    pub amount: String,
    pub from: String,
    pub to: String,
    state: RequestState<Conversion>,
    history: History<Conversion>,
}

impl<'a, S: MarketService + ?Sized> ExchangeConverter<'a, S> {
    pub fn new(service: &'a S) -> Self {
        ExchangeConverter {
            service,
            amount: "1".to_string(),
            from: "USD".to_string(),
            to: "EUR".to_string(),
            state: RequestState::Idle,
            history: History::new(CONVERSION_HISTORY_CAP),
        }
    }

    pub fn state(&self) -> &RequestState<Conversion> {
        &self.state
    }

    pub fn history(&self) -> &History<Conversion> {
        &self.history
    }


    fn validate(&self) -> Result<(String, String, f64), String> {
        let from = self.from.trim().to_uppercase();
        let to = self.to.trim().to_uppercase();
        if from == to {
            return Err(SAME_CURRENCIES.to_string());
        }
        let amount = parse_amount(&self.amount).ok_or_else(|| INVALID_AMOUNT.to_string())?;
        for code in [&from, &to] {
            if !is_supported_currency(code) {
                return Err(format!("Unsupported currency: {code}"));
            }
        }
        Ok((from, to, amount))
    }

    pub async fn submit(&mut self) {
        if self.state.is_loading() {
            return;
        }
        let (from, to, amount) = match self.validate() {
            Ok(input) => input,
            Err(message) => {
                self.state.fail(message);
                return;
            }
        };

        self.state.begin();
        match self.service.exchange_rate(&from, &to).await {
            Ok(rate) => {
                let conversion = Conversion {
                    from,
                    to,
                    amount,
                    rate: rate.rate,
                    result: amount * rate.rate,
                    timestamp: rate.timestamp,
                };
                debug!(result = conversion.result, "Converted");
                self.history.push(conversion.clone());
                self.state.succeed(conversion);
            }
            Err(e) => self.state.fail(e.to_string()),
        }
    }
}
