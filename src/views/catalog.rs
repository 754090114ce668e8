//! Fixed choices offered next to the lookup forms.

pub const COMMON_STOCKS: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("META", "Meta Platforms Inc."),
    ("TSLA", "Tesla Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
];

pub const CURRENCIES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("AUD", "Australian Dollar"),
    ("CAD", "Canadian Dollar"),
    ("CHF", "Swiss Franc"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("NZD", "New Zealand Dollar"),
    ("SEK", "Swedish Krona"),
    ("KRW", "South Korean Won"),
    ("SGD", "Singapore Dollar"),
    ("NOK", "Norwegian Krone"),
    ("MXN", "Mexican Peso"),
    ("HKD", "Hong Kong Dollar"),
    ("TRY", "Turkish Lira"),
    ("RUB", "Russian Ruble"),
];

pub const SUGGESTED_QUERIES: &[&str] = &[
    "market trends",
    "cryptocurrency news",
    "stock market analysis",
    "economic forecast",
    "investment strategies",
    "financial regulations",
    "global markets",
    "tech stocks",
];

pub fn company_name(symbol: &str) -> Option<&'static str> {
    COMMON_STOCKS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| *name)
}

pub fn is_supported_currency(code: &str) -> bool {
    CURRENCIES.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert_eq!(company_name("NVDA"), Some("NVIDIA Corporation"));
        assert_eq!(company_name("ZZZ"), None);
        assert!(is_supported_currency("INR"));
        assert!(!is_supported_currency("inr"));
        assert_eq!(CURRENCIES.len(), 18);
    }
}
