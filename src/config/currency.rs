use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display currency. All stored amounts are USD (canonical); conversion
/// happens only when values enter or leave the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    /// Built-in canonical-to-display rate
    pub fn default_rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }
}

/// Boundary adapter between canonical amounts and the display currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyConverter {
    currency: Currency,
    rate: f64,
}

impl CurrencyConverter {
    pub fn new(currency: Currency, rate: f64) -> Self {
        Self { currency, rate }
    }

    /// Converter using a scenario's rate overrides, falling back to built-ins
    pub fn with_overrides(currency: Currency, overrides: &HashMap<String, f64>) -> Self {
        // canonical currency is always 1:1
        let rate = match currency {
            Currency::Usd => 1.0,
            _ => overrides
                .iter()
                .find(|(code, _)| Currency::parse(code) == Some(currency))
                .map(|(_, rate)| *rate)
                .unwrap_or_else(|| currency.default_rate()),
        };
        Self::new(currency, rate)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn to_display(&self, amount: f64) -> f64 {
        amount * self.rate
    }

    /// Display amount back to canonical; a zero rate maps to 0
    pub fn from_display(&self, amount: f64) -> f64 {
        if self.rate == 0.0 {
            return 0.0;
        }
        amount / self.rate
    }

    pub fn format(&self, amount: f64) -> String {
        let value = self.to_display(amount);
        if value < 0.0 {
            format!("-{}{:.2}", self.currency.symbol(), -value)
        } else {
            format!("{}{:.2}", self.currency.symbol(), value)
        }
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new(Currency::Usd, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(Currency::parse("eur"), Some(Currency::Eur));
        assert_eq!(Currency::parse(" GBP "), Some(Currency::Gbp));
        assert_eq!(Currency::parse("JPY"), None);
    }

    #[test]
    fn test_round_trip_through_display() {
        let converter = CurrencyConverter::with_overrides(Currency::Eur, &HashMap::new());
        assert_eq!(converter.rate(), 0.92);
        assert!((converter.to_display(100.0) - 92.0).abs() < 1e-9);
        assert!((converter.from_display(92.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("gbp".to_string(), 0.8);
        overrides.insert("USD".to_string(), 3.0);

        assert_eq!(CurrencyConverter::with_overrides(Currency::Gbp, &overrides).rate(), 0.8);
        assert_eq!(CurrencyConverter::with_overrides(Currency::Usd, &overrides).rate(), 1.0);
    }

    #[test]
    fn test_zero_rate_does_not_divide() {
        let converter = CurrencyConverter::new(Currency::Eur, 0.0);
        assert_eq!(converter.from_display(50.0), 0.0);
    }

    #[test]
    fn test_format() {
        let usd = CurrencyConverter::default();
        assert_eq!(usd.format(1234.5), "$1234.50");
        assert_eq!(usd.format(-920.0), "-$920.00");

        let gbp = CurrencyConverter::new(Currency::Gbp, 0.5);
        assert_eq!(gbp.format(10.0), "£5.00");
    }
}
