use super::currency::{Currency, CurrencyConverter};
use super::defaults::MAX_CAPACITY;
use super::loader::ConfigError;
use crate::cli::Cli;
use crate::debug_println;
use crate::pricing::{CostBasis, CostCollection, PriceTier, PricingInputs, PricingMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tour scenario: costs, pricing and capacity, amounts in USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub fixed_costs: CostCollection,
    #[serde(default)]
    pub variable_costs: CostCollection,
    pub capacity: u32,
    #[serde(default)]
    pub pricing_mode: PricingMode,
    #[serde(default)]
    pub flat_price: f64,
    #[serde(default)]
    pub tiers: Vec<PriceTier>,
    #[serde(default)]
    pub commission_percent: f64,
    #[serde(default)]
    pub currency: Currency,
    /// Optional canonical-to-display rate overrides keyed by currency code
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rates: HashMap<String, f64>,
}

impl Scenario {
    pub fn cost_basis(&self) -> CostBasis {
        CostBasis::from_collections(&self.fixed_costs, &self.variable_costs)
    }

    pub fn pricing(&self) -> PricingInputs {
        PricingInputs {
            mode: self.pricing_mode,
            flat_price: self.flat_price,
            tiers: self.tiers.clone(),
        }
    }

    pub fn converter(&self) -> CurrencyConverter {
        CurrencyConverter::with_overrides(self.currency, &self.rates)
    }

    /// Capacity as the engine sees it, kept within 1..=MAX_CAPACITY
    pub fn effective_capacity(&self) -> u32 {
        self.capacity.clamp(1, MAX_CAPACITY)
    }

    /// Apply PAXLINE_CAPACITY / PAXLINE_COMMISSION overrides
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; unparsable values are ignored
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(capacity) = lookup("PAXLINE_CAPACITY") {
            match capacity.trim().parse::<u32>() {
                Ok(value) => self.capacity = value,
                Err(_) => debug_println!("Ignoring PAXLINE_CAPACITY={}", capacity),
            }
        }

        if let Some(commission) = lookup("PAXLINE_COMMISSION") {
            match commission.trim().parse::<f64>() {
                Ok(value) => self.commission_percent = value,
                Err(_) => debug_println!("Ignoring PAXLINE_COMMISSION={}", commission),
            }
        }
    }

    /// Apply command-line overrides; prices arrive in display currency
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(code) = &cli.currency {
            self.currency = Currency::parse(code)
                .ok_or_else(|| ConfigError::Invalid(format!("unsupported currency: {}", code)))?;
            debug_println!("Display currency {}", self.currency.code());
        }

        if let Some(capacity) = cli.capacity {
            self.capacity = capacity;
        }

        if let Some(commission) = cli.commission {
            self.commission_percent = commission;
        }

        if let Some(price) = cli.price {
            self.pricing_mode = PricingMode::Flat;
            self.flat_price = self.converter().from_display(price);
        } else if cli.tiered {
            self.pricing_mode = PricingMode::Tiered;
        }

        Ok(())
    }
}
