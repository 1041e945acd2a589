use super::currency::Currency;
use super::types::Scenario;
use crate::pricing::{CostCollection, CostItem, PriceTier, PricingMode};
use std::collections::HashMap;

pub const DEFAULT_CAPACITY: u32 = 50;
/// Largest pax count a projection is built for
pub const MAX_CAPACITY: u32 = 100_000;
pub const DEFAULT_FLAT_PRICE: f64 = 150.0;
pub const DEFAULT_COMMISSION_PERCENT: f64 = 20.0;

fn item(id: u32, name: &str, amount: f64) -> CostItem {
    CostItem {
        id,
        name: name.to_string(),
        amount,
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            fixed_costs: CostCollection::new(vec![
                item(1, "Bus Rental (Day)", 800.0),
                item(2, "Guide Fee", 200.0),
            ]),
            variable_costs: CostCollection::new(vec![
                item(1, "Lunch per person", 25.0),
                item(2, "Ticket Entry", 15.0),
            ]),
            capacity: DEFAULT_CAPACITY,
            pricing_mode: PricingMode::Flat,
            flat_price: DEFAULT_FLAT_PRICE,
            tiers: vec![
                PriceTier::new(1, 10, 180.0),
                PriceTier::new(11, 20, 160.0),
                PriceTier::new(21, 999, 140.0),
            ],
            commission_percent: DEFAULT_COMMISSION_PERCENT,
            currency: Currency::Usd,
            rates: HashMap::new(),
        }
    }
}
