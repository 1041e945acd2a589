use super::tiers::TierTable;
use super::{PriceTier, PricingInputs, PricingMode};

/// Unit price lookup for a pax count
pub trait PricingStrategy: Sync {
    fn unit_price(&self, quantity: u32) -> f64;

    /// Whole batch billed at the unit price of its own pax level
    fn gross_revenue(&self, quantity: u32) -> f64 {
        self.unit_price(quantity) * quantity as f64
    }
}

pub struct FlatPricing {
    price: f64,
}

impl FlatPricing {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl PricingStrategy for FlatPricing {
    fn unit_price(&self, _quantity: u32) -> f64 {
        self.price
    }
}

pub struct TieredPricing {
    table: TierTable,
}

impl TieredPricing {
    pub fn new(tiers: &[PriceTier]) -> Self {
        Self {
            table: TierTable::new(tiers),
        }
    }
}

impl PricingStrategy for TieredPricing {
    fn unit_price(&self, quantity: u32) -> f64 {
        self.table.resolve(quantity)
    }
}

impl PricingInputs {
    pub fn flat(price: f64) -> Self {
        Self {
            mode: PricingMode::Flat,
            flat_price: price,
            tiers: Vec::new(),
        }
    }

    pub fn tiered(tiers: Vec<PriceTier>) -> Self {
        Self {
            mode: PricingMode::Tiered,
            flat_price: 0.0,
            tiers,
        }
    }

    /// Strategy selected by the current mode
    pub fn strategy(&self) -> Box<dyn PricingStrategy> {
        match self.mode {
            PricingMode::Flat => Box::new(FlatPricing::new(self.flat_price)),
            PricingMode::Tiered => Box::new(TieredPricing::new(&self.tiers)),
        }
    }
}

pub fn unit_price(mode: PricingMode, flat_price: f64, tiers: &[PriceTier], quantity: u32) -> f64 {
    match mode {
        PricingMode::Flat => FlatPricing::new(flat_price).unit_price(quantity),
        PricingMode::Tiered => TieredPricing::new(tiers).unit_price(quantity),
    }
}

pub fn gross_revenue(
    mode: PricingMode,
    flat_price: f64,
    tiers: &[PriceTier],
    quantity: u32,
) -> f64 {
    unit_price(mode, flat_price, tiers, quantity) * quantity as f64
}
