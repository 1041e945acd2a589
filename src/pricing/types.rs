use serde::{Deserialize, Serialize};

/// Single cost line, amount stored in canonical currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub id: u32,
    pub name: String,
    pub amount: f64,
}

/// Ordered collection of cost lines (fixed or variable)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostCollection {
    items: Vec<CostItem>,
}

impl CostCollection {
    pub fn new(items: Vec<CostItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a zero-amount item and return its id
    pub fn add(&mut self, name: impl Into<String>) -> u32 {
        let id = self.items.iter().map(|i| i.id).max().map_or(1, |max| max + 1);
        self.items.push(CostItem {
            id,
            name: name.into(),
            amount: 0.0,
        });
        id
    }

    /// Update an item in place by id
    pub fn update(&mut self, id: u32, name: impl Into<String>, amount: f64) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.name = name.into();
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.amount).sum()
    }
}

/// Quantity range [min, max] mapped to a unit price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub min: u32,
    pub max: u32,
    pub value: f64,
}

impl PriceTier {
    pub fn new(min: u32, max: u32, value: f64) -> Self {
        Self { min, max, value }
    }

    pub fn contains(&self, quantity: u32) -> bool {
        self.min <= quantity && quantity <= self.max
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingMode {
    #[default]
    Flat,
    Tiered,
}

/// Everything the pricing strategy needs to quote a unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub mode: PricingMode,
    pub flat_price: f64,
    pub tiers: Vec<PriceTier>,
}

/// Cost collections reduced to the two scalars the engine consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBasis {
    pub fixed_cost_total: f64,
    pub variable_cost_per_unit: f64,
}

impl CostBasis {
    pub fn new(fixed_cost_total: f64, variable_cost_per_unit: f64) -> Self {
        Self {
            fixed_cost_total,
            variable_cost_per_unit,
        }
    }

    pub fn from_collections(fixed: &CostCollection, variable: &CostCollection) -> Self {
        Self::new(fixed.total(), variable.total())
    }

    /// Total cost for `quantity` pax
    pub fn total_cost(&self, quantity: u32) -> f64 {
        self.fixed_cost_total + self.variable_cost_per_unit * quantity as f64
    }
}

/// One pax level of the projection table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub quantity: u32,
    pub unit_price: f64,
    pub gross_revenue: f64,
    pub commission: f64,
    pub net_revenue: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub margin_percent: f64,
}

/// Chart sample; `x` keeps the unrounded position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub revenue: f64,
    pub cost: f64,
}

/// Interpolated break-even point on the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub x: f64,
    pub y: f64,
}

/// First profitable pax count, or never within the projected range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakEven {
    At(u32),
    Never,
}

impl BreakEven {
    pub fn quantity(&self) -> Option<u32> {
        match self {
            BreakEven::At(q) => Some(*q),
            BreakEven::Never => None,
        }
    }
}

impl std::fmt::Display for BreakEven {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakEven::At(q) => write!(f, "{} Pax", q),
            BreakEven::Never => write!(f, "Never"),
        }
    }
}

/// Headline figures derived from a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub break_even: BreakEven,
    pub profit_at_capacity: f64,
    pub worst_case_profit: f64,
    pub average_margin_percent: f64,
}
