pub mod breakeven;
pub mod calculator;
pub mod chart;
pub mod strategy;
pub mod tiers;
pub mod types;

pub use types::{
    BreakEven, ChartPoint, CostBasis, CostCollection, CostItem, Crossing, PriceTier,
    PricingInputs, PricingMode, ProjectionRow, ProjectionSummary,
};
