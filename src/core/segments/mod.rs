pub mod break_even;
pub mod margin;
pub mod profit;

use crate::config::CurrencyConverter;
use crate::pricing::ProjectionSummary;
use serde::Serialize;
use std::collections::HashMap;

/// What every KPI segment renders from
pub struct ReportInput<'a> {
    pub summary: &'a ProjectionSummary,
    pub converter: &'a CurrencyConverter,
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SegmentId {
    BreakEven,
    Profit,
    Margin,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SegmentData {
    pub primary: String,
    pub secondary: String,
    pub metadata: HashMap<String, String>,
}

pub trait Segment {
    fn collect(&self, input: &ReportInput) -> Option<SegmentData>;
    fn id(&self) -> SegmentId;
}

// Re-export all segment types
pub use break_even::BreakEvenSegment;
pub use margin::MarginSegment;
pub use profit::ProfitSegment;
