pub mod report;
pub mod segments;

pub use report::{Report, ReportGenerator};

use segments::{BreakEvenSegment, MarginSegment, ProfitSegment, Segment};

/// KPI segments in display order
pub fn collect_all_segments() -> Vec<Box<dyn Segment>> {
    vec![
        Box::new(BreakEvenSegment::new(true)),
        Box::new(ProfitSegment::new(true)),
        Box::new(MarginSegment::new(true)),
    ]
}
