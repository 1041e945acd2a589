use super::{ReportInput, Segment, SegmentData, SegmentId};
use std::collections::HashMap;

/// Profit at full capacity, with the single-pax worst case alongside
pub struct ProfitSegment {
    enabled: bool,
}

impl ProfitSegment {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Segment for ProfitSegment {
    fn collect(&self, input: &ReportInput) -> Option<SegmentData> {
        if !self.enabled {
            return None;
        }

        let summary = input.summary;
        let mut metadata = HashMap::new();
        metadata.insert(
            "profit_at_capacity".to_string(),
            format!("{:.2}", summary.profit_at_capacity),
        );
        metadata.insert(
            "worst_case_profit".to_string(),
            format!("{:.2}", summary.worst_case_profit),
        );

        Some(SegmentData {
            primary: format!(
                "Max profit: {} @ {} Pax",
                input.converter.format(summary.profit_at_capacity),
                input.capacity
            ),
            secondary: format!(
                "worst case {} @ 1 Pax",
                input.converter.format(summary.worst_case_profit)
            ),
            metadata,
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::Profit
    }
}
