use super::{ReportInput, Segment, SegmentData, SegmentId};
use std::collections::HashMap;

pub struct MarginSegment {
    enabled: bool,
}

impl MarginSegment {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Segment for MarginSegment {
    fn collect(&self, input: &ReportInput) -> Option<SegmentData> {
        if !self.enabled {
            return None;
        }

        let average = input.summary.average_margin_percent;
        let mut metadata = HashMap::new();
        metadata.insert("average_margin".to_string(), average.to_string());

        Some(SegmentData {
            primary: format!("Avg margin: {}%", average.round() as i64),
            secondary: format!("across 1-{} Pax", input.capacity),
            metadata,
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::Margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CurrencyConverter;
    use crate::pricing::{BreakEven, ProjectionSummary};

    #[test]
    fn test_margin_rounds_to_whole_percent() {
        let summary = ProjectionSummary {
            break_even: BreakEven::Never,
            profit_at_capacity: 0.0,
            worst_case_profit: 0.0,
            average_margin_percent: -41.6,
        };
        let converter = CurrencyConverter::default();
        let input = ReportInput {
            summary: &summary,
            converter: &converter,
            capacity: 20,
        };

        let data = MarginSegment::new(true).collect(&input).unwrap();
        assert_eq!(data.primary, "Avg margin: -42%");
        assert_eq!(data.secondary, "across 1-20 Pax");
    }
}
