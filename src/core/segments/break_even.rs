use super::{ReportInput, Segment, SegmentData, SegmentId};
use crate::pricing::BreakEven;
use std::collections::HashMap;

pub struct BreakEvenSegment {
    enabled: bool,
}

impl BreakEvenSegment {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Segment for BreakEvenSegment {
    fn collect(&self, input: &ReportInput) -> Option<SegmentData> {
        if !self.enabled {
            return None;
        }

        let mut metadata = HashMap::new();
        let secondary = match input.summary.break_even {
            BreakEven::At(quantity) => {
                metadata.insert("quantity".to_string(), quantity.to_string());
                let share = quantity as f64 / input.capacity.max(1) as f64 * 100.0;
                format!("{:.0}% of capacity", share)
            }
            BreakEven::Never => {
                metadata.insert("status".to_string(), "never".to_string());
                format!("not within {} Pax", input.capacity)
            }
        };

        Some(SegmentData {
            primary: format!("Break-even: {}", input.summary.break_even),
            secondary,
            metadata,
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::BreakEven
    }
}
