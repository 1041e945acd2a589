use super::segments::{ReportInput, Segment, SegmentData, SegmentId};
use crate::config::{CurrencyConverter, Scenario};
use crate::pricing::breakeven::interpolated_break_even;
use crate::pricing::calculator::{project, project_parallel, summarize};
use crate::pricing::chart::sample_scenario;
use crate::pricing::{ChartPoint, Crossing, ProjectionRow, ProjectionSummary};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything computed for one scenario, in canonical currency
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub capacity: u32,
    pub summary: ProjectionSummary,
    pub rows: Vec<ProjectionRow>,
    pub chart: Vec<ChartPoint>,
    pub crossing: Option<Crossing>,
}

impl Report {
    pub fn build(scenario: &Scenario, resolution: u32, parallel: bool) -> Self {
        let costs = scenario.cost_basis();
        let pricing = scenario.pricing();
        let capacity = scenario.effective_capacity();

        let rows = if parallel {
            project_parallel(&costs, &pricing, scenario.commission_percent, capacity)
        } else {
            project(&costs, &pricing, scenario.commission_percent, capacity)
        };
        let summary = summarize(&rows);
        let chart = sample_scenario(&costs, &pricing, capacity, resolution);
        let crossing = interpolated_break_even(&chart);

        Report {
            capacity,
            summary,
            rows,
            chart,
            crossing,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    /// Display currency of the segment texts; figures stay canonical
    currency: &'static str,
    #[serde(flatten)]
    report: &'a Report,
    segments: BTreeMap<SegmentId, SegmentData>,
}

pub struct ReportGenerator {
    converter: CurrencyConverter,
}

impl ReportGenerator {
    pub fn new(converter: CurrencyConverter) -> Self {
        Self { converter }
    }

    /// Data of every enabled segment, in the given order
    pub fn collect_segments(
        &self,
        report: &Report,
        segments: &[Box<dyn Segment>],
    ) -> Vec<(SegmentId, SegmentData)> {
        let input = ReportInput {
            summary: &report.summary,
            converter: &self.converter,
            capacity: report.capacity,
        };

        segments
            .iter()
            .filter_map(|segment| segment.collect(&input).map(|data| (segment.id(), data)))
            .collect()
    }

    /// KPI line built from the enabled segments
    pub fn headline(&self, report: &Report, segments: &[Box<dyn Segment>]) -> String {
        self.collect_segments(report, segments)
            .iter()
            .map(|(_, data)| Self::render_segment(data))
            .collect::<Vec<_>>()
            .join(" │ ")
    }

    /// Report plus segment data keyed by segment id, as pretty JSON
    pub fn json(
        &self,
        report: &Report,
        segments: &[Box<dyn Segment>],
    ) -> Result<String, serde_json::Error> {
        let document = JsonReport {
            currency: self.converter.currency().code(),
            report,
            segments: self.collect_segments(report, segments).into_iter().collect(),
        };
        serde_json::to_string_pretty(&document)
    }

    fn render_segment(data: &SegmentData) -> String {
        if data.secondary.is_empty() {
            data.primary.clone()
        } else {
            format!("{} ({})", data.primary, data.secondary)
        }
    }

    /// Per-pax projection table in display currency
    pub fn table(&self, rows: &[ProjectionRow]) -> String {
        let mut lines = vec![format!(
            "{:>5} {:>12} {:>14} {:>14} {:>14} {:>14} {:>9}",
            "Pax", "Unit", "Gross", "Net", "Cost", "Profit", "Margin"
        )];

        for row in rows {
            lines.push(format!(
                "{:>5} {:>12} {:>14} {:>14} {:>14} {:>14} {:>8.1}%",
                row.quantity,
                self.converter.format(row.unit_price),
                self.converter.format(row.gross_revenue),
                self.converter.format(row.net_revenue),
                self.converter.format(row.total_cost),
                self.converter.format(row.profit),
                row.margin_percent
            ));
        }

        lines.join("\n")
    }

    /// Chart samples as plain rows, with the interpolated break-even if any
    pub fn chart(&self, points: &[ChartPoint], crossing: Option<&Crossing>) -> String {
        let mut lines = vec![format!("{:>8} {:>14} {:>14}", "x", "Revenue", "Cost")];

        for point in points {
            lines.push(format!(
                "{:>8.2} {:>14} {:>14}",
                point.x,
                self.converter.format(point.revenue),
                self.converter.format(point.cost)
            ));
        }

        match crossing {
            Some(c) => lines.push(format!(
                "BEP ≈ {:.2} Pax at {}",
                c.x,
                self.converter.format(c.y)
            )),
            None => lines.push("BEP: no crossing in range".to_string()),
        }

        lines.join("\n")
    }
}
