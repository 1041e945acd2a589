use super::{BreakEven, ChartPoint, Crossing, ProjectionRow};

/// Smallest pax count whose profit is zero or better
pub fn first_break_even_quantity(rows: &[ProjectionRow]) -> BreakEven {
    rows.iter()
        .find(|r| r.profit >= 0.0)
        .map_or(BreakEven::Never, |r| BreakEven::At(r.quantity))
}

/// Linear interpolation of the first loss-to-profit transition.
///
/// Segments where revenue and cost move in parallel cannot be interpolated
/// and are skipped. Crossings after the first one are ignored.
pub fn interpolated_break_even(points: &[ChartPoint]) -> Option<Crossing> {
    points.windows(2).find_map(|pair| {
        let (prev, curr) = (&pair[0], &pair[1]);
        if !(prev.revenue < prev.cost && curr.revenue >= curr.cost) {
            return None;
        }

        let d_rev = curr.revenue - prev.revenue;
        let d_cost = curr.cost - prev.cost;
        let denom = d_rev - d_cost;
        if denom == 0.0 {
            return None;
        }

        let ratio = (prev.cost - prev.revenue) / denom;
        Some(Crossing {
            x: prev.x + (curr.x - prev.x) * ratio,
            y: prev.revenue + d_rev * ratio,
        })
    })
}
