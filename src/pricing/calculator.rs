use super::breakeven::first_break_even_quantity;
use super::strategy::PricingStrategy;
use super::{CostBasis, PricingInputs, ProjectionRow, ProjectionSummary};
use rayon::prelude::*;

/// Compute the financial row for a single pax level
pub fn project_row(
    strategy: &dyn PricingStrategy,
    costs: &CostBasis,
    commission_percent: f64,
    quantity: u32,
) -> ProjectionRow {
    let unit_price = strategy.unit_price(quantity);
    let gross_revenue = unit_price * quantity as f64;
    let commission = gross_revenue * commission_percent / 100.0;
    let net_revenue = gross_revenue - commission;
    let total_cost = costs.total_cost(quantity);
    let profit = net_revenue - total_cost;

    // Margin is undefined without positive net revenue
    let margin_percent = if net_revenue > 0.0 {
        (profit / net_revenue) * 100.0
    } else {
        0.0
    };

    ProjectionRow {
        quantity,
        unit_price,
        gross_revenue,
        commission,
        net_revenue,
        total_cost,
        profit,
        margin_percent,
    }
}

/// Rows for 1..=max_quantity in ascending order
pub fn project(
    costs: &CostBasis,
    pricing: &PricingInputs,
    commission_percent: f64,
    max_quantity: u32,
) -> Vec<ProjectionRow> {
    let strategy = pricing.strategy();
    (1..=max_quantity)
        .map(|q| project_row(strategy.as_ref(), costs, commission_percent, q))
        .collect()
}

/// Same rows as [`project`], computed on the rayon pool
pub fn project_parallel(
    costs: &CostBasis,
    pricing: &PricingInputs,
    commission_percent: f64,
    max_quantity: u32,
) -> Vec<ProjectionRow> {
    let strategy = pricing.strategy();
    (1..=max_quantity)
        .into_par_iter()
        .map(|q| project_row(strategy.as_ref(), costs, commission_percent, q))
        .collect()
}

/// Headline figures: break-even, capacity/worst-case profit, average margin
pub fn summarize(rows: &[ProjectionRow]) -> ProjectionSummary {
    let average_margin_percent = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|r| r.margin_percent).sum::<f64>() / rows.len() as f64
    };

    ProjectionSummary {
        break_even: first_break_even_quantity(rows),
        profit_at_capacity: rows.last().map_or(0.0, |r| r.profit),
        worst_case_profit: rows.first().map_or(0.0, |r| r.profit),
        average_margin_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{BreakEven, PriceTier};

    fn tour_costs() -> CostBasis {
        // 800 + 200 fixed, 25 + 15 per pax
        CostBasis::new(1000.0, 40.0)
    }

    #[test]
    fn test_row_count_and_quantities() {
        let rows = project(&tour_costs(), &PricingInputs::flat(150.0), 20.0, 50);
        assert_eq!(rows.len(), 50);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.quantity, i as u32 + 1);
        }
    }

    #[test]
    fn test_zero_capacity_is_empty() {
        assert!(project(&tour_costs(), &PricingInputs::flat(150.0), 20.0, 0).is_empty());
    }

    #[test]
    fn test_single_pax_row() {
        let rows = project(&tour_costs(), &PricingInputs::flat(150.0), 20.0, 1);
        let row = &rows[0];
        assert_eq!(row.gross_revenue, 150.0);
        assert_eq!(row.commission, 30.0);
        assert_eq!(row.net_revenue, 120.0);
        assert_eq!(row.total_cost, 1040.0);
        assert_eq!(row.profit, -920.0);
        assert!((row.margin_percent - (-920.0 / 120.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_margin_zero_guard() {
        let rows = project(&tour_costs(), &PricingInputs::flat(0.0), 20.0, 5);
        for row in &rows {
            assert_eq!(row.net_revenue, 0.0);
            assert_eq!(row.margin_percent, 0.0);
            assert!(!row.margin_percent.is_nan());
        }

        // negative net revenue also reports zero margin
        let rows = project(&tour_costs(), &PricingInputs::flat(-5.0), 0.0, 3);
        assert!(rows.iter().all(|r| r.margin_percent == 0.0));
    }

    #[test]
    fn test_tiered_projection() {
        let pricing = PricingInputs::tiered(vec![
            PriceTier::new(1, 10, 180.0),
            PriceTier::new(11, 20, 160.0),
            PriceTier::new(21, 999, 140.0),
        ]);
        let rows = project(&tour_costs(), &pricing, 0.0, 25);
        assert_eq!(rows[9].unit_price, 180.0);
        assert_eq!(rows[10].unit_price, 160.0);
        assert_eq!(rows[10].gross_revenue, 160.0 * 11.0);
        assert_eq!(rows[24].unit_price, 140.0);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let pricing = PricingInputs::flat(150.0);
        let first = project(&tour_costs(), &pricing, 20.0, 40);
        let second = project(&tour_costs(), &pricing, 20.0, 40);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pricing = PricingInputs::tiered(vec![
            PriceTier::new(1, 10, 180.0),
            PriceTier::new(11, 999, 150.0),
        ]);
        let sequential = project(&tour_costs(), &pricing, 12.5, 300);
        let parallel = project_parallel(&tour_costs(), &pricing, 12.5, 300);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_summarize() {
        let rows = project(&tour_costs(), &PricingInputs::flat(150.0), 20.0, 50);
        let summary = summarize(&rows);

        // net 120 - 40 variable = 80 per pax against 1000 fixed
        assert_eq!(summary.break_even, BreakEven::At(13));
        assert_eq!(summary.worst_case_profit, -920.0);
        assert_eq!(summary.profit_at_capacity, 50.0 * 80.0 - 1000.0);

        let expected_avg =
            rows.iter().map(|r| r.margin_percent).sum::<f64>() / rows.len() as f64;
        assert!((summary.average_margin_percent - expected_avg).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.break_even, BreakEven::Never);
        assert_eq!(summary.profit_at_capacity, 0.0);
        assert_eq!(summary.worst_case_profit, 0.0);
        assert_eq!(summary.average_margin_percent, 0.0);
    }
}
