use super::{ChartPoint, CostBasis, PricingInputs};

/// Steps between 0 and the chart limit
pub const DEFAULT_RESOLUTION: u32 = 30;

/// Smallest x-range the chart ever shows
pub const MIN_CHART_LIMIT: u32 = 10;

/// Evenly spaced revenue/cost samples over `[0, max(max_quantity, 10)]`.
///
/// Positions keep their fractional x for smooth plotting, while revenue and
/// cost come from the next whole pax count. At x = 0 only fixed cost applies.
pub fn sample<R, C>(
    max_quantity: u32,
    resolution: u32,
    fixed_cost: f64,
    revenue_fn: R,
    cost_fn: C,
) -> Vec<ChartPoint>
where
    R: Fn(u32) -> f64,
    C: Fn(u32) -> f64,
{
    let steps = resolution.max(1);
    let limit = max_quantity.max(MIN_CHART_LIMIT) as f64;

    (0..=steps)
        .map(|i| {
            // multiply first so whole-pax positions stay exact
            let x = limit * i as f64 / steps as f64;
            if x <= 0.0 {
                return ChartPoint {
                    x: 0.0,
                    revenue: 0.0,
                    cost: fixed_cost,
                };
            }
            let quantity = x.ceil() as u32;
            ChartPoint {
                x,
                revenue: revenue_fn(quantity),
                cost: cost_fn(quantity),
            }
        })
        .collect()
}

/// Chart samples for a scenario: gross revenue against total cost
pub fn sample_scenario(
    costs: &CostBasis,
    pricing: &PricingInputs,
    max_quantity: u32,
    resolution: u32,
) -> Vec<ChartPoint> {
    let strategy = pricing.strategy();
    sample(
        max_quantity,
        resolution,
        costs.fixed_cost_total,
        |q| strategy.gross_revenue(q),
        |q| costs.total_cost(q),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculator::project;
    use crate::pricing::PriceTier;

    fn tour_costs() -> CostBasis {
        CostBasis::new(1000.0, 40.0)
    }

    #[test]
    fn test_point_count_and_range() {
        let points = sample_scenario(&tour_costs(), &PricingInputs::flat(150.0), 50, 30);
        assert_eq!(points.len(), 31);
        assert_eq!(points[0].x, 0.0);
        assert!((points[30].x - 50.0).abs() < 1e-9);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_origin_point_is_fixed_cost_only() {
        for (capacity, price) in [(1, 0.0), (50, 150.0), (500, -3.0)] {
            let points = sample_scenario(&tour_costs(), &PricingInputs::flat(price), capacity, 30);
            assert_eq!(
                points[0],
                ChartPoint {
                    x: 0.0,
                    revenue: 0.0,
                    cost: 1000.0
                }
            );
        }
    }

    #[test]
    fn test_minimum_limit_for_small_capacity() {
        let points = sample_scenario(&tour_costs(), &PricingInputs::flat(150.0), 3, 30);
        let last = points.last().expect("points");
        assert!((last.x - 10.0).abs() < 1e-9);
        assert_eq!(last.revenue, 1500.0);
    }

    #[test]
    fn test_fractional_x_uses_ceiled_quantity() {
        // limit 10 over 4 steps: x = 2.5 evaluated at 3 pax
        let points = sample(4, 4, 100.0, |q| q as f64 * 10.0, |q| 100.0 + q as f64);
        assert_eq!(points[1].x, 2.5);
        assert_eq!(points[1].revenue, 30.0);
        assert_eq!(points[1].cost, 103.0);
    }

    #[test]
    fn test_zero_resolution_yields_endpoints() {
        let points = sample(20, 0, 5.0, |q| q as f64, |q| q as f64);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].x, 20.0);
    }

    #[test]
    fn test_agrees_with_projection_at_integer_points() {
        let pricing = PricingInputs::tiered(vec![
            PriceTier::new(1, 10, 180.0),
            PriceTier::new(11, 20, 160.0),
            PriceTier::new(21, 999, 140.0),
        ]);
        let rows = project(&tour_costs(), &pricing, 0.0, 30);
        let points = sample_scenario(&tour_costs(), &pricing, 30, 30);

        for point in points.iter().skip(1) {
            if point.x.fract() == 0.0 {
                let row = &rows[point.x as usize - 1];
                assert_eq!(point.revenue, row.gross_revenue);
                assert_eq!(point.cost, row.total_cost);
            }
        }
    }
}
