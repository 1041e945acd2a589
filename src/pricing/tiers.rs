use super::PriceTier;

/// Tiers sorted by `min` once, for repeated lookups across a projection.
///
/// Resolution keeps a few quirks for compatibility with existing price
/// sheets, which are not required to partition `[1, ∞)`:
///
/// - the first sorted tier containing the quantity wins, so overlaps go to
///   the lower `min` (equal `min` keeps input order)
/// - above the last tier's `max` the last tier's price applies
/// - anything else unmatched (below every `min`, or inside a gap) gets the
///   first tier's price
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierTable {
    sorted: Vec<PriceTier>,
}

impl TierTable {
    pub fn new(tiers: &[PriceTier]) -> Self {
        let mut sorted = tiers.to_vec();
        // stable sort: ties keep caller order
        sorted.sort_by_key(|t| t.min);
        Self { sorted }
    }

    /// Unit price for `quantity`, 0 when there are no tiers
    pub fn resolve(&self, quantity: u32) -> f64 {
        let (Some(first), Some(last)) = (self.sorted.first(), self.sorted.last()) else {
            return 0.0;
        };

        if let Some(tier) = self.sorted.iter().find(|t| t.contains(quantity)) {
            return tier.value;
        }

        if quantity > last.max {
            last.value
        } else {
            first.value
        }
    }

    /// Gaps and overlaps in the tier coverage.
    ///
    /// Each tier is compared against the widest coverage seen so far, so a
    /// tier nested inside an earlier one does not open a false gap.
    pub fn irregularities(&self) -> Vec<TierIssue> {
        let mut issues = Vec::new();
        let Some((first, rest)) = self.sorted.split_first() else {
            return issues;
        };

        let mut covering = *first;
        for tier in rest {
            if tier.min <= covering.max {
                issues.push(TierIssue::Overlap {
                    left: covering,
                    right: *tier,
                });
            } else if tier.min > covering.max.saturating_add(1) {
                issues.push(TierIssue::Gap {
                    from: covering.max + 1,
                    to: tier.min - 1,
                });
            }

            if tier.max > covering.max {
                covering = *tier;
            }
        }

        issues
    }
}

/// Coverage problem found between tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TierIssue {
    /// `right` starts inside the range already covered by `left`
    Overlap { left: PriceTier, right: PriceTier },
    /// No tier covers `from..=to`
    Gap { from: u32, to: u32 },
}

impl std::fmt::Display for TierIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TierIssue::Overlap { left, right } => write!(
                f,
                "tiers {}-{} and {}-{} overlap",
                left.min, left.max, right.min, right.max
            ),
            TierIssue::Gap { from, to } => write!(f, "no tier covers {}-{}", from, to),
        }
    }
}

/// One-shot tier lookup
pub fn resolve(tiers: &[PriceTier], quantity: u32) -> f64 {
    TierTable::new(tiers).resolve(quantity)
}
