//! Budget estimation from the catalog's 3-day baseline bands.

use serde::{Deserialize, Serialize};
use wayfare_core::PartyType;

use crate::resolver::trip_data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub min: u32,
    pub max: u32,
    pub per_day_min: u32,
    pub per_day_max: u32,
}

/// Round-half-up a 3-day base figure down to a per-day figure.
fn per_day(base: u32) -> u32 {
    (base as f64 / 3.0).round() as u32
}

/// Estimate the budget range for a trip.
///
/// Reads the party-type band off the resolved catalog entry; unlike the
/// catalog getters there is no fallback to the default entry, so cities
/// without budget data yield `None`.
///
/// The per-day figure is rounded before multiplying by `trip_days`, so a
/// 3-day total only matches the raw band when the band is divisible by 3.
pub fn estimate(destination: &str, party: PartyType, trip_days: u32) -> Option<BudgetEstimate> {
    let band = trip_data(destination).estimated_budget.band(party)?;

    let per_day_min = per_day(band.min);
    let per_day_max = per_day(band.max);

    Some(BudgetEstimate {
        min: per_day_min * trip_days,
        max: per_day_max * trip_days,
        per_day_min,
        per_day_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_day_trip_reproduces_divisible_bands() {
        // Mumbai solo band is 12000..21000, both divisible by 3.
        let est = estimate("Mumbai, Maharashtra", PartyType::Solo, 3).unwrap();
        assert_eq!(est.min, 12000);
        assert_eq!(est.max, 21000);
        assert_eq!(est.per_day_min, 4000);
        assert_eq!(est.per_day_max, 7000);
    }

    #[test]
    fn test_rounding_happens_before_scaling() {
        // Manali couple band is 20000..35000; 20000/3 rounds to 6667.
        let est = estimate("Manali, Himachal Pradesh", PartyType::Couple, 3).unwrap();
        assert_eq!(est.per_day_min, 6667);
        assert_eq!(est.min, 20001);
        // 35000/3 = 11666.67 rounds to 11667
        assert_eq!(est.per_day_max, 11667);
        assert_eq!(est.max, 35001);
    }

    #[test]
    fn test_total_scales_linearly_with_days() {
        let three = estimate("Goa, Goa", PartyType::Couple, 3).unwrap();
        let six = estimate("Goa, Goa", PartyType::Couple, 6).unwrap();
        assert_eq!(six.min, three.min * 2);
        assert_eq!(six.max, three.max * 2);
        assert_eq!(six.per_day_min, three.per_day_min);
    }

    #[test]
    fn test_city_without_budget_data_yields_none() {
        assert!(estimate("Udaipur, Rajasthan", PartyType::Solo, 3).is_none());
        assert!(estimate("Udaipur, Rajasthan", PartyType::Group, 5).is_none());
    }

    #[test]
    fn test_unknown_city_uses_default_entry_bands() {
        // Resolution falls back to the default entry before the band lookup,
        // so unknown cities are still priced.
        let est = estimate("Nowhereville, Nowhere", PartyType::Solo, 3).unwrap();
        assert_eq!(est.min, 9000);
        assert_eq!(est.max, 15000);
    }

    #[test]
    fn test_zero_days_yields_zero_totals() {
        let est = estimate("Goa", PartyType::Solo, 0).unwrap();
        assert_eq!(est.min, 0);
        assert_eq!(est.max, 0);
        assert!(est.per_day_min > 0);
    }
}
