//! Catalog schema: plain serializable records keyed by canonical city name.
//!
//! The catalog is mock booking data. It is built once, read-only and
//! process-wide; nothing mutates it at runtime.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use wayfare_core::{DayPlan, PartyType};

use crate::data;

/// A lodging option: used for hotels, airbnb-style stays and resorts alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    pub name: String,
    pub area: String,
    /// Price per night in the catalog currency.
    pub price_per_night: u32,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub airline: String,
    pub from: String,
    pub depart: String,
    pub arrive: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRoute {
    pub name: String,
    pub from: String,
    pub depart: String,
    pub arrive: String,
    pub class: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusRoute {
    pub operator: String,
    pub from: String,
    pub depart: String,
    pub duration: String,
    pub kind: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub price_for_two: u32,
    pub must_try: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPackage {
    pub name: String,
    pub days: u32,
    pub price_per_person: u32,
    pub highlights: String,
}

/// Min/max budget figures calibrated for a 3-day trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBand {
    pub min: u32,
    pub max: u32,
}

/// 3-day budget bands per party type. Bands are optional per city; the
/// estimator surfaces a missing band as an absent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimatedBudget {
    pub solo: Option<BudgetBand>,
    pub couple: Option<BudgetBand>,
    pub group: Option<BudgetBand>,
}

impl EstimatedBudget {
    pub fn band(&self, party: PartyType) -> Option<BudgetBand> {
        match party {
            PartyType::Solo => self.solo,
            PartyType::Couple => self.couple,
            PartyType::Group => self.group,
        }
    }
}

/// Everything the catalog knows about one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub hotels: Vec<Stay>,
    pub flights: Vec<Flight>,
    pub trains: Vec<TrainRoute>,
    pub buses: Vec<BusRoute>,
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub airbnb: Vec<Stay>,
    #[serde(default)]
    pub resorts: Vec<Stay>,
    #[serde(default)]
    pub tour_packages: Vec<TourPackage>,
    pub day_plans: Vec<DayPlan>,
    #[serde(default)]
    pub estimated_budget: EstimatedBudget,
}

/// The process-wide catalog, built on first access.
pub fn catalog() -> &'static HashMap<&'static str, CatalogEntry> {
    static CATALOG: OnceLock<HashMap<&'static str, CatalogEntry>> = OnceLock::new();
    CATALOG.get_or_init(data::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DEFAULT_KEY;

    #[test]
    fn test_default_entry_fully_populated() {
        let entry = catalog().get(DEFAULT_KEY).expect("default entry must exist");
        assert!(!entry.hotels.is_empty());
        assert!(!entry.flights.is_empty());
        assert!(!entry.trains.is_empty());
        assert!(!entry.buses.is_empty());
        assert!(!entry.restaurants.is_empty());
        assert!(!entry.airbnb.is_empty());
        assert!(!entry.resorts.is_empty());
        assert!(!entry.tour_packages.is_empty());
        assert!(!entry.day_plans.is_empty());
        assert!(entry.estimated_budget.solo.is_some());
        assert!(entry.estimated_budget.couple.is_some());
        assert!(entry.estimated_budget.group.is_some());
    }

    #[test]
    fn test_day_plans_ordered() {
        for (city, entry) in catalog() {
            for (i, plan) in entry.day_plans.iter().enumerate() {
                assert_eq!(
                    plan.day,
                    i as u32 + 1,
                    "{}: day plans out of order",
                    city
                );
                assert!(!plan.activities.is_empty(), "{}: empty day {}", city, plan.day);
            }
        }
    }

    #[test]
    fn test_budget_bands_sane() {
        for (city, entry) in catalog() {
            for band in [
                entry.estimated_budget.solo,
                entry.estimated_budget.couple,
                entry.estimated_budget.group,
            ]
            .into_iter()
            .flatten()
            {
                assert!(band.min <= band.max, "{}: inverted band", city);
                assert!(band.min > 0, "{}: zero budget floor", city);
            }
        }
    }
}
