//! Destination resolution and catalog projections.
//!
//! Resolution is total: any input maps to a catalog key, falling back to the
//! sentinel entry, so downstream consumers always get a non-empty data set.

use wayfare_core::DayPlan;

use crate::catalog::{BusRoute, CatalogEntry, Flight, Restaurant, Stay, TourPackage, TrainRoute, catalog};

/// Sentinel key for destinations without a dedicated entry.
pub const DEFAULT_KEY: &str = "default";

/// Map a free-text destination ("City, Region") to a catalog key.
///
/// Keys only on the segment before the first comma, trimmed. Matching is
/// exact and case-sensitive; anything else resolves to [`DEFAULT_KEY`].
pub fn resolve(destination: &str) -> &'static str {
    let city = destination.split(',').next().unwrap_or("").trim();
    catalog()
        .get_key_value(city)
        .map(|(key, _)| *key)
        .unwrap_or(DEFAULT_KEY)
}

fn default_entry() -> &'static CatalogEntry {
    &catalog()[DEFAULT_KEY]
}

/// Resolve and return the whole catalog entry for a destination.
pub fn trip_data(destination: &str) -> &'static CatalogEntry {
    &catalog()[resolve(destination)]
}

/// Read one list field off the resolved entry, falling back to the same
/// field on the default entry when the resolved entry leaves it empty.
fn project<T>(destination: &str, field: fn(&CatalogEntry) -> &Vec<T>) -> &'static [T] {
    let list = field(trip_data(destination));
    if list.is_empty() {
        field(default_entry())
    } else {
        list
    }
}

pub fn hotels_for(destination: &str) -> &'static [Stay] {
    project(destination, |e| &e.hotels)
}

pub fn flights_for(destination: &str) -> &'static [Flight] {
    project(destination, |e| &e.flights)
}

pub fn trains_for(destination: &str) -> &'static [TrainRoute] {
    project(destination, |e| &e.trains)
}

pub fn buses_for(destination: &str) -> &'static [BusRoute] {
    project(destination, |e| &e.buses)
}

pub fn restaurants_for(destination: &str) -> &'static [Restaurant] {
    project(destination, |e| &e.restaurants)
}

/// Airbnb-style stays.
pub fn stays_for(destination: &str) -> &'static [Stay] {
    project(destination, |e| &e.airbnb)
}

pub fn resorts_for(destination: &str) -> &'static [Stay] {
    project(destination, |e| &e.resorts)
}

pub fn packages_for(destination: &str) -> &'static [TourPackage] {
    project(destination, |e| &e.tour_packages)
}

pub fn day_plans_for(destination: &str) -> &'static [DayPlan] {
    project(destination, |e| &e.day_plans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keys_on_pre_comma_segment() {
        assert_eq!(resolve("Goa"), "Goa");
        assert_eq!(resolve("Goa, Goa"), "Goa");
        assert_eq!(resolve("Goa, AnythingElse"), "Goa");
        assert_eq!(resolve("  Goa  , Goa"), "Goa");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve("goa"), DEFAULT_KEY);
        assert_eq!(resolve("GOA, Goa"), DEFAULT_KEY);
    }

    #[test]
    fn test_unknown_and_malformed_fall_back() {
        assert_eq!(resolve("Nowhereville, Nowhere"), DEFAULT_KEY);
        assert_eq!(resolve(""), DEFAULT_KEY);
        assert_eq!(resolve(",,,"), DEFAULT_KEY);
    }

    #[test]
    fn test_every_getter_non_empty_for_unknown_city() {
        let dest = "Nowhereville, Nowhere";
        assert!(!hotels_for(dest).is_empty());
        assert!(!flights_for(dest).is_empty());
        assert!(!trains_for(dest).is_empty());
        assert!(!buses_for(dest).is_empty());
        assert!(!restaurants_for(dest).is_empty());
        assert!(!stays_for(dest).is_empty());
        assert!(!resorts_for(dest).is_empty());
        assert!(!packages_for(dest).is_empty());
        assert!(!day_plans_for(dest).is_empty());
    }

    #[test]
    fn test_partial_entries_fall_back_per_field() {
        // Jaipur has hotels of its own but no airbnb/resort listings.
        let hotels = hotels_for("Jaipur, Rajasthan");
        assert!(hotels.iter().any(|h| h.name == "Samode Haveli"));

        let stays = stays_for("Jaipur, Rajasthan");
        assert_eq!(stays, stays_for("Nowhereville"));

        // Udaipur lists no tour packages.
        let packages = packages_for("Udaipur, Rajasthan");
        assert_eq!(packages, packages_for("Nowhereville"));
    }

    #[test]
    fn test_trip_data_returns_resolved_entry() {
        let entry = trip_data("Mumbai, Maharashtra");
        assert!(entry.hotels.iter().any(|h| h.name.contains("Taj Mahal Palace")));
    }
}
