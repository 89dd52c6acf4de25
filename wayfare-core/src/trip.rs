//! Trip model for the Wayfare planner.
//!
//! Trips are small serializable records; storage (JSON files) is a later layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who is travelling. Determines the synthetic participant count used by
/// expense splitting unless the trip overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyType {
    #[serde(rename = "solo")]
    Solo,
    #[serde(rename = "couple")]
    Couple,
    #[serde(rename = "group")]
    Group,
}

impl PartyType {
    /// Default traveler count for this party type.
    pub fn travelers(&self) -> u32 {
        match self {
            PartyType::Solo => 1,
            PartyType::Couple => 2,
            PartyType::Group => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    #[serde(rename = "planned")]
    Planned,
    #[serde(rename = "ongoing")]
    Ongoing,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "confirmed")]
    Confirmed,
}

/// One timed activity within a day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedActivity {
    /// Display time, e.g. "09:00 AM". Kept as text; plans are mock data.
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub notes: String,
}

/// A single day of an itinerary, ordered by `day` (1-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub activities: Vec<PlannedActivity>,
}

/// Core trip record.
///
/// Legacy exports used camelCase keys; the serde aliases accept those at the
/// persistence boundary while the in-memory schema stays snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    /// Free-text destination, typically "City, Region".
    pub destination: String,

    #[serde(alias = "startDate")]
    pub start_date: NaiveDate,
    #[serde(alias = "endDate")]
    pub end_date: NaiveDate,

    #[serde(alias = "partyType")]
    pub party: PartyType,
    /// Participant count for expense splitting. Defaults from the party
    /// type but may be overridden at creation.
    pub travelers: u32,

    pub status: TripStatus,

    #[serde(default, alias = "packingList")]
    pub packing_list: Vec<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default, alias = "dayPlans")]
    pub day_plans: Vec<DayPlan>,
}

impl Trip {
    pub fn new(
        id: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        party: PartyType,
    ) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            start_date,
            end_date,
            party,
            travelers: party.travelers(),
            status: TripStatus::Planned,
            packing_list: Vec::new(),
            story: None,
            day_plans: Vec::new(),
        }
    }

    pub fn with_travelers(mut self, travelers: u32) -> Self {
        self.travelers = travelers.max(1);
        self
    }

    pub fn with_status(mut self, status: TripStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_day_plans(mut self, plans: Vec<DayPlan>) -> Self {
        self.day_plans = plans;
        self
    }

    /// Trip length in days, inclusive of the start day. Never below 1.
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days();
        days.max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_party_type_travelers() {
        assert_eq!(PartyType::Solo.travelers(), 1);
        assert_eq!(PartyType::Couple.travelers(), 2);
        assert_eq!(PartyType::Group.travelers(), 4);
    }

    #[test]
    fn test_travelers_default_and_override() {
        let trip = Trip::new(
            "t-1",
            "Goa, Goa",
            date(2026, 9, 1),
            date(2026, 9, 4),
            PartyType::Group,
        );
        assert_eq!(trip.travelers, 4);

        let trip = trip.with_travelers(6);
        assert_eq!(trip.travelers, 6);
    }

    #[test]
    fn test_duration_days() {
        let trip = Trip::new(
            "t-2",
            "Manali, Himachal Pradesh",
            date(2026, 9, 1),
            date(2026, 9, 4),
            PartyType::Couple,
        );
        assert_eq!(trip.duration_days(), 3);

        // Same-day and inverted ranges clamp to a single day.
        let trip = Trip::new(
            "t-3",
            "Goa",
            date(2026, 9, 1),
            date(2026, 9, 1),
            PartyType::Solo,
        );
        assert_eq!(trip.duration_days(), 1);
    }

    #[test]
    fn test_legacy_camel_case_keys_accepted() {
        let json = r#"{
            "id": "t-legacy",
            "destination": "Jaipur, Rajasthan",
            "startDate": "2026-10-02",
            "endDate": "2026-10-05",
            "partyType": "couple",
            "travelers": 2,
            "status": "planned",
            "packingList": ["sunscreen"]
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.start_date, date(2026, 10, 2));
        assert_eq!(trip.party, PartyType::Couple);
        assert_eq!(trip.packing_list, vec!["sunscreen".to_string()]);
    }
}
