use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use wayfare_core::{Expense, PartyType, Trip};

pub fn wayfare_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("WAYFARE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".wayfare"))
}

pub fn ensure_wayfare_home() -> Result<PathBuf> {
    let dir = wayfare_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn trips_path() -> Result<PathBuf> {
    Ok(ensure_wayfare_home()?.join("trips.json"))
}

pub fn profile_path() -> Result<PathBuf> {
    Ok(ensure_wayfare_home()?.join("profile.json"))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    pub created_at_utc: Option<String>,
    #[serde(default)]
    pub default_party: Option<PartyType>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

pub fn write_profile(profile: &Profile) -> Result<()> {
    let p = profile_path()?;
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn read_profile() -> Result<Profile> {
    let p = profile_path()?;
    if !p.exists() {
        return Ok(Profile {
            created_at_utc: None,
            default_party: None,
            currency: default_currency(),
        });
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

/// One persisted trip: the core trip fields plus its expense ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(flatten)]
    pub trip: Trip,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl TripRecord {
    pub fn new(trip: Trip) -> Self {
        Self {
            trip,
            expenses: Vec::new(),
        }
    }
}

/// All persisted planner state. Loaded and saved whole; last write wins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Store {
    #[serde(default)]
    pub trips: Vec<TripRecord>,
    #[serde(default, alias = "activeTripId")]
    pub active_trip_id: Option<String>,
}

impl Store {
    pub fn load() -> Result<Self> {
        let p = trips_path()?;
        if !p.exists() {
            return Ok(Store::default());
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        Ok(serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?)
    }

    pub fn save(&self) -> Result<()> {
        let p = trips_path()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }

    /// Add a trip and make it the active one.
    pub fn add_trip(&mut self, trip: Trip) {
        self.active_trip_id = Some(trip.id.clone());
        self.trips.push(TripRecord::new(trip));
    }

    pub fn find(&self, id: &str) -> Option<&TripRecord> {
        self.trips.iter().find(|r| r.trip.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut TripRecord> {
        self.trips.iter_mut().find(|r| r.trip.id == id)
    }

    /// Record for `id` when given, otherwise the active trip.
    pub fn target(&self, id: Option<&str>) -> Option<&TripRecord> {
        match id {
            Some(id) => self.find(id),
            None => self.active_trip_id.as_deref().and_then(|id| self.find(id)),
        }
    }

    pub fn target_mut(&mut self, id: Option<&str>) -> Option<&mut TripRecord> {
        let id = match id {
            Some(id) => id.to_string(),
            None => self.active_trip_id.clone()?,
        };
        self.find_mut(&id)
    }

    /// Remove a trip; clears the active marker if it pointed at it.
    pub fn remove_trip(&mut self, id: &str) -> bool {
        let before = self.trips.len();
        self.trips.retain(|r| r.trip.id != id);
        if self.active_trip_id.as_deref() == Some(id) {
            self.active_trip_id = None;
        }
        self.trips.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wayfare_core::PartyType;

    fn sample_trip(id: &str) -> Trip {
        Trip::new(
            id,
            "Goa, Goa",
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
            PartyType::Couple,
        )
    }

    #[test]
    fn test_add_trip_sets_active() {
        let mut store = Store::default();
        store.add_trip(sample_trip("t-1"));
        store.add_trip(sample_trip("t-2"));
        assert_eq!(store.active_trip_id.as_deref(), Some("t-2"));
        assert!(store.target(None).is_some());
        assert_eq!(store.target(Some("t-1")).unwrap().trip.id, "t-1");
    }

    #[test]
    fn test_remove_active_trip_clears_marker() {
        let mut store = Store::default();
        store.add_trip(sample_trip("t-1"));
        assert!(store.remove_trip("t-1"));
        assert!(store.active_trip_id.is_none());
        assert!(!store.remove_trip("t-1"));
    }

    #[test]
    fn test_store_accepts_legacy_export() {
        // Flattened trip fields with camelCase keys from older exports.
        let json = r#"{
            "activeTripId": "t-old",
            "trips": [{
                "id": "t-old",
                "destination": "Mumbai, Maharashtra",
                "startDate": "2026-10-01",
                "endDate": "2026-10-03",
                "partyType": "solo",
                "travelers": 1,
                "status": "confirmed",
                "expenses": [{
                    "id": "e-1",
                    "description": "airport taxi",
                    "amount": 650.0,
                    "paidBy": "Person 1",
                    "category": "transport"
                }]
            }]
        }"#;
        let store: Store = serde_json::from_str(json).unwrap();
        let rec = store.target(None).unwrap();
        assert_eq!(rec.trip.destination, "Mumbai, Maharashtra");
        assert_eq!(rec.expenses[0].paid_by, "Person 1");
    }
}
