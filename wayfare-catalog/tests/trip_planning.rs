//! End-to-end planning regression: resolve a destination, estimate the
//! budget for the trip length, then settle the expenses the trip accrued.

use chrono::NaiveDate;
use wayfare_catalog::{day_plans_for, estimate, hotels_for, resolve};
use wayfare_core::{Direction, Expense, PartyType, Trip, settle};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_plan_and_settle_goa_couple_trip() {
    let trip = Trip::new(
        "trip-goa",
        "Goa, Goa",
        date(2026, 11, 20),
        date(2026, 11, 23),
        PartyType::Couple,
    );
    assert_eq!(trip.duration_days(), 3);
    assert_eq!(trip.travelers, 2);

    // Catalog side: resolution and data.
    assert_eq!(resolve(&trip.destination), "Goa");
    assert!(!hotels_for(&trip.destination).is_empty());
    assert_eq!(day_plans_for(&trip.destination).len(), 3);

    // Budget: Goa couple 3-day band is 15000..25500, divisible by 3.
    let est = estimate(&trip.destination, trip.party, trip.duration_days()).unwrap();
    assert_eq!(est.min, 15000);
    assert_eq!(est.max, 25500);

    // Expenses recorded during the trip; the reference settlement scenario.
    let expenses = vec![
        Expense::new("e1", "Beach villa", 12000.0, "Person 1", "stay"),
        Expense::new("e2", "Scooter + fuel", 8000.0, "Person 2", "transport"),
        Expense::new("e3", "Dinners", 2500.0, "Person 1", "food"),
    ];
    let settlement = settle(&expenses, trip.travelers);

    assert_eq!(settlement.len(), 2);
    assert_eq!(settlement[0].paid, 14500.0);
    assert_eq!(settlement[0].balance, 3250.0);
    assert_eq!(settlement[0].direction, Direction::Receives);
    assert_eq!(settlement[1].balance, -3250.0);
    assert_eq!(settlement[1].direction, Direction::Owes);

    // Spend stayed within the estimated band.
    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    assert!(total >= est.min as f64 && total <= est.max as f64);
}

#[test]
fn test_unknown_destination_still_plans() {
    let trip = Trip::new(
        "trip-unknown",
        "Nowhereville, Nowhere",
        date(2026, 12, 1),
        date(2026, 12, 5),
        PartyType::Group,
    );

    assert_eq!(resolve(&trip.destination), wayfare_catalog::DEFAULT_KEY);
    assert!(!day_plans_for(&trip.destination).is_empty());

    // Default entry carries bands for every party type.
    let est = estimate(&trip.destination, trip.party, trip.duration_days()).unwrap();
    assert!(est.min > 0 && est.min <= est.max);

    // Group of four, single payer: everyone else owes a quarter each.
    let expenses = vec![Expense::new("e1", "Minibus hire", 6000.0, "Person 3", "transport")];
    let settlement = settle(&expenses, trip.travelers);
    assert_eq!(settlement.len(), 4);
    assert_eq!(settlement[2].balance, 4500.0);
    let owed: f64 = settlement
        .iter()
        .filter(|s| s.direction == Direction::Owes)
        .map(|s| s.balance)
        .sum();
    assert!((owed + 4500.0).abs() < 1e-9);
}
