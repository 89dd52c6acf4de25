//! Shared-expense records for trip cost splitting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label for the i-th synthetic participant (1-based): "Person 1", ...
pub fn participant_label(index: u32) -> String {
    format!("Person {}", index)
}

/// A shared expense recorded against a trip.
///
/// Expenses are immutable once created; the only mutation is deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    /// Non-negative amount in the trip currency.
    pub amount: f64,
    /// Synthetic participant label, "Person 1" through "Person N".
    #[serde(alias = "paidBy")]
    pub paid_by: String,
    pub category: String,
    /// Date the expense was recorded (imports carry the statement date).
    #[serde(default)]
    pub recorded_on: Option<NaiveDate>,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        paid_by: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount: amount.max(0.0),
            paid_by: paid_by.into(),
            category: category.into(),
            recorded_on: None,
        }
    }

    pub fn with_recorded_on(mut self, date: NaiveDate) -> Self {
        self.recorded_on = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_label() {
        assert_eq!(participant_label(1), "Person 1");
        assert_eq!(participant_label(4), "Person 4");
    }

    #[test]
    fn test_negative_amounts_clamped() {
        let e = Expense::new("e-1", "refund typo", -50.0, "Person 1", "misc");
        assert_eq!(e.amount, 0.0);
    }

    #[test]
    fn test_legacy_paid_by_alias() {
        let json = r#"{
            "id": "e-2",
            "description": "beach shack dinner",
            "amount": 1800.0,
            "paidBy": "Person 2",
            "category": "food"
        }"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.paid_by, "Person 2");
    }
}
