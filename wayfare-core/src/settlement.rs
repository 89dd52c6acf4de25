//! Settlement engine: splits shared trip expenses evenly across the
//! synthetic participants and reports who owes and who receives.

use serde::{Deserialize, Serialize};

use crate::expense::{Expense, participant_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "receives")]
    Receives,
    #[serde(rename = "owes")]
    Owes,
    #[serde(rename = "settled")]
    Settled,
}

/// Per-participant settlement figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSettlement {
    pub participant: String,
    /// Sum of expenses this participant paid for.
    pub paid: f64,
    /// paid minus fair share. Positive means the group owes them money.
    pub balance: f64,
    pub direction: Direction,
}

/// Compute the even-split settlement for `participant_count` people.
///
/// One entry per participant in index order (Person 1, Person 2, ...),
/// including participants with a zero balance; filtering those out is a
/// presentation concern. Expenses whose payer is not one of the synthetic
/// labels contribute to the total (and therefore everyone's fair share) but
/// to nobody's paid figure.
///
/// Amounts stay in raw f64; rounding happens at display time.
pub fn settle(expenses: &[Expense], participant_count: u32) -> Vec<ParticipantSettlement> {
    if participant_count == 0 {
        return Vec::new();
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let fair_share = total / participant_count as f64;

    (1..=participant_count)
        .map(|i| {
            let participant = participant_label(i);
            let paid: f64 = expenses
                .iter()
                .filter(|e| e.paid_by == participant)
                .map(|e| e.amount)
                .sum();
            let balance = paid - fair_share;

            let direction = if balance > 0.0 {
                Direction::Receives
            } else if balance < 0.0 {
                Direction::Owes
            } else {
                Direction::Settled
            };

            ParticipantSettlement {
                participant,
                paid,
                balance,
                direction,
            }
        })
        .collect()
}
