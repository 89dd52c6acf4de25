//! wayfare-core: Core trip and expense types for the Wayfare planner

pub mod expense;
pub mod settlement;
pub mod trip;

pub use expense::{Expense, participant_label};
pub use settlement::{Direction, ParticipantSettlement, settle};
pub use trip::{DayPlan, PartyType, PlannedActivity, Trip, TripStatus};
