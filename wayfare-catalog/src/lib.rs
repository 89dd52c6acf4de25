//! wayfare-catalog: static destination catalog, resolver and budget estimator

pub mod budget;
pub mod catalog;
mod data;
pub mod resolver;

pub use budget::{BudgetEstimate, estimate};
pub use catalog::{
    BudgetBand, BusRoute, CatalogEntry, EstimatedBudget, Flight, Restaurant, Stay, TourPackage,
    TrainRoute, catalog,
};
pub use resolver::{
    DEFAULT_KEY, buses_for, day_plans_for, flights_for, hotels_for, packages_for, resolve,
    resorts_for, restaurants_for, stays_for, trains_for, trip_data,
};
