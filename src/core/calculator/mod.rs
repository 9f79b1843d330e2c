//! Pure aggregation passes over already-fetched records.

pub mod reconcile;
pub mod weekly;
