//! Calculation logic for the salary calculation engine.
//!
//! This module contains the average salary calculation: filtering a roster
//! by a conjunction of predicates and reducing the matching salaries to
//! their arithmetic mean.

mod average_salary;

pub use average_salary::{average, average_salary};
