//! Core data models for the salary calculation engine.
//!
//! This module contains the domain models the calculator reads from:
//! employees and the departments that group them.

mod department;
mod employee;

pub use department::Department;
pub use employee::Employee;
