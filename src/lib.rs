//! Average salary calculation over employee rosters.
//!
//! This crate computes the mean salary of the employees in a roster that
//! satisfy a conjunction of caller-supplied predicates. Each predicate
//! closes over whatever condition it tests (a salary threshold, membership
//! in a department, and so on), and the calculator combines them with
//! logical AND before reducing the matching salaries to their mean.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod predicate;
