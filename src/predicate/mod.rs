//! Predicates over employees and their conjunction.
//!
//! A predicate is a boxed function from an employee to a boolean verdict.
//! Predicates close over whatever condition they test, so the calculator
//! never needs to know about thresholds or departments; this module also
//! provides constructors for the two conditions the domain uses and an
//! `all` combinator that folds a list of predicates into one.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::{Department, Employee};

/// A condition over a single employee.
///
/// Predicates are stateless from the calculator's perspective; any
/// parameters (a salary threshold, a department reference) are captured by
/// the closure when the predicate is built.
pub type Predicate = Box<dyn Fn(&Employee) -> bool>;

/// Builds a predicate that passes employees earning strictly more than
/// `threshold`.
///
/// # Examples
///
/// ```
/// use salary_engine::models::Employee;
/// use salary_engine::predicate::salary_above;
/// use rust_decimal::Decimal;
///
/// let above_50 = salary_above(Decimal::from(50));
/// assert!(above_50(&Employee::new("Jim", Decimal::from(100))));
/// assert!(!above_50(&Employee::new("Penny", Decimal::from(30))));
/// ```
pub fn salary_above(threshold: Decimal) -> Predicate {
    Box::new(move |e| e.salary > threshold)
}

/// Builds a predicate that passes members of the given department.
///
/// The predicate keeps a shared reference to the department, so the
/// department outlives the predicate's callers without being copied.
pub fn works_in(department: &Arc<Department>) -> Predicate {
    let department = Arc::clone(department);
    Box::new(move |e| department.works(e))
}

/// Folds a list of predicates into their conjunction.
///
/// The result evaluates the predicates left to right in input order and
/// short-circuits on the first false. An empty list is vacuously true:
/// every employee passes.
///
/// # Examples
///
/// ```
/// use salary_engine::models::Employee;
/// use salary_engine::predicate::{all, salary_above};
/// use rust_decimal::Decimal;
///
/// let everyone = all(vec![]);
/// assert!(everyone(&Employee::new("Penny", Decimal::from(30))));
/// ```
pub fn all(conditions: Vec<Predicate>) -> Predicate {
    Box::new(move |e| conditions.iter().all(|c| c(e)))
}
