//! Average salary over the employees matching a conjunction of predicates.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::Employee;
use crate::predicate::Predicate;

/// Computes the mean salary of the employees satisfying every condition.
///
/// Each employee is tested against the conjunction of `conditions`,
/// evaluated left to right in input order and short-circuiting on the
/// first false verdict. Employees that pass contribute their salary to the
/// pool; the result is the pool's sum divided by its count.
///
/// An empty `conditions` list is vacuously true, so every employee is
/// included. When no employee matches (including an empty roster) the
/// result is exactly `Decimal::ZERO` — absence of matches is reported as a
/// zero average, never as an error.
///
/// The function is pure and total: it mutates nothing, holds no state
/// across calls, and never fails on well-typed input.
///
/// # Arguments
///
/// * `employees` - The roster to average over; may be empty
/// * `conditions` - The predicates every included employee must satisfy
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::average_salary;
/// use salary_engine::models::{Department, Employee};
/// use salary_engine::predicate::{salary_above, works_in};
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let roster = vec![
///     Arc::new(Employee::new("Jim", Decimal::from(100))),
///     Arc::new(Employee::new("John", Decimal::from(200))),
///     Arc::new(Employee::new("Liz", Decimal::from(120))),
///     Arc::new(Employee::new("Penny", Decimal::from(30))),
/// ];
/// let sales = Arc::new(Department::new(
///     "sales",
///     vec![Arc::clone(&roster[0]), Arc::clone(&roster[1])],
/// ));
///
/// let conditions = vec![salary_above(Decimal::from(50)), works_in(&sales)];
/// assert_eq!(average_salary(&roster, &conditions), Decimal::from(150));
/// ```
pub fn average_salary(employees: &[Arc<Employee>], conditions: &[Predicate]) -> Decimal {
    let salaries = matching_salaries(employees, conditions);

    debug!(
        matched = salaries.len(),
        roster = employees.len(),
        "computing average salary over matching employees"
    );

    average(&salaries)
}

/// Computes the arithmetic mean of a list of salaries.
///
/// Defined as `Decimal::ZERO` for an empty list.
pub fn average(salaries: &[Decimal]) -> Decimal {
    if salaries.is_empty() {
        return Decimal::ZERO;
    }

    let total: Decimal = salaries.iter().copied().sum();
    total / Decimal::from(salaries.len() as u64)
}

/// Collects the salaries of the employees passing the full conjunction.
fn matching_salaries(employees: &[Arc<Employee>], conditions: &[Predicate]) -> Vec<Decimal> {
    employees
        .iter()
        .filter(|e| satisfies_all(e, conditions))
        .map(|e| e.salary)
        .collect()
}

/// True iff the employee passes every condition, left to right with
/// short-circuit on the first false.
fn satisfies_all(employee: &Employee, conditions: &[Predicate]) -> bool {
    conditions.iter().all(|condition| condition(employee))
}
