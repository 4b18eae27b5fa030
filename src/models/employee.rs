//! Employee model.
//!
//! This module defines the Employee struct, the single record the
//! calculator reads salaries from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee with a name and a salary.
///
/// Employees are immutable after construction and are shared by reference
/// (`Arc<Employee>`) between rosters and departments, so membership checks
/// can use reference identity rather than value equality. Salaries are
/// non-negative by convention but never validated; the calculator is total
/// over any well-typed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name.
    pub name: String,
    /// The employee's salary.
    pub salary: Decimal,
}

impl Employee {
    /// Creates a new employee with the given name and salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let jim = Employee::new("Jim", Decimal::from(100));
    /// assert_eq!(jim.name, "Jim");
    /// assert_eq!(jim.salary, Decimal::from(100));
    /// ```
    pub fn new(name: impl Into<String>, salary: Decimal) -> Self {
        Employee {
            name: name.into(),
            salary,
        }
    }
}
