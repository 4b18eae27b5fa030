//! Department model.
//!
//! This module defines the Department struct, a named grouping of shared
//! employee references that answers membership queries.

use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// A named subset of a roster's employees.
///
/// A department holds `Arc<Employee>` references shared with the roster it
/// was built from; it does not own the employees' lifetimes. Membership is
/// decided by reference identity: two distinct employees with equal name
/// and salary are still distinct members.
#[derive(Debug, Clone)]
pub struct Department {
    /// The department's name.
    pub name: String,
    /// The department's members, shared with the surrounding roster.
    pub employees: Vec<Arc<Employee>>,
}

impl Department {
    /// Creates a department from already-shared employee references.
    pub fn new(name: impl Into<String>, employees: Vec<Arc<Employee>>) -> Self {
        Department {
            name: name.into(),
            employees,
        }
    }

    /// Builds a department by looking up members of a roster by name.
    ///
    /// The resulting department shares the roster's allocations, so
    /// [`works`](Department::works) identity checks hold against the
    /// original roster entries. When several roster entries share a name,
    /// the first one is taken.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] if any name in `members`
    /// has no entry in `roster`.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::{Department, Employee};
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    ///
    /// let roster = vec![
    ///     Arc::new(Employee::new("Jim", Decimal::from(100))),
    ///     Arc::new(Employee::new("John", Decimal::from(200))),
    /// ];
    ///
    /// let sales = Department::from_roster("sales", &roster, &["Jim"]).unwrap();
    /// assert!(sales.works(&roster[0]));
    /// assert!(!sales.works(&roster[1]));
    /// ```
    pub fn from_roster(
        name: impl Into<String>,
        roster: &[Arc<Employee>],
        members: &[&str],
    ) -> EngineResult<Self> {
        let name = name.into();
        let mut employees = Vec::with_capacity(members.len());

        for member in members {
            let employee = roster
                .iter()
                .find(|e| e.name == *member)
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    name: (*member).to_string(),
                    department: name.clone(),
                })?;
            employees.push(Arc::clone(employee));
        }

        Ok(Department { name, employees })
    }

    /// Returns true iff the given employee is a member of this department.
    ///
    /// The check compares reference identity, not field values: it is true
    /// only when `employee` points into the same allocation as one of the
    /// department's members. Absence is a normal `false`, never an error.
    pub fn works(&self, employee: &Employee) -> bool {
        self.employees
            .iter()
            .any(|member| std::ptr::eq(Arc::as_ptr(member), employee))
    }
}
