//! Error types for the salary calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculator itself is total over its inputs and never fails; errors
//! only arise when building fixtures, such as looking up a roster member
//! by name while constructing a department.

use thiserror::Error;

/// The main error type for the salary calculation engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     name: "Alice".to_string(),
///     department: "sales".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Employee 'Alice' not found in roster while building department 'sales'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A named employee was not present in the roster a department was
    /// being built from.
    #[error("Employee '{name}' not found in roster while building department '{department}'")]
    EmployeeNotFound {
        /// The employee name that was not found.
        name: String,
        /// The department being constructed.
        department: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
