//! Request validation errors.
//!
//! The probability engine itself is total over its input domain; the only
//! failures in the system are malformed query parameters, caught before the
//! engine runs. Messages match the public API contract word for word.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("age and city required")]
    MissingParameter,

    #[error("age must be a valid number")]
    InvalidAge,
}
