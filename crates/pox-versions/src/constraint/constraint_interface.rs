//! Constraint interface trait

use crate::version::Version;

/// Trait for all constraint types
pub trait ConstraintInterface: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check if this constraint accepts the given version
    fn matches(&self, version: &Version) -> bool;

    /// Check if this constraint accepts every version
    fn is_match_all(&self) -> bool {
        false
    }
}
