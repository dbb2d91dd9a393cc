//! Constraint types for version matching

#[allow(clippy::module_inception)]
mod constraint;
mod constraint_interface;
mod multi_constraint;
mod operator;
mod range;

pub use constraint::Constraint;
pub use constraint_interface::ConstraintInterface;
pub use multi_constraint::{MultiConstraint, MultiConstraintError};
pub use operator::{InvalidOperatorError, Operator};
pub use range::Range;
