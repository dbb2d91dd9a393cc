//! Composer-compatible version handling
//!
//! This crate normalizes version strings into a canonical form, classifies their
//! stability, orders them, and parses constraint expressions (`^1.2 || ~2.0`,
//! `>=1.0 <2.0`, `1.0 - 2.0`, `2.*`, ...) into a [`Range`] that can be matched
//! against parsed versions.

pub mod constraint;
mod comparator;
mod semver;
mod stability;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{Constraint, ConstraintInterface, MultiConstraint, Operator, Range};
pub use semver::Semver;
pub use stability::Stability;
pub use version::{Version, VersionKind, DEFAULT_BRANCH_MAJOR};
pub use version_parser::{VersionParser, VersionParserError};
