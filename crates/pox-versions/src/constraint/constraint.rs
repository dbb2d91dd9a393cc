//! Single version constraint implementation

use std::fmt;

use super::{ConstraintInterface, Operator};
use crate::comparator::Comparator;
use crate::version::Version;

/// A single version constraint (e.g., ">= 1.0.0.0-dev")
#[derive(Debug, Clone)]
pub struct Constraint {
    operator: Operator,
    version: Version,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Get the version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl ConstraintInterface for Constraint {
    fn matches(&self, version: &Version) -> bool {
        Comparator::compare_with(version, self.operator, &self.version)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = self.version.to_string();
        let version = version.strip_suffix("-stable").unwrap_or(&version);
        write!(f, "{} {}", self.operator, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VersionParser;

    fn v(version: &str) -> Version {
        VersionParser::new().parse_version(version).unwrap()
    }

    fn test_match(operator: Operator, bound: &str, candidate: &str) -> bool {
        Constraint::new(operator, v(bound)).matches(&v(candidate))
    }

    #[test]
    fn test_constraint_creation() {
        let c = Constraint::new(Operator::GreaterThanOrEqual, v("1.0.0"));
        assert_eq!(c.operator(), Operator::GreaterThanOrEqual);
        assert_eq!(c.version().to_string(), "1.0.0.0");
    }

    #[test]
    fn test_constraint_display() {
        assert_eq!(Constraint::new(Operator::GreaterThanOrEqual, v("1.0.0")).to_string(), ">= 1.0.0.0");
        assert_eq!(Constraint::new(Operator::LessThan, v("1.0.0-stable")).to_string(), "< 1.0.0.0");
        assert_eq!(Constraint::new(Operator::Equal, v("dev-master")).to_string(), "== 9999999-dev");
    }

    #[test]
    fn test_version_match_equal() {
        assert!(test_match(Operator::Equal, "2", "2"));
        assert!(test_match(Operator::Equal, "2.0", "2.0.0.0"));
        assert!(!test_match(Operator::Equal, "2", "3"));
        assert!(test_match(Operator::Equal, "dev-foo-bar", "dev-foo-bar"));
        assert!(!test_match(Operator::Equal, "dev-foo-bar", "dev-foo-xyz"));
    }

    #[test]
    fn test_version_match_less_than() {
        assert!(test_match(Operator::LessThan, "2", "1"));
        assert!(!test_match(Operator::LessThan, "2", "2"));
        assert!(test_match(Operator::LessThan, "2.0.0.0-dev", "1.9.9"));
        assert!(!test_match(Operator::LessThan, "2.0.0.0-dev", "2.0.0-alpha"));
    }

    #[test]
    fn test_version_match_less_than_or_equal() {
        assert!(test_match(Operator::LessThanOrEqual, "2", "2"));
        assert!(test_match(Operator::LessThanOrEqual, "2", "1"));
        assert!(!test_match(Operator::LessThanOrEqual, "2", "3"));
    }

    #[test]
    fn test_version_match_greater_than() {
        assert!(test_match(Operator::GreaterThan, "1", "2"));
        assert!(!test_match(Operator::GreaterThan, "2", "2"));
        assert!(test_match(Operator::GreaterThanOrEqual, "1.0.0.0-dev", "1.0.0-beta1"));
    }

    #[test]
    fn test_version_match_not_equal() {
        assert!(test_match(Operator::NotEqual, "1", "2"));
        assert!(!test_match(Operator::NotEqual, "2", "2"));
        assert!(test_match(Operator::NotEqual, "dev-foo", "dev-bar"));
    }
}
