//! Parsed constraint tree

use std::fmt;

use super::{Constraint, ConstraintInterface, MultiConstraint, Operator};
use crate::version::Version;
use crate::VersionParser;

/// Result of parsing a constraint expression
#[derive(Debug, Clone)]
pub enum Range {
    /// Matches every version (`*`, `x.*`, ...)
    MatchAll,
    /// A single `<op> <version>` comparison
    Constraint(Constraint),
    /// A conjunction or disjunction of nested ranges
    Multi(MultiConstraint),
}

impl Range {
    /// `>= low` and `< high`
    pub(crate) fn interval(low: Version, high: Version) -> Range {
        Range::Multi(MultiConstraint::from_bounds(
            Constraint::new(Operator::GreaterThanOrEqual, low),
            Constraint::new(Operator::LessThan, high),
        ))
    }

    /// Members to splice into an enclosing conjunction
    pub(crate) fn into_conjuncts(self) -> Vec<Range> {
        match self {
            Range::Multi(multi) if multi.is_conjunctive() && !multi.is_merged() => multi.into_constraints(),
            other => vec![other],
        }
    }

    /// Check if the range accepts the given version
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Range::MatchAll => true,
            Range::Constraint(constraint) => constraint.matches(version),
            Range::Multi(multi) => multi.matches(version),
        }
    }

    /// Parses `version` and checks it against the range; unparseable versions never match
    pub fn satisfies(&self, version: &str) -> bool {
        match VersionParser::new().parse_version(version) {
            Ok(parsed) => self.matches(&parsed),
            Err(err) => {
                log::debug!("Ignoring unparseable version \"{}\": {}", version, err);
                false
            }
        }
    }

    pub fn as_constraint(&self) -> Option<&Constraint> {
        match self {
            Range::Constraint(constraint) => Some(constraint),
            _ => None,
        }
    }

    pub fn as_multi(&self) -> Option<&MultiConstraint> {
        match self {
            Range::Multi(multi) => Some(multi),
            _ => None,
        }
    }
}

impl ConstraintInterface for Range {
    fn matches(&self, version: &Version) -> bool {
        Range::matches(self, version)
    }

    fn is_match_all(&self) -> bool {
        matches!(self, Range::MatchAll)
    }
}

impl From<Constraint> for Range {
    fn from(constraint: Constraint) -> Self {
        Range::Constraint(constraint)
    }
}

impl From<MultiConstraint> for Range {
    fn from(multi: MultiConstraint) -> Self {
        Range::Multi(multi)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::MatchAll => write!(f, "[]"),
            Range::Constraint(constraint) => fmt::Display::fmt(constraint, f),
            Range::Multi(multi) => fmt::Display::fmt(multi, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(constraint: &str) -> Range {
        VersionParser::new().parse_constraints(constraint).unwrap()
    }

    #[test]
    fn test_match_all() {
        let range = parse("*");
        assert!(range.is_match_all());
        assert!(range.satisfies("1.0.0"));
        assert!(range.satisfies("dev-foo"));
        assert!(!range.satisfies("not a version"));
        assert_eq!(range.to_string(), "[]");
    }

    #[test]
    fn test_accessors() {
        let leaf = parse(">=1.0");
        assert_eq!(leaf.as_constraint().unwrap().operator(), Operator::GreaterThanOrEqual);
        assert!(leaf.as_multi().is_none());

        let multi = parse("^1.0");
        assert_eq!(multi.as_multi().unwrap().constraints().len(), 2);
        assert!(multi.as_constraint().is_none());
    }

    #[test]
    fn test_satisfies_tilde() {
        let range = parse("~1.2.3");
        assert!(range.satisfies("1.2.3"));
        assert!(range.satisfies("1.2.9"));
        assert!(!range.satisfies("1.3.0"));
        assert!(!range.satisfies("1.2.2"));
    }

    #[test]
    fn test_satisfies_disjunction() {
        let range = parse("^0.2 || ^1.0");
        assert!(range.satisfies("0.2.5"));
        assert!(range.satisfies("1.4.0"));
        assert!(!range.satisfies("0.3.0"));
        assert!(!range.satisfies("2.0.0"));
    }

    #[test]
    fn test_into_conjuncts() {
        assert_eq!(parse("^1.0").into_conjuncts().len(), 2);
        assert_eq!(parse("1.0").into_conjuncts().len(), 1);
        assert_eq!(parse("^1.0 || ^2.0").into_conjuncts().len(), 1);
    }
}
