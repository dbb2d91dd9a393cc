//! MultiConstraint - compound constraint combining multiple constraints

use std::fmt;
use thiserror::Error;

use super::{Constraint, ConstraintInterface, Operator, Range};
use crate::version::Version;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiConstraintError {
    #[error("Must provide at least two constraints for a MultiConstraint")]
    TooFewConstraints,
}

/// A constraint combining multiple constraints with AND (conjunctive) or OR (disjunctive) logic
#[derive(Debug, Clone)]
pub struct MultiConstraint {
    constraints: Vec<Range>,
    conjunctive: bool,
    merged: bool,
}

impl MultiConstraint {
    /// Create a new MultiConstraint
    pub fn new(constraints: Vec<Range>, conjunctive: bool) -> Result<Self, MultiConstraintError> {
        if constraints.len() < 2 {
            return Err(MultiConstraintError::TooFewConstraints);
        }

        Ok(MultiConstraint {
            constraints,
            conjunctive,
            merged: false,
        })
    }

    /// Conjunction of a lower and an upper bound
    pub(crate) fn from_bounds(lower: Constraint, upper: Constraint) -> Self {
        MultiConstraint {
            constraints: vec![Range::Constraint(lower), Range::Constraint(upper)],
            conjunctive: true,
            merged: false,
        }
    }

    /// Create a constraint from a list of alternatives or requirements, optimizing where possible.
    ///
    /// No constraint matches everything and a single one is returned as is.
    pub fn create(constraints: Vec<Range>, conjunctive: bool) -> Range {
        let mut constraints = constraints;

        match constraints.len() {
            0 => return Range::MatchAll,
            1 => return constraints.remove(0),
            _ => {}
        }

        if !conjunctive {
            if let Some(merged) = Self::merge_contiguous(&constraints) {
                log::debug!("Merged contiguous alternatives into {}", merged);
                return Range::Multi(merged);
            }
        }

        Range::Multi(MultiConstraint {
            constraints,
            conjunctive,
            merged: false,
        })
    }

    /// [>= 1 < 2] || [>= 2 < 3] => [>= 1 < 3]
    fn merge_contiguous(constraints: &[Range]) -> Option<MultiConstraint> {
        let (first, second) = match constraints {
            [first, second] => (Self::half_open(first)?, Self::half_open(second)?),
            _ => return None,
        };

        if first.1.version().to_string() != second.0.version().to_string() {
            return None;
        }

        Some(MultiConstraint {
            constraints: vec![
                Range::Constraint(first.0.clone()),
                Range::Constraint(second.1.clone()),
            ],
            conjunctive: true,
            merged: true,
        })
    }

    /// Bounds of a `[>= low < high]` pair
    fn half_open(range: &Range) -> Option<(&Constraint, &Constraint)> {
        let multi = range.as_multi()?;
        if !multi.conjunctive {
            return None;
        }

        match multi.constraints.as_slice() {
            [Range::Constraint(low), Range::Constraint(high)]
                if low.operator() == Operator::GreaterThanOrEqual && high.operator() == Operator::LessThan =>
            {
                Some((low, high))
            }
            _ => None,
        }
    }

    /// Get the constraints
    pub fn constraints(&self) -> &[Range] {
        &self.constraints
    }

    pub(crate) fn into_constraints(self) -> Vec<Range> {
        self.constraints
    }

    /// Check if this is a conjunctive (AND) constraint
    pub fn is_conjunctive(&self) -> bool {
        self.conjunctive
    }

    /// Check if this is a disjunctive (OR) constraint
    pub fn is_disjunctive(&self) -> bool {
        !self.conjunctive
    }

    /// Whether this interval was merged from two contiguous alternatives
    pub fn is_merged(&self) -> bool {
        self.merged
    }
}

impl ConstraintInterface for MultiConstraint {
    fn matches(&self, version: &Version) -> bool {
        if self.conjunctive {
            self.constraints.iter().all(|c| c.matches(version))
        } else {
            self.constraints.iter().any(|c| c.matches(version))
        }
    }
}

impl fmt::Display for MultiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Merged intervals keep the separator of the alternatives they came from
        let separator = if self.conjunctive && !self.merged { " " } else { " || " };
        let parts: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VersionParser;

    fn leaf(operator: Operator, version: &str) -> Range {
        let version = VersionParser::new().parse_version(version).unwrap();
        Range::Constraint(Constraint::new(operator, version))
    }

    fn interval(low: &str, high: &str) -> Range {
        Range::Multi(
            MultiConstraint::new(
                vec![leaf(Operator::GreaterThanOrEqual, low), leaf(Operator::LessThan, high)],
                true,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_too_few_constraints() {
        assert_eq!(
            MultiConstraint::new(vec![Range::MatchAll], true).unwrap_err(),
            MultiConstraintError::TooFewConstraints
        );
    }

    #[test]
    fn test_create_empty_and_single() {
        assert!(MultiConstraint::create(vec![], false).is_match_all());

        let single = MultiConstraint::create(vec![leaf(Operator::Equal, "1.0")], false);
        assert_eq!(single.to_string(), "== 1.0.0.0");
    }

    #[test]
    fn test_create_merges_contiguous() {
        let merged = MultiConstraint::create(
            vec![interval("1.0.0.0-dev", "2.0.0.0-dev"), interval("2.0.0.0-dev", "3.0.0.0-dev")],
            false,
        );

        assert_eq!(merged.to_string(), "[>= 1.0.0.0-dev || < 3.0.0.0-dev]");

        let multi = merged.as_multi().unwrap();
        assert!(multi.is_merged());
        assert!(multi.is_conjunctive());

        let parser = VersionParser::new();
        assert!(merged.matches(&parser.parse_version("1.5").unwrap()));
        assert!(merged.matches(&parser.parse_version("2.5").unwrap()));
        assert!(!merged.matches(&parser.parse_version("3.0").unwrap()));
        assert!(!merged.matches(&parser.parse_version("0.9").unwrap()));
    }

    #[test]
    fn test_create_keeps_gaps() {
        let kept = MultiConstraint::create(
            vec![interval("1.0.0.0-dev", "2.0.0.0-dev"), interval("3.0.0.0-dev", "4.0.0.0-dev")],
            false,
        );

        assert_eq!(
            kept.to_string(),
            "[[>= 1.0.0.0-dev < 2.0.0.0-dev] || [>= 3.0.0.0-dev < 4.0.0.0-dev]]"
        );
        assert!(kept.as_multi().unwrap().is_disjunctive());
    }

    #[test]
    fn test_conjunctive_matches() {
        let range = interval("1.0.0.0-dev", "2.0.0.0-dev");
        let parser = VersionParser::new();

        assert!(range.matches(&parser.parse_version("1.0.0-beta").unwrap()));
        assert!(range.matches(&parser.parse_version("1.9.9").unwrap()));
        assert!(!range.matches(&parser.parse_version("2.0.0-alpha").unwrap()));
    }
}
