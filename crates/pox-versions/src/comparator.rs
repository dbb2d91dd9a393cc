//! Version comparison utilities

use std::cmp::Ordering;

use crate::constraint::Operator;
use crate::stability::Stability;
use crate::version::{Version, VersionKind};

/// Comparator for ordering parsed versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// Accepts `>`, `<`, `>=`, `<=`, `==`, `=`, `!=` and `<>`; any other operator
    /// never matches.
    pub fn compare(version1: &Version, operator: &str, version2: &Version) -> bool {
        match operator.parse::<Operator>() {
            Ok(operator) => Self::compare_with(version1, operator, version2),
            Err(_) => false,
        }
    }

    pub fn compare_with(version1: &Version, operator: Operator, version2: &Version) -> bool {
        operator.matches(Self::compare_versions(version1, version2))
    }

    /// Total order over versions.
    ///
    /// Arbitrary branches sort below everything else and among themselves by name.
    /// The default-branch sentinel sorts above every other version, dates included.
    /// Other versions compare by numeric components, then stability rank, then the
    /// numeric value of the stability digits; a trailing dev state sorts first.
    pub fn compare_versions(version1: &Version, version2: &Version) -> Ordering {
        match (version1.kind(), version2.kind()) {
            (VersionKind::Branch(a), VersionKind::Branch(b)) => return a.cmp(b),
            (VersionKind::Branch(_), _) => return Ordering::Less,
            (_, VersionKind::Branch(_)) => return Ordering::Greater,
            _ => {}
        }

        match (version1.is_default_branch(), version2.is_default_branch()) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }

        compare_components(&version1.numeric_components(), &version2.numeric_components())
            .then_with(|| stability_rank(version1).cmp(&stability_rank(version2)))
            .then_with(|| version1.pre_release_value().total_cmp(&version2.pre_release_value()))
            .then_with(|| version2.has_dev_state().cmp(&version1.has_dev_state()))
    }
}

fn stability_rank(version: &Version) -> u8 {
    version.stability_tag().unwrap_or(Stability::Stable).rank()
}

// Missing trailing components count as zero
fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let left = a.get(i).copied().unwrap_or(0);
            let right = b.get(i).copied().unwrap_or(0);
            left.cmp(&right)
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VersionParser;

    fn v(version: &str) -> Version {
        VersionParser::new().parse_version(version).unwrap()
    }

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::greater_than(&v("1.26.0"), &v("dev-foo")));
        assert!(!Comparator::greater_than(&v("dev-foo"), &v("dev-master")));
        assert!(!Comparator::greater_than(&v("dev-bar"), &v("dev-foo")));
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(!Comparator::greater_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::less_than(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than(&v("1.25.0"), &v("1.26.0")));
        assert!(Comparator::less_than(&v("1.25.0"), &v("1.26.0-beta")));
        assert!(Comparator::less_than(&v("dev-foo"), &v("1.0.0")));
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::less_than_or_equal_to(&v("1.25.0"), &v("1.26.0")));
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(Comparator::equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::equal_to(&v("1.25"), &v("1.25.0.0")));
        assert!(Comparator::equal_to(&v("dev-foo"), &v("dev-foo")));
        assert!(!Comparator::equal_to(&v("dev-foo"), &v("dev-bar")));
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to(&v("1.25.0"), &v("1.24.0")));
        assert!(!Comparator::not_equal_to(&v("1.25.0"), &v("1.25.0")));
        assert!(Comparator::not_equal_to(&v("dev-foo"), &v("dev-bar")));
    }

    #[test]
    fn test_compare_operators() {
        assert!(Comparator::compare(&v("1.25.0"), ">", &v("1.24.0")));
        assert!(Comparator::compare(&v("1.25.0"), ">=", &v("1.25.0")));
        assert!(Comparator::compare(&v("1.25.0"), "<", &v("1.26.0")));
        assert!(Comparator::compare(&v("1.25.0"), "<=", &v("1.25.0")));
        assert!(Comparator::compare(&v("1.25.0"), "==", &v("1.25.0")));
        assert!(Comparator::compare(&v("1.25.0"), "=", &v("1.25.0")));
        assert!(Comparator::compare(&v("1.25.0"), "!=", &v("1.24.0")));
        assert!(Comparator::compare(&v("1.25.0"), "<>", &v("1.24.0")));
        assert!(!Comparator::compare(&v("1.25.0"), "~", &v("1.24.0")));
        assert!(!Comparator::compare(&v("1.25.0"), "", &v("1.25.0")));
    }

    #[test]
    fn test_stability_order() {
        assert!(Comparator::less_than(&v("1.0.0-dev"), &v("1.0.0-alpha")));
        assert!(Comparator::less_than(&v("1.0.0-alpha"), &v("1.0.0-beta")));
        assert!(Comparator::less_than(&v("1.0.0-beta"), &v("1.0.0-RC")));
        assert!(Comparator::less_than(&v("1.0.0-RC"), &v("1.0.0")));
        assert!(Comparator::equal_to(&v("1.0.0-patch"), &v("1.0.0")));
        assert!(Comparator::less_than(&v("1.0.0-beta2"), &v("1.0.0-beta10")));
        assert!(Comparator::less_than(&v("1.25.0-beta2.1"), &v("1.25.0-b.3")));
        assert!(Comparator::less_than(&v("1.0.0-RC1-dev"), &v("1.0.0-RC1")));
        assert!(Comparator::greater_than(&v("1.0.0-RC1-dev"), &v("1.0.0-beta2")));
    }

    #[test]
    fn test_extra_component_counts() {
        assert!(Comparator::less_than(&v("1.2.3.4"), &v("1.2.3.5")));
        assert!(Comparator::greater_than(&v("1.2.3.4"), &v("1.2.3")));
    }

    #[test]
    fn test_date_versions() {
        assert!(Comparator::less_than(&v("2010-01-02"), &v("2010-01-03")));
        assert!(Comparator::greater_than(&v("20100102"), &v("1.0.0")));
    }

    #[test]
    fn test_default_branch_sorts_last() {
        assert!(Comparator::greater_than(&v("dev-master"), &v("99999.0.0")));
        assert!(Comparator::equal_to(&v("dev-master"), &v("master")));
        assert!(Comparator::equal_to(&v("dev-master"), &v("9999999-dev")));
    }

    #[test]
    fn test_default_branch_sorts_above_dates() {
        assert!(Comparator::greater_than(&v("dev-master"), &v("20100102")));
        assert!(Comparator::greater_than(&v("trunk"), &v("20991231-235959")));
        assert!(Comparator::less_than(&v("99999999"), &v("dev-default")));
        assert!(Comparator::greater_than(&v("20100102"), &v("dev-feature")));
    }
}
