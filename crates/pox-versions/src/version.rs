//! Parsed version model and its canonical rendering

use std::cmp::Ordering;
use std::fmt;

use crate::stability::Stability;

/// Reserved major number standing in for the `master`, `trunk` and `default` branches
pub const DEFAULT_BRANCH_MAJOR: u64 = 9_999_999;

/// Which grammar produced a [`Version`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionKind {
    /// Numeric `major.minor.patch.extra` tuple
    Semantic,
    /// Arbitrary `dev-<name>` branch; holds the name with its case preserved
    Branch(String),
    /// Date-like version; holds the numeric head with every separator turned into `.`
    Date(String),
}

/// A normalized version. Instances are only built by the parser and never change afterwards.
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) extra: u64,
    pub(crate) pre_release: String,
    pub(crate) stability: Option<Stability>,
    pub(crate) dev_state: bool,
    pub(crate) metadata: String,
    pub(crate) original: String,
    pub(crate) kind: VersionKind,
}

impl Version {
    pub(crate) fn semantic(components: [u64; 4], original: &str) -> Self {
        Version {
            major: components[0],
            minor: components[1],
            patch: components[2],
            extra: components[3],
            pre_release: String::new(),
            stability: None,
            dev_state: false,
            metadata: String::new(),
            original: original.to_string(),
            kind: VersionKind::Semantic,
        }
    }

    /// `dev-master`, `trunk`, `default` and friends
    pub(crate) fn default_branch(original: &str) -> Self {
        let mut version = Version::semantic([DEFAULT_BRANCH_MAJOR, 0, 0, 0], original);
        version.stability = Some(Stability::Dev);
        version
    }

    pub(crate) fn branch(name: &str, original: &str) -> Self {
        let mut version = Version::semantic([0; 4], original);
        version.kind = VersionKind::Branch(name.to_string());
        version
    }

    pub(crate) fn date(head: String, original: &str) -> Self {
        let mut version = Version::semantic([0; 4], original);
        version.kind = VersionKind::Date(head);
        version
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn extra(&self) -> u64 {
        self.extra
    }

    /// Digits attached to the stability tag, e.g. `2.1` for `beta2.1`
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// The stability tag exactly as it was written (after shorthand expansion)
    pub fn stability_tag(&self) -> Option<Stability> {
        self.stability
    }

    /// Effective stability: arbitrary branches and `-dev` suffixed versions are dev,
    /// untagged versions are stable.
    pub fn stability(&self) -> Stability {
        if self.is_branch() || self.dev_state {
            return Stability::Dev;
        }
        self.stability.unwrap_or(Stability::Stable)
    }

    /// Whether the version ends in a literal `dev` state marker (`1.0.0-RC1-dev`)
    pub fn has_dev_state(&self) -> bool {
        self.dev_state
    }

    /// Build metadata (`+...`), never rendered nor compared
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// The untouched input
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn kind(&self) -> &VersionKind {
        &self.kind
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.kind, VersionKind::Branch(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self.kind, VersionKind::Date(_))
    }

    /// Whether this is the `9999999-dev` sentinel of a default branch
    pub fn is_default_branch(&self) -> bool {
        self.kind == VersionKind::Semantic && self.major == DEFAULT_BRANCH_MAJOR
    }

    /// Evaluates `self <operator> other`; unknown operators never hold
    pub fn compare_to(&self, other: &Version, operator: &str) -> bool {
        crate::comparator::Comparator::compare(self, operator, other)
    }

    /// Whether the version carries any explicit stability or dev marker
    pub(crate) fn has_stability_marker(&self) -> bool {
        self.is_branch() || self.stability.is_some() || self.dev_state
    }

    /// Numeric tail of the stability tag, non-numeric or absent tails count as zero
    pub(crate) fn pre_release_value(&self) -> f64 {
        self.pre_release.parse::<f64>().unwrap_or(0.0)
    }

    /// Components used for ordering; date heads contribute every dot-separated group.
    pub(crate) fn numeric_components(&self) -> Vec<u64> {
        match &self.kind {
            VersionKind::Date(head) => head
                .split('.')
                .map(|part| part.parse::<u64>().unwrap_or(0))
                .collect(),
            _ => vec![self.major, self.minor, self.patch, self.extra],
        }
    }

    fn fmt_tail(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stability) = self.stability {
            write!(f, "-{}", stability)?;
        }
        if !self.pre_release.is_empty() {
            write!(f, "{}", self.pre_release)?;
        }
        if self.dev_state {
            write!(f, "-dev")?;
        }
        Ok(())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            VersionKind::Branch(name) => write!(f, "dev-{}", name),
            VersionKind::Date(head) => {
                write!(f, "{}", head)?;
                self.fmt_tail(f)
            }
            VersionKind::Semantic => {
                write!(f, "{}", self.major)?;
                if self.major != DEFAULT_BRANCH_MAJOR {
                    write!(f, ".{}.{}.{}", self.minor, self.patch, self.extra)?;
                }
                self.fmt_tail(f)
            }
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::comparator::Comparator::compare_versions(self, other)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        crate::VersionParser::new()
            .parse_version(&raw)
            .map_err(serde::de::Error::custom)
    }
}
