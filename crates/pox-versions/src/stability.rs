//! Stability levels and the classifier mapping free-form tags onto them

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::version_parser::{VersionParserError, MODIFIER_REGEX};

/// Stability of a version.
///
/// `Patch` is only ever carried by a version's own tag (`1.0.0-p1`); for
/// precedence it ranks like `Stable`, and the classifier reports it as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Dev,
    Alpha,
    Beta,
    RC,
    Stable,
    Patch,
}

lazy_static! {
    // Anchored at the end so the tag closest to the tail wins
    static ref STABILITY_PARSE_RE: Regex = Regex::new(&format!(
        r"(?i){}(?:\+.*)?$",
        MODIFIER_REGEX
    )).unwrap();
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Dev => "dev",
            Stability::Alpha => "alpha",
            Stability::Beta => "beta",
            Stability::RC => "RC",
            Stability::Stable => "stable",
            Stability::Patch => "patch",
        }
    }

    /// Precedence used by the comparator: dev < alpha < beta < RC < stable.
    pub fn rank(&self) -> u8 {
        match self {
            Stability::Dev => 1,
            Stability::Alpha => 2,
            Stability::Beta => 3,
            Stability::RC => 4,
            Stability::Stable | Stability::Patch => 5,
        }
    }

    /// Expand a shorthand stability token found inside a version string.
    ///
    /// `a`, `b`, `p`, `pl` and `rc` expand to their canonical names, matching is
    /// case-insensitive. Returns `None` for anything that is not a stability tag.
    pub fn expand(token: &str) -> Option<Stability> {
        match token.to_ascii_lowercase().as_str() {
            "dev" => Some(Stability::Dev),
            "a" | "alpha" => Some(Stability::Alpha),
            "b" | "beta" => Some(Stability::Beta),
            "rc" => Some(Stability::RC),
            "stable" => Some(Stability::Stable),
            "p" | "pl" | "patch" => Some(Stability::Patch),
            _ => None,
        }
    }

    /// Returns the stability of a raw version string without fully parsing it.
    pub fn classify(version: &str) -> Stability {
        // VCS references never carry stability
        let version = match version.find('#') {
            Some(pos) => &version[..pos],
            None => version,
        };

        let lower = version.to_ascii_lowercase();
        if lower.starts_with("dev-") || lower.ends_with("-dev") || lower.ends_with(".dev") {
            return Stability::Dev;
        }

        if let Some(caps) = STABILITY_PARSE_RE.captures(&lower) {
            if caps.get(3).map_or(false, |m| !m.as_str().is_empty()) {
                return Stability::Dev;
            }

            if let Some(stability) = caps.get(1).and_then(|m| Stability::expand(m.as_str())) {
                return match stability {
                    Stability::Patch => Stability::Stable,
                    other => other,
                };
            }
        }

        Stability::Stable
    }
}

impl FromStr for Stability {
    type Err = VersionParserError;

    /// Parses a stability flag name as written after `@` (`stable`, `RC`, `beta`, `alpha`, `dev`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stable" => Ok(Stability::Stable),
            "rc" => Ok(Stability::RC),
            "beta" => Ok(Stability::Beta),
            "alpha" => Ok(Stability::Alpha),
            "dev" => Ok(Stability::Dev),
            _ => Err(VersionParserError::InvalidStability(s.to_string())),
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Stability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Stability {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Stability::expand(&raw)
            .ok_or_else(|| serde::de::Error::custom(VersionParserError::InvalidStability(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Stability::classify("1"), Stability::Stable);
        assert_eq!(Stability::classify("1.0"), Stability::Stable);
        assert_eq!(Stability::classify("3.2.1"), Stability::Stable);
        assert_eq!(Stability::classify("v3.2.1"), Stability::Stable);
        assert_eq!(Stability::classify("v2.0.x-dev"), Stability::Dev);
        assert_eq!(Stability::classify("v2.0.x-dev#abc123"), Stability::Dev);
        assert_eq!(Stability::classify("v2.0.x-dev#trunk/@123"), Stability::Dev);
        assert_eq!(Stability::classify("3.0-RC2"), Stability::RC);
        assert_eq!(Stability::classify("dev-master"), Stability::Dev);
        assert_eq!(Stability::classify("3.1.2-dev"), Stability::Dev);
        assert_eq!(Stability::classify("3.1.2.dev"), Stability::Dev);
        assert_eq!(Stability::classify("dev-feature+issue-1"), Stability::Dev);
        assert_eq!(Stability::classify("3.1.2-p1"), Stability::Stable);
        assert_eq!(Stability::classify("3.1.2-pl2"), Stability::Stable);
        assert_eq!(Stability::classify("3.1.2-patch"), Stability::Stable);
        assert_eq!(Stability::classify("3.1.2-alpha5"), Stability::Alpha);
        assert_eq!(Stability::classify("3.1.2-beta"), Stability::Beta);
        assert_eq!(Stability::classify("2.0B1"), Stability::Beta);
        assert_eq!(Stability::classify("1.2.0a1"), Stability::Alpha);
        assert_eq!(Stability::classify("1.2_a1"), Stability::Alpha);
        assert_eq!(Stability::classify("2.0.0rc1"), Stability::RC);
        assert_eq!(Stability::classify("1.0.0-alpha11+cs-1.1.0"), Stability::Alpha);
        assert_eq!(Stability::classify("1.0.0RC1dev"), Stability::Dev);
    }

    #[test]
    fn test_expand_shorthand() {
        assert_eq!(Stability::expand("a"), Some(Stability::Alpha));
        assert_eq!(Stability::expand("B"), Some(Stability::Beta));
        assert_eq!(Stability::expand("pl"), Some(Stability::Patch));
        assert_eq!(Stability::expand("p"), Some(Stability::Patch));
        assert_eq!(Stability::expand("rc"), Some(Stability::RC));
        assert_eq!(Stability::expand("Rc").map(|s| s.as_str()), Some("RC"));
        assert_eq!(Stability::expand("stable"), Some(Stability::Stable));
        assert_eq!(Stability::expand(""), None);
        assert_eq!(Stability::expand("snapshot"), None);
    }

    #[test]
    fn test_rank_order() {
        assert!(Stability::Dev.rank() < Stability::Alpha.rank());
        assert!(Stability::Alpha.rank() < Stability::Beta.rank());
        assert!(Stability::Beta.rank() < Stability::RC.rank());
        assert!(Stability::RC.rank() < Stability::Stable.rank());
        assert_eq!(Stability::Patch.rank(), Stability::Stable.rank());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!("dev".parse::<Stability>().unwrap(), Stability::Dev);
        assert_eq!("RC".parse::<Stability>().unwrap(), Stability::RC);
        assert_eq!("Stable".parse::<Stability>().unwrap(), Stability::Stable);
        assert!(matches!(
            "nightly".parse::<Stability>(),
            Err(VersionParserError::InvalidStability(s)) if s == "nightly"
        ));
    }
}
