//! String-level shortcuts over the parser and comparator

use crate::constraint::Range;
use crate::{Version, VersionParser, VersionParserError};

/// Entry points taking raw strings, for callers that don't keep parsed values around
pub struct Semver;

impl Semver {
    /// Whether `version` is accepted by `constraints`.
    ///
    /// Unparseable versions or constraints never satisfy anything.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        match Self::parse_constraints(constraints) {
            Ok(range) => range.satisfies(version),
            Err(err) => {
                log::debug!("{}", err);
                false
            }
        }
    }

    /// The versions accepted by `constraints`, in input order
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let range = match Self::parse_constraints(constraints) {
            Ok(range) => range,
            Err(err) => {
                log::debug!("{}", err);
                return Vec::new();
            }
        };

        versions
            .iter()
            .filter(|v| range.satisfies(v))
            .map(|v| v.to_string())
            .collect()
    }

    pub fn parse_constraints(constraints: &str) -> Result<Range, VersionParserError> {
        VersionParser::new().parse_constraints(constraints)
    }

    /// Check a version against a range parsed earlier
    pub fn satisfies_parsed(version: &str, constraints: &Range) -> bool {
        constraints.satisfies(version)
    }

    /// Ascending order; unparseable entries are dropped
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::sorted(versions).into_iter().map(|(_, v)| v.to_string()).collect()
    }

    /// Descending order; unparseable entries are dropped
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::sorted(versions).into_iter().rev().map(|(_, v)| v.to_string()).collect()
    }

    fn sorted<'a>(versions: &[&'a str]) -> Vec<(Version, &'a str)> {
        let parser = VersionParser::new();

        let mut parsed: Vec<(Version, &str)> = versions
            .iter()
            .filter_map(|v| match parser.parse_version(v) {
                Ok(version) => Some((version, *v)),
                Err(err) => {
                    log::debug!("Dropping {} from sort: {}", v, err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| a.cmp(b));
        parsed
    }
}
