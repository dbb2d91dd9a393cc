//! Version parsing and normalization module

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Match, Regex};
use thiserror::Error;

use crate::constraint::{Constraint, MultiConstraint, MultiConstraintError, Operator, Range};
use crate::stability::Stability;
use crate::version::{Version, DEFAULT_BRANCH_MAJOR};

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Could not parse version constraint {constraint}: {reason}")]
    InvalidConstraint { constraint: String, reason: String },
    #[error("Could not parse version constraint {constraint}: Invalid operator \"~>\", you probably meant to use the \"~\" operator")]
    InvalidOperator { constraint: String },
    #[error("Invalid stability \"{0}\"")]
    InvalidStability(String),
    #[error("Carry overflow while expanding \"{0}\"")]
    CarryOverflow(String),
    #[error(transparent)]
    MultiConstraint(#[from] MultiConstraintError),
}

/// Stability tag with its numeric tail, followed by an optional `dev` state marker.
///
/// Groups: stability token, stability digits, dev state.
pub(crate) const MODIFIER_REGEX: &str =
    r"[._-]?(?:(dev|stable|beta|b|RC|alpha|a|patch|pl|p)((?:[.-]?\d+)*)?)?([.-]?dev)?";

const STABILITIES_REGEX: &str = r"stable|RC|beta|alpha|dev";

lazy_static! {
    // Classical versioning regex
    static ref CLASSICAL_VERSION_RE: Regex = Regex::new(&format!(
        r"(?i)^v?(\d{{1,5}})(\.\d+)?(\.\d+)?(\.\d+)?{}(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
        MODIFIER_REGEX
    )).unwrap();

    // Date-based versioning regex
    static ref DATE_VERSION_RE: Regex = Regex::new(&format!(
        r"(?i)^v?(\d{{4}}(?:[.:-]?\d{{2}}){{1,6}}(?:[.:-]?\d{{1,3}})?){}$",
        MODIFIER_REGEX
    )).unwrap();

    // Default branch names and their rendered sentinel
    static ref DEFAULT_BRANCH_RE: Regex = Regex::new(r"(?i)^(?:(?:dev-)?(?:master|trunk|default)|9999999-dev)$").unwrap();

    // Branch normalization regex - capture groups for each numeric or x part
    static ref BRANCH_RE: Regex = Regex::new(
        r"(?i)^v?(\d+)(?:\.(\d+|[xX*]))?(?:\.(\d+|[xX*]))?(?:\.(\d+|[xX*]))?$"
    ).unwrap();

    static ref ALIAS_RE: Regex = Regex::new(r"^([^,\s]+)\s+as\s+([^,\s]+)$").unwrap();

    static ref STABILITY_FLAG_RE: Regex = Regex::new(&format!(
        r"(?i)@(?:{})$",
        STABILITIES_REGEX
    )).unwrap();

    static ref BUILD_METADATA_RE: Regex = Regex::new(r"^([^,\s+]+)\+[^\s]+$").unwrap();

    static ref DEV_BRANCH_RE: Regex = Regex::new(r"(?i)^(.*?)[.-]?dev$").unwrap();

    static ref NUMERIC_ALIAS_RE: Regex = Regex::new(r"(?i)^(?P<version>(?:\d+\.)*\d+)(?:\.x)?-dev$").unwrap();

    // Constraint regexes
    static ref WILDCARD_RE: Regex = Regex::new(r"(?i)^v?[xX*](?:\.[xX*])*$").unwrap();
    static ref X_RANGE_RE: Regex = Regex::new(r"^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:\.[xX*])+$").unwrap();

    static ref OR_CONSTRAINT_RE: Regex = Regex::new(r"\s*\|\|?\s*").unwrap();
    static ref AND_CONSTRAINT_RE: Regex = Regex::new(r"\s*[ ,]\s*").unwrap();
    static ref MALFORMED_AND_RE: Regex = Regex::new(r"^\s*,|,\s*,|,\s*$").unwrap();

    static ref CONSTRAINT_STABILITY_RE: Regex = Regex::new(&format!(
        r"(?i)^([^,\s]*?)@({})$",
        STABILITIES_REGEX
    )).unwrap();

    // Reference on dev version
    static ref CONSTRAINT_REF_RE: Regex = Regex::new(r"(?i)^(dev-[^,\s@]+?|[^,\s@]+?\.x-dev)#.+$").unwrap();

    // Version regex for shorthand operands (tilde, caret, hyphen)
    static ref VERSION_REGEX: String = format!(
        r"v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:\.(\d+))?{}(?:\+[^\s]+)?",
        MODIFIER_REGEX
    );

    static ref TILDE_RE: Regex = Regex::new(&format!(r"(?i)^~>?{}$", *VERSION_REGEX)).unwrap();
    static ref CARET_RE: Regex = Regex::new(&format!(r"(?i)^\^{}$", *VERSION_REGEX)).unwrap();
    static ref OPERAND_RE: Regex = Regex::new(&format!(r"(?i)^{}$", *VERSION_REGEX)).unwrap();
    static ref HYPHEN_RE: Regex = Regex::new(r"^(?P<from>\S+) +- +(?P<to>\S+)$").unwrap();

    static ref BASIC_COMPARATOR_RE: Regex = Regex::new(r"^(<>|!=|>=?|<=?|==?)?\s*(.*)$").unwrap();
}

/// Version components as written; `None` marks a component that was left out
type Parts = [Option<u64>; 4];

/// Stability tag, its digits and the trailing dev state of a version
#[derive(Debug, Clone, Default)]
struct Modifier {
    stability: Option<Stability>,
    pre_release: String,
    dev: bool,
}

impl Modifier {
    fn dev() -> Self {
        Modifier {
            stability: Some(Stability::Dev),
            ..Modifier::default()
        }
    }

    /// Reads the three modifier groups starting at `index`
    fn from_captures(caps: &Captures, index: usize) -> Self {
        let stability = caps.get(index).and_then(|m| Stability::expand(m.as_str()));
        let pre_release = match stability {
            Some(_) => caps
                .get(index + 1)
                .map_or("", |m| m.as_str())
                .trim_start_matches(['.', '-'])
                .to_string(),
            None => String::new(),
        };

        Modifier {
            stability,
            pre_release,
            dev: caps.get(index + 2).is_some(),
        }
    }

    fn is_empty(&self) -> bool {
        self.stability.is_none() && !self.dev
    }

    /// An explicit marker is kept as is, an unmarked version becomes a dev lower bound
    fn or_dev(self) -> Self {
        if self.is_empty() {
            Modifier::dev()
        } else {
            self
        }
    }

    fn apply(self, version: &mut Version) {
        version.stability = self.stability;
        version.pre_release = self.pre_release;
        version.dev_state = self.dev;
    }
}

fn parse_part(part: Option<Match>, original: &str) -> Result<Option<u64>, VersionParserError> {
    part.map(|m| m.as_str().trim_start_matches('.').parse::<u64>())
        .transpose()
        .map_err(|_| VersionParserError::InvalidVersion(original.to_string()))
}

fn captured_parts(caps: &Captures, count: usize, original: &str) -> Result<Parts, VersionParserError> {
    let mut parts = [None; 4];
    for (i, part) in parts.iter_mut().enumerate().take(count) {
        *part = parse_part(caps.get(i + 1), original)?;
    }
    Ok(parts)
}

/// One-based position of the last component that was written
fn last_position(parts: &Parts) -> usize {
    parts.iter().rposition(Option::is_some).map_or(1, |i| i + 1)
}

fn strip_metadata(version: &str) -> &str {
    BUILD_METADATA_RE
        .captures(version)
        .and_then(|caps| caps.get(1))
        .map_or(version, |m| m.as_str())
}

fn is_bare_operator(part: &str) -> bool {
    matches!(part, "<" | ">" | "<=" | ">=" | "=" | "==" | "!=" | "<>" | "^" | "~")
}

/// Version parser for normalizing and parsing version strings
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse_version(version).is_ok()
    }

    /// Returns the stability of a version
    pub fn parse_stability(version: &str) -> Stability {
        Stability::classify(version)
    }

    /// Normalize a stability flag name
    pub fn normalize_stability(stability: &str) -> Result<Stability, VersionParserError> {
        stability.parse()
    }

    /// Normalizes a version string into its canonical textual form
    pub fn normalize(&self, version: &str) -> Result<String, VersionParserError> {
        self.parse_version(version).map(|v| v.to_string())
    }

    /// Parses a version string into a [`Version`]
    pub fn parse_version(&self, version: &str) -> Result<Version, VersionParserError> {
        let original = version;
        let version = version.trim();

        if version.is_empty() {
            return Err(VersionParserError::InvalidVersion(original.to_string()));
        }

        // Strip off aliasing
        let version = ALIAS_RE
            .captures(version)
            .and_then(|caps| caps.get(1))
            .map_or(version, |m| m.as_str());

        // Strip off stability flag
        let version = STABILITY_FLAG_RE.replace(version, "");

        if DEFAULT_BRANCH_RE.is_match(&version) {
            return Ok(Version::default_branch(original));
        }

        // If requirement is branch-like, use full name
        if version.len() > 4 && version.get(..4).map_or(false, |p| p.eq_ignore_ascii_case("dev-")) {
            return Ok(Version::branch(&version[4..], original));
        }

        if let Some(parsed) = self.parse_semantic(&version, original)? {
            log::trace!("Parsed \"{}\" as {}", original, parsed);
            return Ok(parsed);
        }

        // Match date(time) based versioning
        if let Some(caps) = DATE_VERSION_RE.captures(&version) {
            let head: String = caps
                .get(1)
                .map_or("", |m| m.as_str())
                .chars()
                .map(|c| if c.is_ascii_digit() { c } else { '.' })
                .collect();

            let mut parsed = Version::date(head, original);
            Modifier::from_captures(&caps, 2).apply(&mut parsed);
            log::trace!("Parsed \"{}\" as date version {}", original, parsed);
            return Ok(parsed);
        }

        // Match dev branches
        if let Some(branch) = DEV_BRANCH_RE.captures(&version).and_then(|caps| caps.get(1)) {
            return self.normalize_branch_from(branch.as_str(), original);
        }

        Err(VersionParserError::InvalidVersion(original.to_string()))
    }

    fn parse_semantic(&self, version: &str, original: &str) -> Result<Option<Version>, VersionParserError> {
        let caps = match CLASSICAL_VERSION_RE.captures(version) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        let parts = captured_parts(&caps, 4, original)?;
        let mut parsed = Version::semantic(parts.map(|p| p.unwrap_or(0)), original);
        Modifier::from_captures(&caps, 5).apply(&mut parsed);
        parsed.metadata = caps.get(8).map_or("", |m| m.as_str()).to_string();

        Ok(Some(parsed))
    }

    /// Extract numeric prefix from alias
    pub fn parse_numeric_alias_prefix(&self, branch: &str) -> Option<String> {
        NUMERIC_ALIAS_RE
            .captures(branch)
            .and_then(|caps| caps.name("version"))
            .map(|version| format!("{}.", version.as_str()))
    }

    /// Normalizes a branch name
    pub fn normalize_branch(&self, name: &str) -> Result<Version, VersionParserError> {
        self.normalize_branch_from(name.trim(), name)
    }

    fn normalize_branch_from(&self, name: &str, original: &str) -> Result<Version, VersionParserError> {
        if name.is_empty() {
            return Err(VersionParserError::InvalidVersion(original.to_string()));
        }

        if DEFAULT_BRANCH_RE.is_match(name) {
            return Ok(Version::default_branch(original));
        }

        if let Some(caps) = BRANCH_RE.captures(name) {
            let parts: Vec<String> = (1..=4)
                .map(|i| match caps.get(i).map(|m| m.as_str()) {
                    Some(part) if part.bytes().all(|b| b.is_ascii_digit()) => part.to_string(),
                    _ => DEFAULT_BRANCH_MAJOR.to_string(),
                })
                .collect();

            let expanded = format!("{}-dev", parts.join("."));
            log::trace!("Branch \"{}\" expands to \"{}\"", name, expanded);

            return self
                .parse_semantic(&expanded, original)?
                .ok_or_else(|| VersionParserError::InvalidVersion(original.to_string()));
        }

        Ok(Version::branch(name, original))
    }

    /// Renders `dev-master`, `dev-trunk` and `dev-default` as the `9999999-dev` sentinel
    pub fn normalize_default_branch(&self, name: &str) -> String {
        if name == "dev-master" || name == "dev-default" || name == "dev-trunk" {
            format!("{}-dev", DEFAULT_BRANCH_MAJOR)
        } else {
            name.to_string()
        }
    }

    /// Parse a constraint string into a matchable [`Range`]
    pub fn parse_constraints(&self, constraints: &str) -> Result<Range, VersionParserError> {
        let pretty_constraint = constraints.trim();

        if pretty_constraint.is_empty() {
            return Err(VersionParserError::InvalidConstraint {
                constraint: String::new(),
                reason: "empty constraint".to_string(),
            });
        }

        // A stability flag or reference on the whole expression is dropped
        let mut expression = pretty_constraint;
        if let Some(stripped) = CONSTRAINT_STABILITY_RE.captures(expression).and_then(|caps| caps.get(1)) {
            if !stripped.as_str().is_empty() {
                expression = stripped.as_str();
            }
        }
        if let Some(stripped) = CONSTRAINT_REF_RE.captures(expression).and_then(|caps| caps.get(1)) {
            expression = stripped.as_str();
        }

        // Split by OR (|| or |)
        let or_constraints: Vec<&str> = OR_CONSTRAINT_RE.split(expression).collect();

        if or_constraints.first().map_or(false, |s| s.is_empty()) {
            return Err(VersionParserError::InvalidConstraint {
                constraint: pretty_constraint.to_string(),
                reason: "leading operator".to_string(),
            });
        }
        if or_constraints.last().map_or(false, |s| s.is_empty()) {
            return Err(VersionParserError::InvalidConstraint {
                constraint: pretty_constraint.to_string(),
                reason: "trailing operator".to_string(),
            });
        }

        let mut or_groups: Vec<Range> = Vec::with_capacity(or_constraints.len());

        for or_constraint in or_constraints {
            if or_constraint.is_empty() {
                return Err(VersionParserError::InvalidConstraint {
                    constraint: pretty_constraint.to_string(),
                    reason: "empty alternative".to_string(),
                });
            }

            let and_constraints = self.split_and_constraints(or_constraint)?;

            let group = if and_constraints.len() > 1 {
                let mut objects: Vec<Range> = Vec::new();
                for and_constraint in &and_constraints {
                    objects.extend(self.parse_constraint(and_constraint)?.into_conjuncts());
                }
                Range::Multi(MultiConstraint::new(objects, true)?)
            } else {
                self.parse_constraint(&and_constraints[0])?
            };

            or_groups.push(group);
        }

        let parsed = MultiConstraint::create(or_groups, false);
        log::trace!("Parsed constraint \"{}\" as {}", pretty_constraint, parsed);

        Ok(parsed)
    }

    /// Split constraint string by AND operators (comma or space)
    fn split_and_constraints(&self, input: &str) -> Result<Vec<String>, VersionParserError> {
        if MALFORMED_AND_RE.is_match(input) {
            return Err(VersionParserError::InvalidConstraint {
                constraint: input.to_string(),
                reason: "malformed conjunction".to_string(),
            });
        }

        let parts: Vec<&str> = AND_CONSTRAINT_RE
            .split(input)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() <= 1 {
            return Ok(vec![input.to_string()]);
        }

        let mut constraints = Vec::new();
        let mut index = 0;

        while index < parts.len() {
            let mut current = String::new();

            // An operator written apart from its version belongs to the next part
            if is_bare_operator(parts[index]) {
                current.push_str(parts[index]);
                index += 1;

                if index >= parts.len() {
                    constraints.push(current);
                    break;
                }
            }

            current.push_str(parts[index]);

            // Hyphen ranges and aliases span three parts
            if index + 2 < parts.len() && (parts[index + 1] == "-" || parts[index + 1] == "as") {
                current.push(' ');
                current.push_str(parts[index + 1]);
                current.push(' ');
                current.push_str(parts[index + 2]);
                index += 2;
            }

            constraints.push(current);
            index += 1;
        }

        Ok(constraints)
    }

    /// Expands a single constraint token, naming the token in any error
    fn parse_constraint(&self, constraint: &str) -> Result<Range, VersionParserError> {
        self.expand_constraint(constraint.trim()).map_err(|err| match err {
            VersionParserError::InvalidVersion(version) => VersionParserError::InvalidConstraint {
                constraint: constraint.trim().to_string(),
                reason: format!("Invalid version \"{}\"", version),
            },
            other => other,
        })
    }

    fn expand_constraint(&self, original: &str) -> Result<Range, VersionParserError> {
        // Strip off aliasing
        let constraint = ALIAS_RE
            .captures(original)
            .and_then(|caps| caps.get(1))
            .map_or(original, |m| m.as_str());

        // Strip @stability flags
        let (constraint, stability_flag) = match CONSTRAINT_STABILITY_RE.captures(constraint) {
            Some(caps) => {
                let c = caps.get(1).map_or("", |m| m.as_str());
                let c = if c.is_empty() { "*" } else { c };
                let flag = caps.get(2).and_then(|m| m.as_str().parse::<Stability>().ok());
                (c, flag)
            }
            None => (constraint, None),
        };

        // Strip #refs
        let constraint = CONSTRAINT_REF_RE
            .captures(constraint)
            .and_then(|caps| caps.get(1))
            .map_or(constraint, |m| m.as_str());

        // Match any wildcard
        if WILDCARD_RE.is_match(constraint) {
            return Ok(Range::MatchAll);
        }

        // Tilde Range
        if let Some(caps) = TILDE_RE.captures(constraint) {
            if constraint.starts_with("~>") {
                return Err(VersionParserError::InvalidOperator {
                    constraint: constraint.to_string(),
                });
            }
            return self.parse_tilde_constraint(&caps, constraint);
        }

        // Caret Range
        if let Some(caps) = CARET_RE.captures(constraint) {
            return self.parse_caret_constraint(&caps, constraint);
        }

        // X Range
        if let Some(caps) = X_RANGE_RE.captures(constraint) {
            return self.parse_x_range_constraint(&caps, constraint);
        }

        // Hyphen Range
        if let Some(caps) = HYPHEN_RE.captures(constraint) {
            let from = caps.name("from").and_then(|m| OPERAND_RE.captures(m.as_str()));
            let to = caps.name("to").and_then(|m| OPERAND_RE.captures(m.as_str()));
            if let (Some(from), Some(to)) = (from, to) {
                return self.parse_hyphen_constraint(&from, &to, constraint);
            }
        }

        self.parse_basic_constraint(constraint, stability_flag)
    }

    fn parse_basic_constraint(
        &self,
        constraint: &str,
        stability_flag: Option<Stability>,
    ) -> Result<Range, VersionParserError> {
        let caps = BASIC_COMPARATOR_RE
            .captures(constraint)
            .ok_or_else(|| VersionParserError::InvalidConstraint {
                constraint: constraint.to_string(),
                reason: "Could not parse constraint".to_string(),
            })?;

        let operator_str = caps.get(1).map_or("=", |m| m.as_str());
        let version_str = caps.get(2).map_or("", |m| m.as_str()).trim();

        if version_str.is_empty() {
            return Err(VersionParserError::InvalidConstraint {
                constraint: constraint.to_string(),
                reason: "empty version".to_string(),
            });
        }

        let operator: Operator = operator_str
            .parse()
            .map_err(|err: crate::constraint::InvalidOperatorError| VersionParserError::InvalidConstraint {
                constraint: constraint.to_string(),
                reason: err.to_string(),
            })?;

        let mut version_text: Cow<str> = Cow::Borrowed(version_str);
        let mut flagged = false;

        if let Some(flag) = stability_flag.filter(|flag| *flag != Stability::Stable) {
            if Stability::classify(version_str) == Stability::Stable {
                version_text = Cow::Owned(format!("{}-{}", strip_metadata(version_str), flag));
                flagged = true;
            }
        }

        let mut version = self.parse_version(&version_text)?;

        // Unmarked bounds of < and >= include the pre-releases leading up to them
        if !flagged
            && matches!(operator, Operator::LessThan | Operator::GreaterThanOrEqual)
            && !version.has_stability_marker()
        {
            version.stability = Some(Stability::Dev);
        }

        Ok(Range::Constraint(Constraint::new(operator, version)))
    }

    fn parse_tilde_constraint(&self, caps: &Captures, constraint: &str) -> Result<Range, VersionParserError> {
        let parts = captured_parts(caps, 4, constraint)?;
        let position = last_position(&parts);

        let modifier = Modifier::from_captures(caps, 5);
        let modifier = if modifier.dev || modifier.stability.is_none() {
            Modifier::dev()
        } else {
            modifier
        };

        let low_version = self.expand_version(&parts, position, 0, modifier, constraint)?;

        // The upper bound bumps the component one step more significant, never past major
        let high_position = std::cmp::max(1, position - 1);
        let high_version = self.expand_version(&parts, high_position, 1, Modifier::dev(), constraint)?;

        log::trace!("Tilde {} spans [{}, {})", constraint, low_version, high_version);
        Ok(Range::interval(low_version, high_version))
    }

    fn parse_caret_constraint(&self, caps: &Captures, constraint: &str) -> Result<Range, VersionParserError> {
        let parts = captured_parts(caps, 4, constraint)?;

        // Determine position based on leading zeros
        let position = if parts[0] != Some(0) || parts[1].is_none() {
            1
        } else if parts[1] != Some(0) || parts[2].is_none() {
            2
        } else {
            3
        };

        let modifier = Modifier::from_captures(caps, 5).or_dev();
        let low_version = self.expand_version(&parts, 4, 0, modifier, constraint)?;
        let high_version = self.expand_version(&parts, position, 1, Modifier::dev(), constraint)?;

        log::trace!("Caret {} spans [{}, {})", constraint, low_version, high_version);
        Ok(Range::interval(low_version, high_version))
    }

    fn parse_x_range_constraint(&self, caps: &Captures, constraint: &str) -> Result<Range, VersionParserError> {
        let parts = captured_parts(caps, 3, constraint)?;
        let position = last_position(&parts);

        let low_version = self.expand_version(&parts, position, 0, Modifier::dev(), constraint)?;
        let high_version = self.expand_version(&parts, position, 1, Modifier::dev(), constraint)?;

        // A lower bound of 0.0.0.0-dev excludes nothing
        if low_version.to_string() == "0.0.0.0-dev" {
            return Ok(Range::Constraint(Constraint::new(Operator::LessThan, high_version)));
        }

        Ok(Range::interval(low_version, high_version))
    }

    fn parse_hyphen_constraint(
        &self,
        from: &Captures,
        to: &Captures,
        constraint: &str,
    ) -> Result<Range, VersionParserError> {
        let from_parts = captured_parts(from, 4, constraint)?;
        let low_modifier = Modifier::from_captures(from, 5).or_dev();
        let low_version = self.expand_version(&from_parts, 4, 0, low_modifier, constraint)?;
        let lower_bound = Constraint::new(Operator::GreaterThanOrEqual, low_version);

        let to_parts = captured_parts(to, 4, constraint)?;
        let to_modifier = Modifier::from_captures(to, 5);

        // A complete upper version is inclusive, a partial one admits everything it prefixes
        let upper_bound = if (to_parts[1].is_some() && to_parts[2].is_some()) || !to_modifier.is_empty() {
            let high_version = self.expand_version(&to_parts, 4, 0, to_modifier, constraint)?;
            Constraint::new(Operator::LessThanOrEqual, high_version)
        } else {
            let position = if to_parts[1].is_none() { 1 } else { 2 };
            let high_version = self.expand_version(&to_parts, position, 1, Modifier::dev(), constraint)?;
            Constraint::new(Operator::LessThan, high_version)
        };

        Ok(Range::Multi(MultiConstraint::new(
            vec![Range::Constraint(lower_bound), Range::Constraint(upper_bound)],
            true,
        )?))
    }

    /// Builds a four component version from `parts`: components after `position` are
    /// zeroed and the one at `position` is raised by `increment`.
    fn expand_version(
        &self,
        parts: &Parts,
        position: usize,
        increment: u64,
        modifier: Modifier,
        constraint: &str,
    ) -> Result<Version, VersionParserError> {
        let mut components = [0u64; 4];

        for (i, component) in components.iter_mut().enumerate() {
            let current = parts[i].unwrap_or(0);
            *component = if i + 1 > position {
                0
            } else if i + 1 == position && increment != 0 {
                current
                    .checked_add(increment)
                    .ok_or_else(|| VersionParserError::CarryOverflow(constraint.to_string()))?
            } else {
                current
            };
        }

        let mut version = Version::semantic(components, constraint);
        modifier.apply(&mut version);
        Ok(version)
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}
