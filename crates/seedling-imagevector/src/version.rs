//! Version constraint parsing and evaluation using `nom`.
//!
//! A [`VersionConstraint`] is parsed once, when the catalog entry holding it
//! is constructed, into a disjunction of conjunctions of interval terms.
//! Evaluation afterwards is allocation-free and never fails.
//!
//! Supported syntax: exact literals (`1.14.2`, `= 1.17.0`), comparisons
//! (`<`, `<=`, `>`, `>=`, `=`, `!=`), tilde and caret ranges, wildcards
//! (`1.14.x`, `*`), hyphenated inclusive ranges (`1.20 - 1.24`), `,` for
//! conjunction and `||` for disjunction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, map_res, opt, value},
    multi::{many_m_n, separated_list1},
    sequence::{delimited, preceded},
};
use seedling_common::error::{Result, SeedlingError};
use semver::{Prerelease, Version};
use serde::{Deserialize, Serialize};

/// How precisely a catalog entry's constraint pins a queried version.
///
/// Variants are declared in ascending rank so the derived ordering can be
/// used directly when choosing between candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    /// No constraint was declared.
    Unconstrained,
    /// A range, comparison, or wildcard expression matched.
    Range,
    /// A single literal version equal to the queried one matched.
    Exact,
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconstrained => write!(f, "unconstrained"),
            Self::Range => write!(f, "range"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Parses a concrete version leniently.
///
/// Accepts an optional `v` prefix and one to three numeric components;
/// missing components are zero. A pre-release or build suffix is kept.
///
/// # Errors
///
/// Returns [`SeedlingError::InvalidVersion`] if the input is not a version.
pub fn parse_version(input: &str) -> Result<Version> {
    let invalid = |reason: String| SeedlingError::InvalidVersion {
        version: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
    let split = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(split);

    let parts = core
        .split('.')
        .map(str::parse::<u64>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| invalid(e.to_string()))?;
    let (major, minor, patch) = match parts.as_slice() {
        [major] => (*major, 0, 0),
        [major, minor] => (*major, *minor, 0),
        [major, minor, patch] => (*major, *minor, *patch),
        _ => return Err(invalid("expected one to three numeric components".into())),
    };

    Version::parse(&format!("{major}.{minor}.{patch}{suffix}")).map_err(|e| invalid(e.to_string()))
}

/// The release prefix of a version: pre-release and build data dropped.
fn release(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

// ── Evaluated form ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Bound {
    version: Version,
    inclusive: bool,
}

impl Bound {
    fn inclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: true,
        }
    }

    fn exclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Interval {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl Interval {
    const ANY: Self = Self {
        lower: None,
        upper: None,
    };

    fn contains(&self, version: &Version) -> bool {
        let above = self.lower.as_ref().is_none_or(|b| {
            if b.inclusive {
                *version >= b.version
            } else {
                *version > b.version
            }
        });
        let below = self.upper.as_ref().is_none_or(|b| {
            if b.inclusive {
                *version <= b.version
            } else {
                *version < b.version
            }
        });
        above && below
    }

    fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Term {
    Within(Interval),
    Outside(Interval),
}

impl Term {
    fn matches(&self, version: &Version) -> bool {
        match self {
            Self::Within(interval) => interval.contains(version),
            Self::Outside(interval) => !interval.contains(version),
        }
    }

    fn is_unbounded(&self) -> bool {
        matches!(self, Self::Within(interval) if interval.is_unbounded())
    }
}

/// A version component with no successor in `u64`.
#[derive(Debug, Clone, Copy)]
struct Overflow;

fn successor(n: u64) -> std::result::Result<u64, Overflow> {
    n.checked_add(1).ok_or(Overflow)
}

// ── Syntax ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Tilde,
    Caret,
}

#[derive(Debug, Clone, Copy)]
enum Part {
    Number(u64),
    Wildcard,
}

/// A possibly incomplete version as written in a constraint.
///
/// Components after the first missing or wildcard one are `None`. A
/// pre-release suffix is accepted but not kept: constraints compare release
/// prefixes only, like the versions they are evaluated against.
#[derive(Debug, Clone)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    wildcard: bool,
}

impl Partial {
    fn from_parts(first: Part, rest: &[Part]) -> Self {
        let mut numbers = [None; 3];
        let mut wildcard = false;
        for (slot, part) in numbers.iter_mut().zip(std::iter::once(&first).chain(rest)) {
            match part {
                Part::Number(n) if !wildcard => *slot = Some(*n),
                _ => wildcard = true,
            }
        }
        let [major, minor, patch] = numbers;
        Self {
            major,
            minor,
            patch,
            wildcard,
        }
    }

    const fn is_complete(&self) -> bool {
        self.patch.is_some()
    }

    /// Lowest version the partial denotes, missing components as zero.
    fn floor(&self) -> Version {
        Version::new(
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        )
    }

    /// First version past the range a partial denotes (`1.2` → `1.3.0`).
    fn ceiling(&self) -> std::result::Result<Option<Version>, Overflow> {
        Ok(match (self.major, self.minor, self.patch) {
            (Some(major), None, _) => Some(Version::new(successor(major)?, 0, 0)),
            (Some(major), Some(minor), None) => Some(Version::new(major, successor(minor)?, 0)),
            _ => None,
        })
    }

    /// The set of versions the partial stands for on its own.
    fn span(&self) -> std::result::Result<Interval, Overflow> {
        if self.major.is_none() {
            return Ok(Interval::ANY);
        }
        if self.is_complete() {
            let version = self.floor();
            return Ok(Interval {
                lower: Some(Bound::inclusive(version.clone())),
                upper: Some(Bound::inclusive(version)),
            });
        }
        Ok(Interval {
            lower: Some(Bound::inclusive(self.floor())),
            upper: self.ceiling()?.map(Bound::exclusive),
        })
    }
}

#[derive(Debug, Clone)]
enum Clause {
    Compare(Option<Op>, Partial),
    Hyphen(Partial, Partial),
}

impl Clause {
    /// The literal version, if this clause is an exact-literal comparison.
    fn literal(&self) -> Option<Version> {
        match self {
            Self::Compare(None | Some(Op::Eq), partial)
                if partial.major.is_some() && !partial.wildcard =>
            {
                Some(partial.floor())
            }
            _ => None,
        }
    }

    fn lower(self) -> std::result::Result<Term, Overflow> {
        match self {
            Self::Compare(op, partial) => lower_comparison(op.unwrap_or(Op::Eq), &partial),
            Self::Hyphen(from, to) => Ok(Term::Within(Interval {
                lower: from.major.map(|_| Bound::inclusive(from.floor())),
                upper: if to.is_complete() {
                    Some(Bound::inclusive(to.floor()))
                } else {
                    to.ceiling()?.map(Bound::exclusive)
                },
            })),
        }
    }
}

fn lower_comparison(op: Op, partial: &Partial) -> std::result::Result<Term, Overflow> {
    let Some(major) = partial.major else {
        // Operators applied to a bare wildcard.
        return Ok(match op {
            Op::Ne | Op::Gt | Op::Lt => Term::Outside(Interval::ANY),
            _ => Term::Within(Interval::ANY),
        });
    };
    let floor = partial.floor();
    let above = |bound| Interval {
        lower: Some(bound),
        upper: None,
    };
    let below = |bound| Interval {
        lower: None,
        upper: Some(bound),
    };

    Ok(match op {
        Op::Eq => Term::Within(partial.span()?),
        Op::Ne => Term::Outside(partial.span()?),
        Op::Ge => Term::Within(above(Bound::inclusive(floor))),
        Op::Lt => Term::Within(below(Bound::exclusive(floor))),
        Op::Gt => Term::Within(above(partial.ceiling()?.map_or_else(
            || Bound::exclusive(floor),
            Bound::inclusive,
        ))),
        Op::Le => Term::Within(below(
            partial
                .ceiling()?
                .map_or_else(|| Bound::inclusive(partial.floor()), Bound::exclusive),
        )),
        Op::Tilde => {
            let upper = match partial.minor {
                Some(minor) => Version::new(major, successor(minor)?, 0),
                None => Version::new(successor(major)?, 0, 0),
            };
            Term::Within(Interval {
                lower: Some(Bound::inclusive(floor)),
                upper: Some(Bound::exclusive(upper)),
            })
        }
        Op::Caret => {
            let upper = match (major, partial.minor, partial.patch) {
                (0, Some(0), Some(patch)) => Version::new(0, 0, successor(patch)?),
                (0, Some(minor), _) => Version::new(0, successor(minor)?, 0),
                _ => Version::new(successor(major)?, 0, 0),
            };
            Term::Within(Interval {
                lower: Some(Bound::inclusive(floor)),
                upper: Some(Bound::exclusive(upper)),
            })
        }
    })
}

fn operator(input: &str) -> IResult<&str, Op> {
    alt((
        value(Op::Ge, tag(">=")),
        value(Op::Le, tag("<=")),
        value(Op::Ne, tag("!=")),
        value(Op::Eq, tag("==")),
        value(Op::Tilde, tag("~>")),
        value(Op::Gt, char('>')),
        value(Op::Lt, char('<')),
        value(Op::Eq, char('=')),
        value(Op::Tilde, char('~')),
        value(Op::Caret, char('^')),
    ))
    .parse(input)
}

fn part(input: &str) -> IResult<&str, Part> {
    alt((
        map_res(digit1, |digits: &str| digits.parse::<u64>().map(Part::Number)),
        value(Part::Wildcard, one_of("xX*")),
    ))
    .parse(input)
}

fn identifiers(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '-')(input)
}

fn partial(input: &str) -> IResult<&str, Partial> {
    let (input, _) = opt(one_of("vV")).parse(input)?;
    let (input, first) = part(input)?;
    let (input, rest) = many_m_n(0, 2, preceded(char('.'), part)).parse(input)?;
    let (input, _pre) = opt(preceded(char('-'), map_res(identifiers, Prerelease::new))).parse(input)?;
    let (input, _build) = opt(preceded(char('+'), identifiers)).parse(input)?;
    Ok((input, Partial::from_parts(first, &rest)))
}

fn hyphen_range(input: &str) -> IResult<&str, Clause> {
    let (input, (from, _, to)) = (
        partial,
        delimited(multispace1, char('-'), multispace1),
        partial,
    )
        .parse(input)?;
    Ok((input, Clause::Hyphen(from, to)))
}

fn comparison(input: &str) -> IResult<&str, Clause> {
    let (input, op) = opt(operator).parse(input)?;
    let (input, _) = multispace0(input)?;
    let (input, version) = partial(input)?;
    Ok((input, Clause::Compare(op, version)))
}

fn conjunction(input: &str) -> IResult<&str, Vec<Clause>> {
    separated_list1(
        delimited(multispace0, char(','), multispace0),
        alt((hyphen_range, comparison)),
    )
    .parse(input)
}

fn expression(input: &str) -> IResult<&str, Vec<Vec<Clause>>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(delimited(multispace0, tag("||"), multispace0), conjunction),
        multispace0,
    ))
    .parse(input)
}

// ── Public constraint type ───────────────────────────────────────────

/// A parsed version constraint expression.
///
/// Equality and hashing are structural: two expressions that parse to the
/// same terms, and are both literal or both not, are equal even if they
/// were written with different spacing. `1.13` and `1.13.x` differ, since
/// only the first is an exact match for `1.13.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionConstraint {
    raw: String,
    alternatives: Vec<Vec<Term>>,
    literal: Option<Version>,
}

impl VersionConstraint {
    /// Parses a constraint expression.
    ///
    /// # Errors
    ///
    /// Returns [`SeedlingError::InvalidConstraint`] if the expression does
    /// not follow the constraint grammar.
    pub fn parse(input: &str) -> Result<Self> {
        let (_, groups) = expression(input).map_err(|e| SeedlingError::InvalidConstraint {
            expression: input.to_string(),
            reason: e.to_string(),
        })?;

        let literal = match groups.as_slice() {
            [group] => match group.as_slice() {
                [clause] => clause.literal(),
                _ => None,
            },
            _ => None,
        };
        let alternatives = groups
            .into_iter()
            .map(|group| group.into_iter().map(Clause::lower).collect())
            .collect::<std::result::Result<Vec<Vec<Term>>, Overflow>>()
            .map_err(|Overflow| SeedlingError::InvalidConstraint {
                expression: input.to_string(),
                reason: "version component out of range".into(),
            })?;

        Ok(Self {
            raw: input.trim().to_string(),
            alternatives,
            literal,
        })
    }

    /// Returns the expression as written (surrounding whitespace trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `version` satisfies the constraint.
    ///
    /// Only the release prefix of `version` is compared, so `1.6.4-foo.5`
    /// satisfies `>= 1.6, < 1.8`.
    #[must_use]
    pub fn matches(&self, version: &Version) -> bool {
        let version = release(version);
        self.alternatives
            .iter()
            .any(|group| group.iter().all(|term| term.matches(&version)))
    }

    /// Whether the constraint is a single literal equal to `version`.
    #[must_use]
    pub fn is_exact_match(&self, version: &Version) -> bool {
        self.literal
            .as_ref()
            .is_some_and(|literal| *literal == release(version))
    }

    /// Whether the constraint is a single literal version.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.literal.is_some()
    }

    /// Whether every version satisfies the constraint (`*`, `x`, `>= *`).
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.alternatives
            .iter()
            .any(|group| group.iter().all(Term::is_unbounded))
    }
}

impl PartialEq for VersionConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.alternatives == other.alternatives && self.literal == other.literal
    }
}

impl Eq for VersionConstraint {}

impl Hash for VersionConstraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alternatives.hash(state);
        self.literal.hash(state);
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for VersionConstraint {
    type Err = SeedlingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionConstraint {
    type Error = SeedlingError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<VersionConstraint> for String {
    fn from(constraint: VersionConstraint) -> Self {
        constraint.raw
    }
}

// ── Evaluator ────────────────────────────────────────────────────────

/// Whether an optional constraint admits an optional queried version.
///
/// An absent constraint admits everything. An absent version is admitted
/// only by an absent or unbounded constraint.
#[must_use]
pub fn satisfies(constraint: Option<&VersionConstraint>, version: Option<&Version>) -> bool {
    match (constraint, version) {
        (None, _) => true,
        (Some(constraint), None) => constraint.is_unbounded(),
        (Some(constraint), Some(version)) => constraint.matches(version),
    }
}

/// How precisely a constraint pins a version it is known to admit.
#[must_use]
pub fn specificity(constraint: Option<&VersionConstraint>, version: Option<&Version>) -> Specificity {
    match (constraint, version) {
        (Some(constraint), Some(version)) if constraint.is_exact_match(version) => {
            Specificity::Exact
        }
        (Some(_), Some(_)) => Specificity::Range,
        _ => Specificity::Unconstrained,
    }
}

/// Combines [`satisfies`] and [`specificity`]: `None` when not admitted.
#[must_use]
pub fn evaluate(
    constraint: Option<&VersionConstraint>,
    version: Option<&Version>,
) -> Option<Specificity> {
    satisfies(constraint, version).then(|| specificity(constraint, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(expr: &str) -> VersionConstraint {
        VersionConstraint::parse(expr).expect("constraint should parse")
    }

    fn version(v: &str) -> Version {
        parse_version(v).expect("version should parse")
    }

    #[test]
    fn parse_version_pads_missing_components() {
        assert_eq!(version("1.13"), Version::new(1, 13, 0));
        assert_eq!(version("v1"), Version::new(1, 0, 0));
        assert_eq!(version(" 1.27.3 "), Version::new(1, 27, 3));
    }

    #[test]
    fn parse_version_keeps_suffix() {
        let v = version("1.6.4-foo.5");
        assert_eq!(v.pre.as_str(), "foo.5");
        assert_eq!(release(&v), Version::new(1, 6, 4));
    }

    #[test]
    fn parse_version_rejects_garbage() {
        assert!(parse_version("").is_err());
        assert!(parse_version("one.two").is_err());
        assert!(parse_version("1.2.3.4").is_err());
    }

    #[test]
    fn comma_conjunction_bounds_both_sides() {
        let c = constraint(">= 1.6, < 1.8");
        assert!(c.matches(&version("1.6.0")));
        assert!(c.matches(&version("1.6.4")));
        assert!(c.matches(&version("1.7.99")));
        assert!(!c.matches(&version("1.8.0")));
        assert!(!c.matches(&version("1.5.9")));
        assert!(!c.is_literal());
    }

    #[test]
    fn suffixed_version_matches_on_release_prefix() {
        let c = constraint(">= 1.6, < 1.8");
        assert!(c.matches(&version("1.6.4-foo.5")));
        assert!(constraint(">=1.6.4").matches(&version("1.6.4-rc.1")));
    }

    #[test]
    fn partial_literal_acts_as_wildcard() {
        let c = constraint("1.13");
        assert!(c.matches(&version("1.13")));
        assert!(c.matches(&version("1.13.7")));
        assert!(!c.matches(&version("1.14.0")));
        assert!(c.is_exact_match(&version("1.13.0")));
        assert!(!c.is_exact_match(&version("1.13.7")));
    }

    #[test]
    fn explicit_equality_is_literal() {
        let c = constraint("= 1.17.0");
        assert!(c.is_literal());
        assert!(c.matches(&version("1.17.0")));
        assert!(!c.matches(&version("1.17.1")));
        assert!(c.is_exact_match(&version("1.17.0")));
    }

    #[test]
    fn x_wildcard_is_range_not_literal() {
        let c = constraint("1.14.x");
        assert!(!c.is_literal());
        assert!(c.matches(&version("1.14.2")));
        assert!(!c.matches(&version("1.15.0")));
        assert_eq!(
            specificity(Some(&c), Some(&version("1.14.2"))),
            Specificity::Range
        );
        assert_eq!(
            specificity(Some(&constraint("1.14.2")), Some(&version("1.14.2"))),
            Specificity::Exact
        );
    }

    #[test]
    fn hyphen_range_is_inclusive() {
        let full = constraint("1.2.0 - 1.4.0");
        assert!(full.matches(&version("1.2.0")));
        assert!(full.matches(&version("1.4.0")));
        assert!(!full.matches(&version("1.4.1")));

        let partial = constraint("1.2 - 1.4");
        assert!(partial.matches(&version("1.4.9")));
        assert!(!partial.matches(&version("1.5.0")));
        assert!(!partial.matches(&version("1.1.9")));
    }

    #[test]
    fn strict_comparisons_on_partials_skip_the_whole_minor() {
        assert!(!constraint("> 1.14").matches(&version("1.14.9")));
        assert!(constraint("> 1.14").matches(&version("1.15.0")));
        assert!(constraint("<= 1.14").matches(&version("1.14.9")));
        assert!(!constraint("< 1.14").matches(&version("1.14.0")));
        assert!(constraint("> 1.14.2").matches(&version("1.14.3")));
    }

    #[test]
    fn tilde_and_caret_ranges() {
        let tilde = constraint("~1.2.3");
        assert!(tilde.matches(&version("1.2.9")));
        assert!(!tilde.matches(&version("1.3.0")));

        assert!(constraint("^1.2.3").matches(&version("1.9.0")));
        assert!(!constraint("^1.2.3").matches(&version("2.0.0")));
        assert!(constraint("^0.2.3").matches(&version("0.2.9")));
        assert!(!constraint("^0.2.3").matches(&version("0.3.0")));
        assert!(!constraint("^0.0.3").matches(&version("0.0.4")));
    }

    #[test]
    fn not_equal_excludes_the_span() {
        let c = constraint("!= 1.2");
        assert!(!c.matches(&version("1.2.5")));
        assert!(c.matches(&version("1.3.0")));
    }

    #[test]
    fn disjunction_matches_either_side() {
        let c = constraint("< 1.20 || >= 1.24");
        assert!(c.matches(&version("1.19.3")));
        assert!(!c.matches(&version("1.22.0")));
        assert!(c.matches(&version("1.27.0")));
    }

    #[test]
    fn star_is_unbounded() {
        assert!(constraint("*").is_unbounded());
        assert!(constraint("x").is_unbounded());
        assert!(!constraint(">= 1.0").is_unbounded());
        assert!(satisfies(Some(&constraint("*")), None));
    }

    #[test]
    fn absent_version_only_satisfies_absent_or_unbounded() {
        let c = constraint(">= 1.6, < 1.8");
        assert!(!satisfies(Some(&c), None));
        assert!(satisfies(None, None));
        assert!(satisfies(None, Some(&version("1.0.0"))));
        assert_eq!(evaluate(Some(&c), None), None);
        assert_eq!(evaluate(None, None), Some(Specificity::Unconstrained));
    }

    #[test]
    fn structural_equality_ignores_spacing() {
        assert_eq!(constraint(">= 1.6, < 1.8"), constraint(">=1.6,<1.8"));
        assert_ne!(constraint(">= 1.6"), constraint(">= 1.8"));
        assert_eq!(constraint("  1.14.x ").as_str(), "1.14.x");
        assert_eq!(constraint("1.13"), constraint("= 1.13"));
    }

    #[test]
    fn literal_and_wildcard_of_same_span_differ() {
        assert_ne!(constraint("1.13"), constraint("1.13.x"));
        assert_ne!(constraint("= 1.13"), constraint("~1.13"));
    }

    #[test]
    fn component_overflow_is_rejected() {
        for expr in [
            "18446744073709551615",
            "1.18446744073709551615",
            "~18446744073709551615",
            "^0.0.18446744073709551615",
            "> 1.18446744073709551615",
        ] {
            let err = VersionConstraint::parse(expr).expect_err(expr);
            assert!(matches!(err, SeedlingError::InvalidConstraint { .. }));
        }
        assert!(VersionConstraint::parse("18446744073709551615.0.0").is_ok());
    }

    #[test]
    fn prerelease_in_constraint_compares_release_prefix() {
        let c = constraint("1.14.2-rc.1");
        assert!(c.is_literal());
        assert!(c.matches(&version("1.14.2-rc.1")));
        assert!(c.is_exact_match(&version("1.14.2")));
        assert!(!c.matches(&version("1.14.3")));
        assert!(constraint(">= 1.6.4-rc.1").matches(&version("1.6.4")));
    }

    #[test]
    fn invalid_expressions_are_rejected() {
        for expr in ["", ">= banana", "1.2.3.4", ">=1.6,", "1.6 ||", "rc"] {
            let err = VersionConstraint::parse(expr).expect_err(expr);
            assert!(matches!(err, SeedlingError::InvalidConstraint { .. }));
        }
    }

    #[test]
    fn specificity_orders_exact_above_range_above_unconstrained() {
        assert!(Specificity::Exact > Specificity::Range);
        assert!(Specificity::Range > Specificity::Unconstrained);
    }
}
