//! Operator-token classification: maps an expectation to an assertion kind
//! and the template that renders it.

use crate::core::errors::{Error, Result};
use crate::generate::annotation::ExpectationRecord;
use std::fmt;

/// The finite set of test-assertion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    Equals,
    NotEquals,
    Same,
    NotSame,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    True,
    False,
    Exception,
}

impl AssertionKind {
    /// Comparison operator the generic template substitutes, `None` for the
    /// boolean and exception kinds. `PartialEq` comparison is already strict
    /// in Rust, so Same/NotSame render the same operators as their loose
    /// counterparts.
    pub fn comparison(self) -> Option<&'static str> {
        match self {
            Self::Equals | Self::Same => Some("=="),
            Self::NotEquals | Self::NotSame => Some("!="),
            Self::GreaterThan => Some(">"),
            Self::GreaterThanOrEqual => Some(">="),
            Self::LessThan => Some("<"),
            Self::LessThanOrEqual => Some("<="),
            Self::True | Self::False | Self::Exception => None,
        }
    }

    /// Negation prefix for the boolean template.
    pub fn negation(self) -> Option<&'static str> {
        match self {
            Self::True => Some(""),
            Self::False => Some("!"),
            _ => None,
        }
    }
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equals => "Equals",
            Self::NotEquals => "NotEquals",
            Self::Same => "Same",
            Self::NotSame => "NotSame",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::True => "True",
            Self::False => "False",
            Self::Exception => "Exception",
        };
        write!(f, "{name}")
    }
}

/// Assertion kind plus the template selected to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionPlan {
    pub kind: AssertionKind,
    pub template: String,
    pub is_static: bool,
}

/// Classifies one expectation record. Fails on operators outside the fixed
/// table; the whole run aborts, there is no partial output.
pub fn classify(record: &ExpectationRecord, is_static: bool) -> Result<AssertionPlan> {
    let kind = parse_operator(&record.operator)?;
    let (kind, base) = apply_literal_override(kind, &record.expected);

    // Static methods select the "-Static" variant of whatever base template
    // was chosen. The exception template has no such variant; the failing
    // lookup downstream is a configuration error, kept as observed.
    let mut template = base.to_string();
    if is_static {
        template.push_str("Static");
    }

    Ok(AssertionPlan {
        kind,
        template,
        is_static,
    })
}

fn parse_operator(token: &str) -> Result<AssertionKind> {
    match token {
        "==" => Ok(AssertionKind::Equals),
        "!=" => Ok(AssertionKind::NotEquals),
        "===" => Ok(AssertionKind::Same),
        "!==" => Ok(AssertionKind::NotSame),
        ">" => Ok(AssertionKind::GreaterThan),
        ">=" => Ok(AssertionKind::GreaterThanOrEqual),
        "<" => Ok(AssertionKind::LessThan),
        "<=" => Ok(AssertionKind::LessThanOrEqual),
        "throws" => Ok(AssertionKind::Exception),
        _ => Err(Error::UnsupportedOperator {
            token: token.to_string(),
        }),
    }
}

/// Equality against a boolean literal collapses to the True/False kinds and
/// the boolean template. Applies only to Equals/NotEquals; the literal
/// comparison is case-insensitive on the whole expected text.
fn apply_literal_override(kind: AssertionKind, expected: &str) -> (AssertionKind, &'static str) {
    let is_true = expected.eq_ignore_ascii_case("true");
    let is_false = expected.eq_ignore_ascii_case("false");

    match kind {
        AssertionKind::Exception => (kind, "TestMethodException"),
        AssertionKind::Equals if is_true => (AssertionKind::True, "TestMethodBool"),
        AssertionKind::NotEquals if is_true => (AssertionKind::False, "TestMethodBool"),
        AssertionKind::Equals if is_false => (AssertionKind::False, "TestMethodBool"),
        AssertionKind::NotEquals if is_false => (AssertionKind::True, "TestMethodBool"),
        _ => (kind, "TestMethod"),
    }
}
