//! Expectation extraction from documentation text.
//!
//! An expectation line is the marker, a parenthesized argument list, an
//! operator token and a free-form expected value running to end of line:
//!
//! ```text
//! /// @assert (1, 1) == 2
//! ```
//!
//! Lines carrying the marker but not the full shape are dropped without
//! error; a sibling line that does match still counts for the method.

use once_cell::sync::Lazy;
use regex::Regex;

/// The fixed documentation tag that introduces an assertion line.
pub const EXPECTATION_MARKER: &str = "@assert";

static MARKER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?m){EXPECTATION_MARKER}(.*)$")).unwrap());

static EXPECTATION_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((.*)\)\s+(\S+)\s+(.*)").unwrap());

/// One structured expectation extracted from a doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationRecord {
    /// The annotation text after the marker, trimmed
    pub annotation: String,
    /// Raw argument list text between the parentheses
    pub arguments: String,
    /// The operator token
    pub operator: String,
    /// Expected-value expression, verbatim to end of line
    pub expected: String,
}

/// Collects every well-formed expectation in `doc`, in textual order.
pub fn parse_expectations(doc: &str) -> Vec<ExpectationRecord> {
    MARKER_LINE
        .captures_iter(doc)
        .filter_map(|marker| {
            let remainder = marker.get(1).map(|m| m.as_str()).unwrap_or("");
            match EXPECTATION_SHAPE.captures(remainder) {
                Some(shape) => Some(ExpectationRecord {
                    annotation: remainder.trim().to_string(),
                    arguments: shape[1].to_string(),
                    operator: shape[2].to_string(),
                    expected: shape[3].to_string(),
                }),
                None => {
                    log::debug!(
                        "skipping malformed {EXPECTATION_MARKER} line: {}",
                        remainder.trim()
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_single_expectation() {
        let records = parse_expectations(" Adds two numbers.\n\n @assert (1, 1) == 2");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].annotation, "(1, 1) == 2");
        assert_eq!(records[0].arguments, "1, 1");
        assert_eq!(records[0].operator, "==");
        assert_eq!(records[0].expected, "2");
    }

    #[test]
    fn collects_multiple_expectations_in_textual_order() {
        let doc = " @assert (1) == 1\n @assert (2) != 3\n @assert (0) throws overflow";
        let records = parse_expectations(doc);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].operator, "==");
        assert_eq!(records[1].operator, "!=");
        assert_eq!(records[2].operator, "throws");
        assert_eq!(records[2].expected, "overflow");
    }

    #[test]
    fn marker_without_shape_is_silently_skipped() {
        assert!(parse_expectations(" @assert not a real annotation").is_empty());
        assert!(parse_expectations(" @assert (1, 1)").is_empty());
        assert!(parse_expectations(" @assert").is_empty());
    }

    #[test]
    fn doc_without_marker_yields_nothing() {
        assert!(parse_expectations(" Plain prose about the method.").is_empty());
        assert!(parse_expectations("").is_empty());
    }

    #[test]
    fn malformed_line_does_not_suppress_a_sibling() {
        let doc = " @assert garbage\n @assert (1) == 1";
        let records = parse_expectations(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].annotation, "(1) == 1");
    }

    #[test]
    fn nested_parentheses_stay_inside_the_argument_list() {
        let records = parse_expectations(" @assert (vec![(1, 2)]) == 3");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].arguments, "vec![(1, 2)]");
        assert_eq!(records[0].expected, "3");
    }

    #[test]
    fn expected_value_runs_to_end_of_line() {
        let records = parse_expectations(" @assert (0) throws divide by zero");
        assert_eq!(records[0].expected, "divide by zero");
    }
}
