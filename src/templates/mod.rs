//! The fixed template registry and placeholder substitution.
//!
//! Templates are embedded text assets with `{name}` placeholders. Rendering
//! is a pure function of the template and the substitution map; formatting
//! concerns stay out of the classification and planning logic.

use crate::core::errors::{Error, Result};

pub const TEST_CLASS: &str = "TestClass";
pub const DEPENDENCY: &str = "Dependency";
pub const INCOMPLETE_TEST_METHOD: &str = "IncompleteTestMethod";

/// Looks a template up by name. Unknown names are a configuration defect,
/// not a recoverable condition.
pub fn lookup(name: &str) -> Result<&'static str> {
    match name {
        "TestMethod" => Ok(include_str!("test_method.tpl")),
        "TestMethodStatic" => Ok(include_str!("test_method_static.tpl")),
        "TestMethodBool" => Ok(include_str!("test_method_bool.tpl")),
        "TestMethodBoolStatic" => Ok(include_str!("test_method_bool_static.tpl")),
        "TestMethodException" => Ok(include_str!("test_method_exception.tpl")),
        "IncompleteTestMethod" => Ok(include_str!("incomplete_test_method.tpl")),
        "Dependency" => Ok(include_str!("dependency.tpl")),
        "TestClass" => Ok(include_str!("test_class.tpl")),
        other => Err(Error::TemplateNotFound {
            name: other.to_string(),
        }),
    }
}

/// Replaces every `{key}` occurrence with its substitution text, verbatim.
/// Placeholders without a substitution are left in place; that surfaces a
/// template/caller mismatch in the output rather than hiding it.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TEMPLATES: [&str; 8] = [
        "TestMethod",
        "TestMethodStatic",
        "TestMethodBool",
        "TestMethodBoolStatic",
        "TestMethodException",
        "IncompleteTestMethod",
        "Dependency",
        "TestClass",
    ];

    #[test]
    fn every_registered_template_resolves() {
        for name in ALL_TEMPLATES {
            assert!(lookup(name).is_ok(), "template {name}");
        }
    }

    #[test]
    fn unknown_template_is_a_configuration_error() {
        let err = lookup("TestMethodExceptionStatic").unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { name } if name == "TestMethodExceptionStatic"));
    }

    #[test]
    fn render_substitutes_all_occurrences() {
        assert_eq!(
            render("{a} and {a} or {b}", &[("a", "x"), ("b", "y")]),
            "x and x or y"
        );
    }

    #[test]
    fn render_leaves_unknown_placeholders_in_place() {
        assert_eq!(render("{missing} {a}", &[("a", "x")]), "{missing} x");
    }

    #[test]
    fn render_does_not_touch_code_braces() {
        let template = "fn test{methodName}() {\n    body\n}\n";
        assert_eq!(
            render(template, &[("methodName", "Add")]),
            "fn testAdd() {\n    body\n}\n"
        );
    }
}
