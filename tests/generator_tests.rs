use indoc::indoc;
use std::path::PathBuf;
use testgen::{Error, GeneratedClass, GeneratorOptions, RustClassDescriptor, TestGenerator};

fn descriptor_for(source: &str, class: &str) -> RustClassDescriptor {
    RustClassDescriptor::from_source(source, PathBuf::from("fixture.rs"), class).unwrap()
}

fn generate(source: &str, class: &str) -> GeneratedClass {
    let mut generator =
        TestGenerator::new(descriptor_for(source, class), &GeneratorOptions::default());
    generator.generate().unwrap()
}

const CALCULATOR: &str = indoc! {r#"
    pub struct Calculator;

    impl Calculator {
        /// Adds two numbers.
        ///
        /// @assert (1, 1) == 2
        /// @assert (2, 2) == 4
        pub fn add(&self, a: u32, b: u32) -> u32 {
            a + b
        }
    }
"#};

#[test]
fn equals_annotation_renders_comparison_test() {
    let result = generate(CALCULATOR, "Calculator");
    assert!(!result.incomplete);
    assert!(result.code.contains("fn testAdd()"));
    assert!(result.code.contains("let actual = subject.add(1, 1);"));
    assert!(result.code.contains("assert!(actual == 2);"));
}

#[test]
fn repeated_annotations_get_numbered_names() {
    let result = generate(CALCULATOR, "Calculator");
    assert!(result.code.contains("fn testAdd()"));
    assert!(result.code.contains("fn testAdd2()"));
    assert!(result.code.contains("let actual = subject.add(2, 2);"));
}

#[test]
fn boolean_literal_selects_bool_template() {
    let source = indoc! {r#"
        pub struct Gate;

        impl Gate {
            /// @assert () == true
            pub fn is_valid(&self) -> bool {
                true
            }
        }
    "#};
    let result = generate(source, "Gate");
    assert!(result.code.contains("fn testIs_valid()"));
    assert!(result.code.contains("assert!(subject.is_valid());"));
    assert!(!result.code.contains("let actual"));
}

#[test]
fn negated_boolean_literal_renders_a_negation() {
    let source = indoc! {r#"
        pub struct Gate;

        impl Gate {
            /// @assert () == false
            pub fn is_open(&self) -> bool {
                false
            }
        }
    "#};
    let result = generate(source, "Gate");
    assert!(result.code.contains("assert!(!subject.is_open());"));
}

#[test]
fn throws_annotation_renders_should_panic() {
    let source = indoc! {r#"
        pub struct Machine;

        impl Machine {
            /// @assert (0) throws divide by zero
            pub fn risky(&self, denominator: u32) -> u32 {
                100 / denominator
            }
        }
    "#};
    let result = generate(source, "Machine");
    assert!(result
        .code
        .contains("#[should_panic(expected = \"divide by zero\")]"));
    assert!(result.code.contains("fn testRisky()"));
    assert!(result.code.contains("subject.risky(0)"));
}

#[test]
fn static_method_uses_static_template() {
    let source = indoc! {r#"
        pub struct MathUtil;

        impl MathUtil {
            /// @assert (3) > 2
            pub fn triple(value: u32) -> u32 {
                value * 3
            }
        }
    "#};
    let result = generate(source, "MathUtil");
    assert!(result.code.contains("let actual = MathUtil::triple(3);"));
    assert!(result.code.contains("assert!(actual > 2);"));
}

#[test]
fn static_throws_is_a_configuration_error() {
    let source = indoc! {r#"
        pub struct MathUtil;

        impl MathUtil {
            /// @assert (0) throws boom
            pub fn explode(value: u32) -> u32 {
                panic!("boom")
            }
        }
    "#};
    let mut generator = TestGenerator::new(
        descriptor_for(source, "MathUtil"),
        &GeneratorOptions::default(),
    );
    let err = generator.generate().unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound { name } if name == "TestMethodExceptionStatic"));
}

#[test]
fn unsupported_operator_aborts_the_run() {
    let source = indoc! {r#"
        pub struct Calculator;

        impl Calculator {
            /// @assert (1) ~= 2
            pub fn add(&self, a: u32) -> u32 {
                a
            }
        }
    "#};
    let mut generator = TestGenerator::new(
        descriptor_for(source, "Calculator"),
        &GeneratorOptions::default(),
    );
    let err = generator.generate().unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperator { token } if token == "~="));
}

#[test]
fn complete_fragments_precede_placeholders_in_declaration_order() {
    let source = indoc! {r#"
        pub struct Mixed;

        impl Mixed {
            pub fn first(&self) -> u32 {
                1
            }

            /// @assert () == 2
            pub fn second(&self) -> u32 {
                2
            }

            pub fn third(&self) -> u32 {
                3
            }

            /// @assert () == 4
            pub fn fourth(&self) -> u32 {
                4
            }
        }
    "#};
    let result = generate(source, "Mixed");
    let second = result.code.find("fn testSecond").unwrap();
    let fourth = result.code.find("fn testFourth").unwrap();
    let first = result.code.find("fn testFirst").unwrap();
    let third = result.code.find("fn testThird").unwrap();
    assert!(second < fourth, "complete fragments keep declaration order");
    assert!(fourth < first, "complete fragments precede placeholders");
    assert!(first < third, "placeholders keep declaration order");
}

#[test]
fn case_distinct_method_names_share_a_counter() {
    let source = indoc! {r#"
        pub struct Mixed;

        impl Mixed {
            /// @assert (1) == 1
            pub fn add(&self, a: u32) -> u32 {
                a
            }

            /// @assert (2) == 2
            pub fn Add(&self, a: u32) -> u32 {
                a
            }
        }
    "#};
    let result = generate(source, "Mixed");
    assert!(result.code.contains("fn testAdd()"));
    assert!(result.code.contains("fn testAdd2()"));
    assert!(result.code.contains("subject.Add(2)"));
}

#[test]
fn malformed_line_is_dropped_but_sibling_still_counts() {
    let source = indoc! {r#"
        pub struct Parser;

        impl Parser {
            /// @assert not a real annotation
            /// @assert (1) == 1
            pub fn parse(&self, input: u32) -> u32 {
                input
            }
        }
    "#};
    let result = generate(source, "Parser");
    assert!(!result.incomplete);
    assert!(result.code.contains("fn testParse()"));
    assert!(!result.code.contains("#[ignore"));
}

#[test]
fn unannotated_method_yields_exactly_one_placeholder() {
    let source = indoc! {r#"
        pub struct Widget;

        impl Widget {
            /// Does something useful, eventually.
            pub fn run(&self) -> u32 {
                0
            }
        }
    "#};
    let result = generate(source, "Widget");
    assert!(result.incomplete);
    assert_eq!(result.code.matches("#[test]").count(), 1);
    assert_eq!(result.code.matches("#[ignore").count(), 1);
    assert!(result.code.contains("fn testRun()"));
}

#[test]
fn class_without_public_methods_is_incomplete_with_no_tests() {
    let source = indoc! {r#"
        pub struct Opaque {
            value: u32,
        }

        impl Opaque {
            fn hidden(&self) -> u32 {
                self.value
            }
        }
    "#};
    let result = generate(source, "Opaque");
    assert!(result.incomplete);
    assert!(!result.code.contains("#[test]"));
}

#[test]
fn class_typed_constructor_params_become_mocks() {
    let source = indoc! {r#"
        pub struct Service;

        impl Service {
            pub fn new(log: util::Logger, flag: bool) -> Self {
                Service
            }

            /// @assert () == true
            pub fn ready(&self) -> bool {
                true
            }
        }
    "#};
    let result = generate(source, "Service");
    assert!(result.code.contains("let mock_logger = MockLogger::new();"));
    assert!(result.code.contains("Service::new(mock_logger)"));
    assert!(!result.code.contains("mock_flag"));
    assert!(!result.code.contains("fn testNew"));
}

#[test]
fn class_without_dependencies_calls_a_bare_constructor() {
    let result = generate(CALCULATOR, "Calculator");
    assert!(result.code.contains("Calculator::new()"));
    assert!(!result.code.contains("Mock"));
}

#[test]
fn namespaced_target_gets_an_import_prologue() {
    let source = indoc! {r#"
        pub struct Rect;

        impl Rect {
            /// @assert () == 1
            pub fn area(&self) -> u32 {
                1
            }
        }
    "#};
    let result = generate(source, "geometry::Rect");
    assert!(result.code.contains("use geometry::Rect;"));
    assert!(result.code.contains("`geometry::Rect`"));
}

#[test]
fn bare_target_gets_no_import_prologue() {
    let result = generate(CALCULATOR, "Calculator");
    assert!(!result.code.contains("\nuse "));
}

#[test]
fn output_defaults_derive_from_target() {
    let generator = TestGenerator::new(
        descriptor_for(CALCULATOR, "Calculator"),
        &GeneratorOptions::default(),
    );
    assert_eq!(generator.output().short_name, "CalculatorTest");
    assert_eq!(
        generator.output().source_file,
        PathBuf::from("calculator_test.rs")
    );
    assert_eq!(generator.target().short_name, "Calculator");
}

#[test]
fn explicit_output_class_overrides_the_default() {
    let options = GeneratorOptions {
        test_class: Some("checks::CalculatorChecks".to_string()),
        ..GeneratorOptions::default()
    };
    let generator = TestGenerator::new(descriptor_for(CALCULATOR, "Calculator"), &options);
    assert_eq!(generator.output().namespace, "checks");
    assert_eq!(generator.output().short_name, "CalculatorChecks");
    assert_eq!(
        generator.output().source_file,
        PathBuf::from("calculator_checks.rs")
    );
}

#[test]
fn generated_class_serializes_with_incomplete_flag() {
    let result = generate(CALCULATOR, "Calculator");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["incomplete"], serde_json::Value::Bool(false));
    assert!(value["code"].as_str().unwrap().contains("fn testAdd()"));
}

#[test]
fn generated_header_names_the_test_class() {
    let result = generate(CALCULATOR, "Calculator");
    assert!(result.code.contains("`CalculatorTest`"));
    assert!(result.code.contains("#![allow(non_snake_case)]"));
}
