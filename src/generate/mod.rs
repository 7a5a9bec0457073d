//! Test class synthesis: per-method expectation parsing, classification,
//! naming, dependency planning and final assembly.

pub mod annotation;
pub mod assertion;
pub mod dependencies;
pub mod naming;

use crate::common::text::{snake_case, split_identifier};
use crate::core::errors::Result;
use crate::core::{GeneratedClass, OutputClass, TargetClass};
use crate::descriptor::{ClassDescriptor, MethodDescriptor, RustClassDescriptor};
use crate::generate::annotation::{parse_expectations, ExpectationRecord};
use crate::generate::assertion::classify;
use crate::generate::dependencies::plan_dependencies;
use crate::generate::naming::MethodNameResolver;
use crate::templates;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Caller-supplied knobs for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Explicit name for the generated test class, optionally
    /// module-qualified. Defaults to the target name plus `test_suffix`.
    pub test_class: Option<String>,
    /// Explicit output location. Defaults to a sibling of the target source.
    pub output_file: Option<PathBuf>,
    pub test_suffix: String,
    pub mock_prefix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            test_class: None,
            output_file: None,
            test_suffix: "Test".to_string(),
            mock_prefix: "mock_".to_string(),
        }
    }
}

/// One generation run over one target class. The method-name counter is the
/// only mutable state and is confined to this instance; concurrent runs get
/// independent instances.
pub struct TestGenerator<D: ClassDescriptor> {
    descriptor: D,
    target: TargetClass,
    output: OutputClass,
    mock_prefix: String,
    names: MethodNameResolver,
}

impl TestGenerator<RustClassDescriptor> {
    /// Resolves `class` through the Rust source descriptor and prepares a
    /// generator for it.
    pub fn from_class(
        class: &str,
        source: Option<&Path>,
        options: &GeneratorOptions,
    ) -> Result<Self> {
        let descriptor = RustClassDescriptor::resolve(class, source)?;
        Ok(Self::new(descriptor, options))
    }
}

impl<D: ClassDescriptor> TestGenerator<D> {
    pub fn new(descriptor: D, options: &GeneratorOptions) -> Self {
        let target = TargetClass {
            fully_qualified_name: descriptor.fully_qualified_name().to_string(),
            short_name: descriptor.short_name().to_string(),
            source_file: descriptor.source_file().to_path_buf(),
        };
        let output = derive_output_class(&target, options);
        Self {
            descriptor,
            target,
            output,
            mock_prefix: options.mock_prefix.clone(),
            names: MethodNameResolver::new(),
        }
    }

    pub fn target(&self) -> &TargetClass {
        &self.target
    }

    pub fn output(&self) -> &OutputClass {
        &self.output
    }

    /// Runs one generation pass. Fully-specified fragments come first, then
    /// placeholders, each group in declaration order. Any failure discards
    /// the whole run.
    pub fn generate(&mut self) -> Result<GeneratedClass> {
        let methods: Vec<MethodDescriptor> = self.descriptor.methods().to_vec();
        let mut complete = String::new();
        let mut incomplete = String::new();

        for method in &methods {
            if method.is_constructor
                || method.is_abstract
                || method.declaring_class != self.target.short_name
            {
                continue;
            }

            let records = parse_expectations(&method.doc);
            if records.is_empty() {
                incomplete.push_str(&self.render_placeholder(method)?);
                continue;
            }
            for record in &records {
                complete.push_str(&self.render_expectation(method, record)?);
            }
        }

        let (dependencies, dep_list) = self.render_dependencies()?;
        let code = self.assemble(&complete, &incomplete, &dependencies, &dep_list)?;

        Ok(GeneratedClass {
            code,
            incomplete: complete.is_empty(),
        })
    }

    /// Convenience surface for callers that only want the rendered text.
    pub fn generate_code(&mut self) -> Result<String> {
        Ok(self.generate()?.code)
    }

    fn render_expectation(
        &mut self,
        method: &MethodDescriptor,
        record: &ExpectationRecord,
    ) -> Result<String> {
        let plan = classify(record, method.is_static)?;
        let template = templates::lookup(&plan.template)?;
        let method_name = self.names.resolve(&method.name);
        let assertion = plan.kind.to_string();
        log::debug!(
            "rendering {} for `{}` as `test{}`",
            plan.template,
            method.name,
            method_name
        );

        Ok(templates::render(
            template,
            &[
                ("annotation", record.annotation.as_str()),
                ("arguments", record.arguments.as_str()),
                ("assertion", assertion.as_str()),
                ("comparison", plan.kind.comparison().unwrap_or("")),
                ("not", plan.kind.negation().unwrap_or("")),
                ("expected", record.expected.as_str()),
                ("origMethodName", method.name.as_str()),
                ("className", self.target.fully_qualified_name.as_str()),
                ("classNameShort", self.target.short_name.as_str()),
                ("methodName", method_name.as_str()),
            ],
        ))
    }

    fn render_placeholder(&mut self, method: &MethodDescriptor) -> Result<String> {
        let template = templates::lookup(templates::INCOMPLETE_TEST_METHOD)?;
        let method_name = self.names.resolve(&method.name);

        Ok(templates::render(
            template,
            &[
                ("className", self.target.fully_qualified_name.as_str()),
                ("classNameShort", self.target.short_name.as_str()),
                ("methodName", method_name.as_str()),
                ("origMethodName", method.name.as_str()),
            ],
        ))
    }

    fn render_dependencies(&self) -> Result<(String, String)> {
        let (plans, arg_list) =
            plan_dependencies(self.descriptor.constructor_params(), &self.mock_prefix);
        let template = templates::lookup(templates::DEPENDENCY)?;

        let mut fragments = String::new();
        for plan in &plans {
            fragments.push_str(&templates::render(
                template,
                &[
                    ("depFullyQualifiedClassName", plan.class_name.as_str()),
                    ("depClassName", plan.short_name.as_str()),
                    ("mockVar", plan.mock_var.as_str()),
                ],
            ));
        }
        Ok((fragments, arg_list))
    }

    fn assemble(
        &self,
        complete: &str,
        incomplete: &str,
        dependencies: &str,
        dep_list: &str,
    ) -> Result<String> {
        let template = templates::lookup(templates::TEST_CLASS)?;
        let namespace = namespace_prologue(&self.output.namespace, &self.target);
        let methods = format!("{complete}{incomplete}");

        // Date and time are captured once per run.
        let now = Local::now();
        let date = now.format("%Y-%m-%d").to_string();
        let time = now.format("%H:%M:%S").to_string();

        let code = templates::render(
            template,
            &[
                ("namespace", namespace.as_str()),
                ("className", self.target.short_name.as_str()),
                (
                    "fullyQualifiedClassName",
                    self.target.fully_qualified_name.as_str(),
                ),
                ("testClassName", self.output.short_name.as_str()),
                ("methods", methods.as_str()),
                ("dependencies", dependencies),
                ("depClassList", dep_list),
                ("date", date.as_str()),
                ("time", time.as_str()),
                ("version", env!("CARGO_PKG_VERSION")),
            ],
        );

        Ok(format!("{}\n", code.trim_end()))
    }
}

fn derive_output_class(target: &TargetClass, options: &GeneratorOptions) -> OutputClass {
    let identifier = options.test_class.clone().unwrap_or_else(|| {
        format!("{}{}", target.fully_qualified_name, options.test_suffix)
    });
    let (namespace, short_name) = split_identifier(&identifier);

    let source_file = options.output_file.clone().unwrap_or_else(|| {
        target
            .source_file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{}.rs", snake_case(&short_name)))
    });

    OutputClass {
        namespace,
        short_name,
        source_file,
    }
}

/// Import line for the generated file, empty when the output class carries
/// no namespace. The qualifying separator is likewise conditional.
fn namespace_prologue(output_namespace: &str, target: &TargetClass) -> String {
    if output_namespace.is_empty() {
        return String::new();
    }
    let (namespace, _) = split_identifier(&target.fully_qualified_name);
    let separator = if namespace.is_empty() { "" } else { "::" };
    format!("\nuse {}{}{};\n", namespace, separator, target.short_name)
}
