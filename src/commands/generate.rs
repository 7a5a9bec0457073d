use crate::cli::OutputFormat;
use crate::config::TestgenConfig;
use crate::generate::{GeneratorOptions, TestGenerator};
use crate::io;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub struct GenerateConfig {
    pub class: String,
    pub source: Option<PathBuf>,
    pub test_class: Option<String>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub format: OutputFormat,
    pub verbose: bool,
}

pub fn generate_test_class(config: GenerateConfig) -> Result<()> {
    let settings = TestgenConfig::load(None)?;
    let options = GeneratorOptions {
        test_class: config.test_class,
        output_file: config.output,
        test_suffix: settings.generator.test_suffix,
        mock_prefix: settings.generator.mock_prefix,
    };

    let mut generator =
        TestGenerator::from_class(&config.class, config.source.as_deref(), &options)?;
    let result = generator.generate()?;

    if result.incomplete {
        log::warn!(
            "no @assert annotation matched on `{}`; every generated test is a placeholder",
            config.class
        );
    }

    let rendered = match config.format {
        OutputFormat::Code => result.code.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    };

    if config.stdout {
        println!("{rendered}");
        return Ok(());
    }

    let output_path = generator.output().source_file.clone();
    io::write_file(&output_path, &rendered)?;
    println!("{} {}", "Wrote".green().bold(), output_path.display());

    if config.verbose && result.incomplete {
        println!(
            "{}",
            "Note: add @assert lines to the target's doc comments to generate real assertions."
                .yellow()
        );
    }

    Ok(())
}
