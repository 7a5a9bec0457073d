use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered test source code
    Code,
    /// Structured JSON carrying the code and the incomplete flag
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(about = "Test skeleton generator for annotated Rust types", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a test skeleton for a type
    Generate {
        /// Target type, optionally module-qualified (e.g. `geometry::Rect`)
        class: String,

        /// Source file declaring the target type (defaults to conventional
        /// locations derived from the type name)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Name for the generated test class (defaults to the target name
        /// plus the configured suffix)
        #[arg(long = "test-class")]
        test_class: Option<String>,

        /// Output file (defaults to a sibling of the target source file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result to stdout instead of writing the output file
        #[arg(long)]
        stdout: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "code")]
        format: OutputFormat,

        /// Log generation detail and flag incomplete suites
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a .testgen.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
