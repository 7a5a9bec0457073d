use anyhow::Result;
use clap::Parser;
use testgen::cli::{Cli, Commands};
use testgen::commands::generate::GenerateConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            class,
            source,
            test_class,
            output,
            stdout,
            format,
            verbose,
        } => {
            init_logging(verbose);
            testgen::commands::generate::generate_test_class(GenerateConfig {
                class,
                source,
                test_class,
                output,
                stdout,
                format,
                verbose,
            })
        }
        Commands::Init { force } => {
            init_logging(false);
            testgen::commands::init::init_config(force)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
