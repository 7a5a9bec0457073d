use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".testgen.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Testgen Configuration

[generator]
test_suffix = "Test"
mock_prefix = "mock_"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .testgen.toml configuration file");

    Ok(())
}
