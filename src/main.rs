use anyhow::{anyhow, Result};
use clap::Parser;
use std::io;

use stackpad::cli::CliArgs;
use stackpad::config::EditorConfig;
use stackpad::config_paths;
use stackpad::runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    stackpad::tracing::init();

    if args.init_config {
        return init_config();
    }

    let config = EditorConfig::load();
    let startup = args.into_config(&config);
    let mut app = App::new(config, startup);

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(stdin.lock(), stdout.lock())
}

/// Write the default config file unless one already exists
fn init_config() -> Result<()> {
    let path = config_paths::config_file().ok_or_else(|| anyhow!("No config directory available"))?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    EditorConfig::default().save().map_err(|e| anyhow!(e))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
