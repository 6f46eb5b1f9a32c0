use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ScriptError> {
    let Cli { json, command } = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let report = command.run()?;
    let output = if json {
        serde_json::to_string_pretty(&report).map_err(|e| ScriptError::Serde(e.to_string()))?
    } else {
        report.to_string()
    };
    println!("{output}");

    Ok(())
}
