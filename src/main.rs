use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use uv_verify::report::Reporter;
use uv_verify::verifier::Verifier;

#[derive(Parser)]
#[command(name = "uv-verify")]
#[command(about = "Verify a uv installation is functioning correctly", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut verifier = Verifier::from_env(Reporter::stderr())?;
    let results = verifier.run_all_checks();
    Ok(results.exit_code())
}
