use std::process::ExitCode;

use clap::{error::ErrorKind, CommandFactory, Parser};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

mod attribute;
mod battery;
mod cli;
mod icon;
mod metrics;
mod output;
mod status;
mod uevent;

use battery::BatteryReading;
use cli::Cli;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => return usage_error(e),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(args.log_filter()))
        .init();

    match run(&args) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<String> {
    color_eyre::install()?;

    let mode = args.mode();
    tracing::info!(path = %args.battery_path.display(), %mode, icon = args.icon, "querying battery");

    let reading = BatteryReading::read(&args.battery_path, mode, args.icon)?;
    Ok(output::render(mode, args.icon, &reading))
}

/// Help and version go to stdout and succeed. Anything else prints the usage
/// text and a one-line reason to stderr.
fn usage_error(e: clap::Error) -> ExitCode {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = e.print();
        return ExitCode::SUCCESS;
    }

    let reason = match e.kind() {
        ErrorKind::MissingRequiredArgument => "battery_path not specified".to_string(),
        _ => e
            .to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string(),
    };

    eprintln!("{}", Cli::command().render_help().to_string().trim_end());
    eprintln!("args: {}", reason);
    ExitCode::FAILURE
}
