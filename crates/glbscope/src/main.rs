use env_logger::Env;
use glbscope::cli::Args;
use glbscope::{inspect_path, list_chunks, render, render_chunk_listing};
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse_args();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let settings = args.settings()?;
    debug!("Using settings: {:?}", settings);

    let mut report = if args.chunks {
        let (header, chunks) = list_chunks(&args.file, &settings)?;
        render_chunk_listing(&header, &chunks, settings.format)?
    } else {
        let inspection = inspect_path(&args.file, &settings)?;
        render(&inspection, settings.format)?
    };

    if !report.ends_with('\n') {
        report.push('\n');
    }
    Ok(report)
}
