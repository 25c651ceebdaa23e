//! Autodance - command line harness
//!
//! Usage: `autodance <timeline.json> [settings.json]`
//!
//! Reads a timeline, synthesizes one pass and prints the frames as JSON.

use std::process::ExitCode;

use autodance::{ConfigError, Settings, Synthesizer, Timeline};

fn run(timeline_path: &str, settings_path: Option<&str>) -> Result<(), ConfigError> {
    let json = std::fs::read_to_string(timeline_path)?;
    let timeline = Timeline::from_json(&json)?;
    log::info!("Loaded {} objects from {}", timeline.len(), timeline_path);

    let settings = match settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::info!("Using {} mover at {} fps", settings.mover.as_str(), settings.frame_rate);

    let frames = Synthesizer::new(settings).generate(&timeline);
    println!("{}", serde_json::to_string_pretty(&frames)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(timeline_path) = args.first() else {
        eprintln!("usage: autodance <timeline.json> [settings.json]");
        return ExitCode::from(2);
    };

    match run(timeline_path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
