//! sortviz: terminal playback for the sorting step generators.
//!
//! Builds a session from the command line, walks the materialized step
//! sequence at the configured speed, and prints the insight panel when
//! playback completes.

mod config;
mod render;

use config::Config;
use sortviz_core::playback::TickOutcome;
use sortviz_core::session::{Outcome, Session};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(1);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), String> {
    if config.print_config {
        config.print();
    }

    let mut session = Session::with_sample_len(config.algorithm, config.seed, config.sample_len)
        .map_err(|e| e.to_string())?;
    session.set_speed(config.speed).map_err(|e| e.to_string())?;

    if let Some(values) = &config.values {
        match session.replace(values).map_err(|e| e.to_string())? {
            Outcome::Applied => {}
            Outcome::Ignored => {
                println!("no numeric values in --values; keeping the random input");
            }
        }
    }

    println!("=== {} ===", session.algorithm_name());
    println!("{}", session.algorithm_description());
    println!();
    println!(
        "Input: {:?}  ({} values, seed {})",
        session.array(),
        session.array().len(),
        config.seed
    );
    println!("Markers: (comparing) [sorted] *active*");
    println!();

    let total = session.step_count();
    session.play();
    loop {
        if let Some(step) = session.current_step() {
            println!("{}", render::render_step(step, session.cursor(), total));
            println!();
        }
        if !config.fast {
            std::thread::sleep(session.interval());
        }
        match session.advance() {
            TickOutcome::Advanced => {}
            TickOutcome::Finished | TickOutcome::Ignored => break,
        }
    }

    if config.show_insights {
        if let Some(insights) = session.insights() {
            println!("{}", render::render_insights(session.algorithm_name(), insights));
        }
    }

    Ok(())
}
