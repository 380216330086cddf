//! Configuration for the sortviz application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including a randomized input that is reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use sortviz_core::generator::AlgorithmKind;

/// Complete configuration for a visualization run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Algorithm ===
    /// Which sorting algorithm to narrate
    pub algorithm: AlgorithmKind,

    // === Input ===
    /// Custom comma-separated input (None = random sample)
    pub values: Option<String>,

    /// Length of the random sample when no custom input is given
    pub sample_len: usize,

    /// Seed for all randomness (fully deterministic runs)
    pub seed: u64,

    // === Playback ===
    /// Playback speed multiplier (0.5 to 3.0 in half steps)
    pub speed: f64,

    /// Skip inter-step delays entirely
    pub fast: bool,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print insights after playback completes
    pub show_insights: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no arguments are provided, uses a random sample with a time-based
    /// seed. If --seed is provided, that seed governs all randomness.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut algorithm: Option<AlgorithmKind> = None;
        let mut values: Option<String> = None;
        let mut sample_len: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut speed: Option<f64> = None;
        let mut fast = false;
        let mut print_config = false;
        let mut show_insights = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--algorithm" | "-a" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--algorithm requires a name".to_string());
                    }
                    algorithm = Some(args[i].parse()?);
                }
                "--values" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--values requires a comma-separated list".to_string());
                    }
                    values = Some(args[i].clone());
                }
                "--len" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--len requires a number".to_string());
                    }
                    sample_len = Some(args[i].parse().map_err(|_| "invalid len")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--speed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--speed requires a number".to_string());
                    }
                    speed = Some(args[i].parse().map_err(|_| "invalid speed")?);
                }
                "--fast" => {
                    fast = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-insights" => {
                    show_insights = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let sample_len = sample_len.unwrap_or(sortviz_core::session::DEFAULT_SAMPLE_LEN);
        if sample_len == 0 {
            return Err("--len must be at least 1".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(Config {
            algorithm: algorithm.unwrap_or(AlgorithmKind::Counting),
            values,
            sample_len,
            seed,
            speed: speed.unwrap_or(1.0),
            fast,
            print_config,
            show_insights,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Algorithm: {}", self.algorithm);
        println!("Seed: {}", self.seed);
        match &self.values {
            Some(text) => println!("Input: custom {:?}", text),
            None => println!("Input: random sample of {} values", self.sample_len),
        }
        println!("Speed: {}x", self.speed);
        println!("Fast mode: {}", if self.fast { "on" } else { "off" });
        println!("Insights: {}", if self.show_insights { "on" } else { "off" });
        println!();
    }
}

fn print_help() {
    println!("sortviz: Educational sorting visualizer with narrated playback");
    println!();
    println!("USAGE:");
    println!("    sortviz [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --algorithm, -a <NAME>  counting, bucket, or radix (default: counting)");
    println!("    --values <LIST>         Comma-separated input values (default: random)");
    println!("    --len <N>               Random sample length (default: 10)");
    println!("    --seed <N>              Random seed for determinism");
    println!();
    println!("    --speed <X>             Playback speed 0.5-3.0 in half steps (default: 1.0)");
    println!("    --fast                  No delay between steps");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --no-insights           Don't print insights after completion");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    sortviz                                  # Counting sort, random input");
    println!("    sortviz -a radix --seed 42               # Deterministic radix run");
    println!("    sortviz -a bucket --values 5,30,12,45,1  # Custom input");
    println!("    sortviz --fast --no-insights             # Just the steps, no waiting");
    println!();
}
