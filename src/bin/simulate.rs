//! Headless game simulator CLI.
//!
//! A bot plays one seeded game through the core and prints a report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 2000 turns, seed 1
//!   cargo run --bin simulate -- --seed 42 --turns 500
//!   cargo run --bin simulate -- --race skrell --title engineer --json

use env_logger::{Builder, Env};
use hollow::character::{Race, Title};
use hollow::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            print_help();
            return ExitCode::FAILURE;
        }
    };

    let default_filter = if config.verbose { "debug" } else { "warn" };
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter)).try_init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                HOLLOW HEADLESS SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Seed:           {}", config.seed);
    println!("  Turns:          {}", config.turns);
    println!("  Race:           {}", config.race.name());
    println!("  Title:          {}", config.title.name());
    println!();

    let run = match run_simulation(&config) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Failed to load definitions: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", run.report.to_text());

    if config.json {
        let json = match run.report.to_json(&run.world) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to encode report: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, json) {
            eprintln!("Failed to write {}: {}", filename, e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                config.seed = value(args, i)?
                    .parse()
                    .map_err(|_| format!("--seed expects a number, got `{}`", args[i + 1]))?;
                i += 1;
            }
            "-t" | "--turns" => {
                config.turns = value(args, i)?
                    .parse()
                    .map_err(|_| format!("--turns expects a number, got `{}`", args[i + 1]))?;
                i += 1;
            }
            "--race" => {
                let name = value(args, i)?;
                config.race = Race::from_name(name).ok_or_else(|| format!("unknown race `{}`", name))?;
                i += 1;
            }
            "--title" => {
                let name = value(args, i)?;
                config.title =
                    Title::from_name(name).ok_or_else(|| format!("unknown title `{}`", name))?;
                i += 1;
            }
            "--name" => {
                config.name = value(args, i)?.to_string();
                i += 1;
            }
            "--json" => config.json = true,
            "-v" | "--verbose" => config.verbose = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown option `{}`", other)),
        }
        i += 1;
    }

    Ok(config)
}

fn value(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", args[i]))
}

fn print_help() {
    println!("Hollow Headless Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -s, --seed <N>       Random seed (default: 1)");
    println!("  -t, --turns <N>      Player turns to play (default: 2000)");
    println!("      --race <NAME>    Human, Tajaran, Unathi, Skrell, Synthetic, Diona");
    println!("      --title <NAME>   Xenoarchaeologist, Miner, Security Officer, Engineer,");
    println!("                       Scientist, Medical Doctor, Roboticist");
    println!("      --name <NAME>    Character name (default: Bot)");
    println!("      --json           Save the report and final snapshot as JSON");
    println!("  -v, --verbose        Echo the message log and enable debug logging");
    println!("  -h, --help           Show this help");
}
