//! Microgrid simulator entry point — CLI wiring and config-driven engine construction.

use std::path::Path;
use std::process;

use microgrid_sim::config::ScenarioConfig;
use microgrid_sim::io::export::export_csv;
use microgrid_sim::sim::strategy::DispatchStrategy;
use microgrid_sim::sim::engine::Engine;
use microgrid_sim::sim::summary::SummaryReport;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    seed_override: Option<u64>,
    out_path: Option<String>,
}

fn print_help() {
    eprintln!("microgrid-sim — residential solar+battery+grid microgrid simulator");
    eprintln!();
    eprintln!("Usage: microgrid-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load scenario from TOML config file");
    eprintln!("  --seed <u64>        Override random seed");
    eprintln!("  --out <path>        Export step records to CSV");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario is given, the built-in baseline scenario is used.");
    eprintln!(
        "Dispatch strategies ([strategy] name): {}",
        DispatchStrategy::NAMES.join(", ")
    );
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        seed_override: None,
        out_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --out requires a path argument");
                    process::exit(1);
                }
                cli.out_path = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    let mut cfg = match &cli.scenario_path {
        Some(path) => match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => ScenarioConfig::baseline(),
    };

    if let Some(seed) = cli.seed_override {
        cfg.simulation.seed = seed;
    }

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let mut engine = Engine::from_scenario(&cfg);
    let records = engine.run();

    println!("{}", SummaryReport::from_records(&records));

    if let Some(out) = &cli.out_path {
        if let Err(e) = export_csv(&records, Path::new(out)) {
            eprintln!("error: failed to write \"{out}\": {e}");
            process::exit(1);
        }
        println!("Records written to {out}");
    }
}
