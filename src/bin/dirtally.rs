//! Directory tally CLI (dirtally) - Main binary entry point

use dirtally::cli::args::{Command, TallyArgs, parse_args};
use dirtally::cli::output::{build_report, format_json, format_text};
use dirtally::{Calculator, Error, PathConfig, ScanOptions, SizeBasis, StrategyKind};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug dirtally /tmp --strategy stack
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let command = match parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match command {
        Command::Help => {
            print_help();
            0
        }
        Command::Version => {
            println!("dirtally {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Command::Tally(tally_args) => handle_tally(&tally_args),
    };

    process::exit(exit_code);
}

fn handle_tally(args: &TallyArgs) -> i32 {
    match run_tally(args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                Error::Traversal(_) => 4,
                _ => 2,
            }
        }
    }
}

fn run_tally(args: &TallyArgs) -> dirtally::Result<()> {
    let root = PathConfig::from_arg(args.path.clone().map(OsString::from))?;

    if !root.as_path().is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path is not an existing directory: {root}"
        )));
    }

    let basis: SizeBasis = args.basis.parse()?;
    let strategy: StrategyKind = args.strategy.parse()?;

    let mut options = ScanOptions {
        basis,
        ..ScanOptions::default()
    };
    if let Some(program) = &args.find_program {
        options.find_program = PathBuf::from(program);
    }

    let calculator = Calculator::with_options(root.as_path(), strategy, options)?;
    log::info!(
        "Tallying {} with '{}' strategy",
        calculator.path(),
        calculator.strategy()
    );

    let totals = calculator.compute()?;

    if args.json {
        println!("{}", format_json(&build_report(&calculator, &totals)));
    } else {
        println!("{}", format_text(&totals));
    }

    Ok(())
}

fn print_help() {
    println!("Directory tally CLI (dirtally) - Count files and their total size");
    println!();
    println!("USAGE:");
    println!("    dirtally <PATH> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --strategy <NAME|ID>      walk (1, default), recursion (2), stack (3), external (4)");
    println!("                              (aliases: recursive, queue, subprocess, process; --method)");
    println!("    --basis <TYPE>            Size basis: logical (default) or physical");
    println!("    --find <PROGRAM>          Program used by the external strategy (default: find)");
    println!("    --json                    Emit machine-readable output");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    dirtally /tmp");
    println!("    dirtally /tmp --strategy queue");
    println!("    RUST_LOG=debug dirtally /var/log --strategy external --json");
}
