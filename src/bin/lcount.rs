//! Line Count CLI (lcount) - Main binary entry point

use lcount::cli::args::{Command, CountArgs, parse_args};
use lcount::cli::output::{format_json, format_text};
use lcount::{CountOptions, ScanOptions, StrategyKind};
use std::process;
use std::str::FromStr;
use std::time::Instant;

fn main() {
    let start = Instant::now();

    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug lcount ./src
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

    let exit_code = match &command {
        Command::Help => {
            print_help();
            0
        }
        Command::Version => {
            print_version();
            0
        }
        Command::Count(count_args) => handle_count(count_args, start),
    };

    process::exit(exit_code);
}

fn handle_count(args: &CountArgs, start: Instant) -> i32 {
    let mut opts = ScanOptions {
        count: CountOptions {
            chunk_size: args.chunk_size,
            max_workers: args.workers,
        },
        ..ScanOptions::default()
    };

    if let Some(label) = args.strategy_override.as_deref() {
        match StrategyKind::from_str(label) {
            Ok(kind) => opts.strategy_override = Some(kind),
            Err(err) => {
                eprintln!("Error: {err}");
                return 2;
            }
        }
    }

    // Every produced path is rooted at the target directory.
    if let Err(e) = std::env::set_current_dir(&args.path) {
        eprintln!("Error: Failed to chdir to {}: {e}", args.path);
        return 1;
    }

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: Failed to resolve working directory: {e}");
            return 1;
        }
    };

    let summary = match lcount::scan_summary(&root, &opts) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                lcount::Error::InvalidInput(_) => 2,
                _ => 1,
            };
        }
    };

    let mut report = summary.report(&args.path);
    report.elapsed = start.elapsed();

    if args.json {
        match format_json(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: Failed to render JSON report: {e}");
                return 1;
            }
        }
    } else {
        print!("{}", format_text(&report));
    }

    0
}

fn print_help() {
    println!("Line Count CLI (lcount) - Count newline-delimited lines across a directory tree");
    println!();
    println!("USAGE:");
    println!("    lcount [OPTIONS] <DIRECTORY>");
    println!();
    println!("Hidden files and directories (names starting with '.') are skipped.");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!(
        "    --chunk-size <N>          Files counted per worker (default: {})",
        lcount::DEFAULT_CHUNK_SIZE
    );
    println!("    --workers <N>             Cap concurrent workers (default: one per chunk)");
    println!("    --strategy <NAME>         Override crawl backend: portable|posix (aliases: std, unix)");
    println!("    --json                    Emit machine-readable output");
    println!("    --                        Treat every following argument as the directory");
    println!();
    println!("EXAMPLES:");
    println!("    lcount ~/src/project");
    println!("    lcount /data/monorepo --chunk-size 5000 --workers 8");
    println!("    RUST_LOG=debug lcount . --json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("lcount {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
