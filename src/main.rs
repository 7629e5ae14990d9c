// Tue Feb 3 2026 - Alex

use clap::Parser;
use class_layout_generator::{
    config::Config,
    error::LayoutError,
    facts::{FactsFileFrontEnd, FrontEnd, ProcessFrontEnd},
    layout::{self, LocationFilter},
    output,
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const FRONTEND_ENV: &str = "CLASS_LAYOUT_FRONTEND";

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Class layout generator", long_about = None)]
struct Args {
    /// Source files for the front end, or a single pre-resolved .json facts dump
    #[arg(required = true)]
    sources: Vec<PathBuf>,

    #[arg(short, long, default_value = "output.slbin")]
    output: PathBuf,

    /// 1-based row of the location to inspect
    #[arg(short = 'r', long = "locationRow")]
    location_row: u32,

    /// 1-based column of the location to inspect
    #[arg(short = 'c', long = "locationCol")]
    location_col: u32,

    /// External front-end command emitting type facts as JSON
    #[arg(long)]
    frontend: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    /// Compilation arguments forwarded to the front end after `--`
    #[arg(last = true)]
    frontend_args: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    let config = Config::new()
        .with_sources(args.sources)
        .with_output_file(args.output)
        .with_location(args.location_row, args.location_col);
    let config = Config {
        frontend_command: args.frontend,
        frontend_args: args.frontend_args,
        verbose: args.verbose,
        ..config
    };

    if let Err(e) = config.validate() {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }

    println!("{}", "Class Layout Generator".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    let frontend = match select_frontend(&config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    println!(
        "{} Resolving type facts for {} source(s)",
        "[*]".blue(),
        config.sources.len()
    );

    let spinner = if !args.no_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Running front end...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let facts = frontend.resolve(&config.sources, &config.frontend_args);

    if let Some(ref pb) = spinner {
        pb.finish_and_clear();
    }

    let facts = match facts {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    println!(
        "{} Front end resolved {} record(s), {} declaration(s)",
        "[+]".green(),
        facts.records.len(),
        facts.decls.len()
    );

    let filter = LocationFilter::new(config.location_row, config.location_col);
    let result = match layout::run(&facts, filter) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    match result.node {
        Some(ref node) => {
            println!(
                "{} Layout for {}: {} node(s), size {} align {}",
                "[+]".green(),
                node.type_name.cyan(),
                result.node_count(),
                node.size,
                node.align
            );
        }
        None => {
            println!(
                "{} No class declaration at {}:{}; writing empty artifact",
                "[*]".blue(),
                config.location_row,
                config.location_col
            );
        }
    }

    if let Err(e) = output::write_result(&result, &config.output_file) {
        match e {
            LayoutError::Io(ref io) => {
                eprintln!(
                    "{} Failed to write {}: {}",
                    "[!]".red(),
                    config.output_file.display(),
                    io
                );
            }
            other => eprintln!("{} {}", "[!]".red(), other),
        }
        std::process::exit(1);
    }

    let elapsed = start_time.elapsed();

    println!(
        "{} Artifact written to: {}",
        "[+]".green(),
        config.output_file.display()
    );
    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} Done in {:.2}s",
        "[+]".green(),
        elapsed.as_secs_f64()
    );
}

fn select_frontend(config: &Config) -> Result<Box<dyn FrontEnd>, LayoutError> {
    if let Some(command) = &config.frontend_command {
        return Ok(Box::new(ProcessFrontEnd::new(command.clone())));
    }

    if let Ok(command) = std::env::var(FRONTEND_ENV) {
        if !command.is_empty() {
            return Ok(Box::new(ProcessFrontEnd::new(command)));
        }
    }

    // A single pre-resolved dump can be consumed without a front end.
    if let [single] = config.sources.as_slice() {
        if single.extension().is_some_and(|ext| ext == "json") {
            return Ok(Box::new(FactsFileFrontEnd::new(single.clone())));
        }
    }

    Err(LayoutError::FrontEnd(format!(
        "no front end configured; pass --frontend, set {}, or give a resolved .json facts file",
        FRONTEND_ENV
    )))
}
