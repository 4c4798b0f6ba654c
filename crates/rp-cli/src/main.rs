//! route-planner: plan driving, restricted, and park-and-walk routes over a
//! CSV road network.
//!
//! Interactive by default: a menu on stdin picks the request kind, the request
//! file is read, and the result file is (re)written.  `--once` skips the menu
//! and infers the kind from the request file itself.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=info` (or `debug` for one
//! line per search) to see it.

mod menu;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use rp_io::{detect_kind, load_network, parse_request, write_outcome_file};
use rp_planner::{PlannerConfig, RequestKind, RoutePlanner};

use menu::{Choice, MENU};

/// Route planning over a road network of locations with optional parking.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Locations CSV (`name,id,code,parking`).
    #[arg(long, default_value = "Locations.csv")]
    locations: PathBuf,

    /// Distances CSV (`code1,code2,driving,walking`).
    #[arg(long, default_value = "Distances.csv")]
    distances: PathBuf,

    /// Request file read for every plan.
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Result file written after every plan.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Maximum number of over-budget park-and-walk suggestions to list.
    #[arg(long, default_value_t = 2)]
    suggestions: usize,

    /// Let the walking leg reuse roads the driving leg already used.
    #[arg(long)]
    allow_walk_on_driven_roads: bool,

    /// Plan the request file once, inferring its kind, and exit.
    #[arg(long)]
    once: bool,
}

impl Args {
    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            suggestion_limit:            self.suggestions,
            block_driven_edges_for_walk: !self.allow_walk_on_driven_roads,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let network = load_network(&args.locations, &args.distances).with_context(|| {
        format!(
            "loading network from {} and {}",
            args.locations.display(),
            args.distances.display()
        )
    })?;
    let planner = RoutePlanner::new(&network, args.planner_config());

    if args.once {
        let text = read_request(&args.input)?;
        let kind = detect_kind(&text)?;
        return run_request(&planner, &text, kind, &args.output);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{MENU}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match Choice::parse(&line?) {
            Some(Choice::Plan(kind)) => {
                let result = read_request(&args.input)
                    .and_then(|text| run_request(&planner, &text, kind, &args.output));
                match result {
                    Ok(()) => println!("Result written to {}.", args.output.display()),
                    Err(e) => {
                        log::error!("{kind:?} request failed: {e:#}");
                        eprintln!("Error: {e:#}");
                    }
                }
            }
            Some(Choice::Exit) => {
                println!("Exiting program.");
                break;
            }
            None => println!("Invalid choice. Please enter a valid option."),
        }
    }
    Ok(())
}

fn read_request(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading request file {}", path.display()))
}

/// Parse `text` as a `kind` request, plan it, and write the result to `output`.
fn run_request(
    planner: &RoutePlanner<'_>,
    text: &str,
    kind: RequestKind,
    output: &Path,
) -> Result<()> {
    let request = parse_request(text, kind)?;
    let outcome = planner.plan(&request)?;
    write_outcome_file(output, &request, &outcome, planner.config().suggestion_limit)?;
    Ok(())
}
