use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use zerosum::{
    SolverConfig,
    console::{
        ConsoleError, JsonReport, Report, load_config, prompt, read_payoff, read_payoff_file,
    },
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows of the payoff matrix (strategies of player 1).
    #[arg(value_parser = parse_dimension)]
    m: usize,

    /// Number of columns of the payoff matrix (strategies of player 2).
    #[arg(value_parser = parse_dimension)]
    n: usize,

    /// File with the payoff matrix. Rows on separate lines, entries separated by spaces, or
    /// comma separated when the file has a .csv extension. Read from stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON file with the solver configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of pivots before giving up.
    #[arg(long)]
    max_pivots: Option<usize>,

    /// Print the solution as JSON.
    #[arg(short, long)]
    json: bool,

    /// Do not print the tableaux.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    let d: usize = s
        .parse()
        .map_err(|_| format!("{s} is not an integer greater than 0."))?;
    if d == 0 {
        Err("must be an integer greater than 0.".to_owned())
    } else {
        Ok(d)
    }
}

fn run(args: Args) -> Result<(), ConsoleError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SolverConfig::default(),
    };
    if args.max_pivots.is_some() {
        config.max_pivots = args.max_pivots;
    }
    if args.quiet || args.json {
        config.keep_history = false;
    }

    let game = match &args.input {
        Some(path) => read_payoff_file(path, args.m, args.n)?,
        None => {
            println!("{}", prompt(args.m, args.n));
            read_payoff(io::stdin().lock(), args.m, args.n)?
        }
    };

    let solve = game.solve(&config)?;
    if args.json {
        println!("{}", JsonReport::from(&solve).to_json()?);
    } else {
        print!("{}", Report::new(&solve));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
