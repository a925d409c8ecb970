// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::error::Error;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::warn;
use separator::Separatable;

use eight_puzzle_solver::comparison;
use eight_puzzle_solver::config::{Heuristic, Method};
use eight_puzzle_solver::puzzle::Puzzle;
use eight_puzzle_solver::state::State;
use eight_puzzle_solver::{LoadPuzzle, Solve};

const DEFAULT_STATE: &str = "724506831";

fn main() {
    env_logger::init();

    let matches = App::new("eight-puzzle-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds moves of the blank from a start state to the goal (0 1 2 / 3 4 5 / 6 7 8 unless set)")
        .arg(
            Arg::with_name("state")
                .help("start state, e.g. 724506831 or \"7 2 4 / 5 0 6 / 8 3 1\" (default: 724506831)")
                .index(1),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .value_name("FILE")
                .conflicts_with("state")
                .help("read the start state from a file"),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .takes_value(true)
                .value_name("STATE")
                .help("goal state (default: 012345678)"),
        )
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .possible_values(&Method::NAMES)
                .default_value("a-star")
                .help("search method"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&Heuristic::NAMES)
                .default_value("manhattan")
                .help("heuristic for greedy and a-star"),
        )
        .arg(
            Arg::with_name("compare")
                .short("c")
                .long("compare")
                .help("run every method and heuristic and print a table"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print stats and intermediate states"),
        )
        .arg(
            Arg::with_name("progress")
                .short("p")
                .long("progress")
                .help("print stats whenever search reaches a new depth"),
        )
        .get_matches();

    let puzzle = load_puzzle(&matches).unwrap_or_else(|err| {
        eprintln!("Failed to load puzzle: {}", err);
        process::exit(1);
    });
    let method = parse_method(&matches).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    if !puzzle.is_solvable() {
        warn!("Start state has the wrong parity, search will exhaust the state space");
    }

    println!("Initial state:\n{}", puzzle);

    if matches.is_present("compare") {
        let comparison = comparison::compare(&puzzle, &Method::all());
        print!("{}", comparison);
        return;
    }

    let quiet = matches.is_present("quiet");
    println!("Solving using {}...", method);
    let solver_ok = puzzle.solve(method, matches.is_present("progress"));
    if !quiet {
        println!("{}", solver_ok.stats);
    }
    match solver_ok.moves {
        Some(ref moves) => {
            println!("Found solution:");
            if !quiet {
                print!("{}", puzzle.solution(moves));
            }
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
        }
        None => println!("No solution"),
    }
    println!("Steps: {}", solver_ok.steps().separated_string());
}

fn load_puzzle(matches: &ArgMatches<'_>) -> Result<Puzzle, Box<dyn Error>> {
    let puzzle: Puzzle = match matches.value_of("file") {
        Some(path) => path.load_puzzle()?,
        None => matches.value_of("state").unwrap_or(DEFAULT_STATE).parse()?,
    };
    match matches.value_of("goal") {
        Some(goal) => Ok(Puzzle::with_goal(puzzle.initial, goal.parse::<State>()?)),
        None => Ok(puzzle),
    }
}

fn parse_method(matches: &ArgMatches<'_>) -> Result<Method, Box<dyn Error>> {
    let heuristic: Heuristic = matches.value_of("heuristic").unwrap_or("manhattan").parse()?;
    let method = Method::from_names(matches.value_of("method").unwrap_or("a-star"), heuristic)?;
    Ok(method)
}
