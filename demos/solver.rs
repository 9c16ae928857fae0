use std::io::{self, BufRead, Write};

use bool_solver::{Config, Solver};
use clap::Parser;
use color_eyre::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Boolean expression solver")]
struct Cli {
    /// Expression to solve (prompted for on stdin if omitted)
    #[arg(value_name = "EXPR")]
    expr: Option<String>,

    /// Print the truth table instead of a single evaluation
    #[arg(short, long)]
    truth_table: bool,

    /// Maximum number of distinct variables in a truth table
    #[arg(long, value_name = "INT", default_value_t = Config::DEFAULT_MAX_VARIABLES)]
    max_vars: usize,

    /// Value assumed for every variable when evaluating
    #[arg(long, value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    default: bool,

    /// Do not rewrite `A'` into `!A` before parsing
    #[arg(long)]
    no_normalize: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_expression() -> Result<String> {
    println!("Boolean Expression Solver");
    println!("-------------------------");
    println!("Enter a Boolean expression (use '+' for OR, '·' for AND, '!' for NOT):");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        color_eyre::eyre::bail!("no expression given on stdin");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    let config = Config::default()
        .with_max_variables(args.max_vars)
        .with_default_value(args.default)
        .with_normalize_complements(!args.no_normalize);
    let solver = Solver::new(config);

    let expr = match args.expr {
        Some(expr) => expr,
        None => read_expression()?,
    };

    if args.truth_table {
        let table = solver.truth_table(&expr)?;
        println!();
        println!("Truth Table:");
        print!("{}", table);
    } else {
        let result = solver.evaluate(&expr)?;
        println!();
        println!("Evaluation Result: {}", result as u8);
    }

    Ok(())
}
