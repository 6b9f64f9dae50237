#![allow(clippy::exit)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;


#[derive(Parser, Debug)]
#[clap(version)]
enum Args {
    /// Solve the GCD reachability problem from stdin.
    GcdReach,
    /// Solve the prime-sum partition range problem from stdin.
    PrimeSum,
    /// Count bounded-insertion palindromes from stdin.
    Palindrome,
    /// Maximize the market value from stdin.
    Market,
    /// Run JSON testcase files against the solvers.
    Test { files: Vec<PathBuf> },
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let result = match args {
        Args::GcdReach => run_stdin(Solver::GcdReach),
        Args::PrimeSum => run_stdin(Solver::PrimeSum),
        Args::Palindrome => run_stdin(Solver::Palindrome),
        Args::Market => run_stdin(Solver::Market),
        Args::Test { files } => test::main(files),
    };

    if let Err(error) = result {
        log::error!("{error}");
        std::process::exit(1);
    }
}

#[derive(Copy, Clone, Debug)]
enum Solver {
    GcdReach,
    PrimeSum,
    Palindrome,
    Market,
}

impl Solver {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "gcd-reach" => Some(Solver::GcdReach),
            "prime-sum" => Some(Solver::PrimeSum),
            "palindrome" => Some(Solver::Palindrome),
            "market" => Some(Solver::Market),
            _ => None,
        }
    }

    fn run(self, input: &str) -> Result<String, String> {
        match self {
            Solver::GcdReach => quest_gcd_reach::solve(input).map_err(|error| error.to_string()),
            Solver::PrimeSum => quest_prime_sum::solve(input).map_err(|error| error.to_string()),
            Solver::Palindrome => quest_palindrome::solve(input).map_err(|error| error.to_string()),
            Solver::Market => quest_market::solve(input).map_err(|error| error.to_string()),
        }
    }
}

fn run_stdin(solver: Solver) -> Result<(), String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|error| format!("failed to read stdin: {error}"))?;

    let output = solver.run(&input)?;
    println!("{output}");
    Ok(())
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TestcaseJson {
    name: String,
    solver: String,
    input: String,
    expected_output: String,
}
