use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use sparse_csr::{
    add_matrices, multiply_matrices, print_matrix, read_matrix_market, subtract_matrices,
    transpose_matrix, SparseMatrixCSR,
};

const USAGE: &str = "\
Usage:
  sparse-csr <file.mtx>
  sparse-csr <file1.mtx> <file2.mtx> <addition|subtraction|multiplication> [print]
  sparse-csr <file.mtx> transpose [print]";

#[derive(Parser, Debug)]
#[command(
    name = "sparse-csr",
    version,
    about = "Load Matrix Market files as CSR matrices and add, subtract, multiply or transpose them",
    after_help = USAGE,
    allow_negative_numbers = true
)]
struct Cli {
    /// Increase log output (-v for timings, -vv for debug detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Matrix files, operation name and optional print flag (non-zero prints)
    #[arg(required = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum UsageError {
    #[error("Invalid arguments.")]
    InvalidArguments,
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Addition,
    Subtraction,
    Multiplication,
}

impl FromStr for BinaryOp {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition" => Ok(BinaryOp::Addition),
            "subtraction" => Ok(BinaryOp::Subtraction),
            "multiplication" => Ok(BinaryOp::Multiplication),
            other => Err(UsageError::UnknownOperation(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Show {
        path: String,
    },
    Binary {
        lhs: String,
        rhs: String,
        op: BinaryOp,
        print: bool,
    },
    Transpose {
        path: String,
        print: bool,
    },
}

impl Command {
    fn from_args(args: &[String]) -> Result<Self, UsageError> {
        match args {
            [path] => Ok(Command::Show { path: path.clone() }),
            [path, op] if op == "transpose" => Ok(Command::Transpose {
                path: path.clone(),
                print: false,
            }),
            [path, op, flag] if op == "transpose" => Ok(Command::Transpose {
                path: path.clone(),
                print: parse_print_flag(flag),
            }),
            [lhs, rhs, op] => Ok(Command::Binary {
                lhs: lhs.clone(),
                rhs: rhs.clone(),
                op: op.parse()?,
                print: false,
            }),
            [lhs, rhs, op, flag] => Ok(Command::Binary {
                lhs: lhs.clone(),
                rhs: rhs.clone(),
                op: op.parse()?,
                print: parse_print_flag(flag),
            }),
            _ => Err(UsageError::InvalidArguments),
        }
    }
}

/// Reads the flag like `atoi`: optional whitespace and sign, then leading
/// digits. Printing is on when those digits are non-zero; anything else is 0.
fn parse_print_flag(flag: &str) -> bool {
    let flag = flag.trim_start();
    let digits = flag
        .strip_prefix('-')
        .or_else(|| flag.strip_prefix('+'))
        .unwrap_or(flag);

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .any(|digit| digit != b'0')
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load(path: &str) -> anyhow::Result<SparseMatrixCSR<f64>> {
    read_matrix_market(path).with_context(|| format!("failed to load {}", path))
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Show { path } => {
            let a = load(&path)?;
            print_matrix(&a)?;
        }
        Command::Binary {
            lhs,
            rhs,
            op,
            print,
        } => {
            let a = load(&lhs)?;
            let b = load(&rhs)?;

            let start = Instant::now();
            let c = match op {
                BinaryOp::Addition => add_matrices(&a, &b)?,
                BinaryOp::Subtraction => subtract_matrices(&a, &b)?,
                BinaryOp::Multiplication => multiply_matrices(&a, &b)?,
            };
            log::info!("{:?} took {:?}", op, start.elapsed());

            if print {
                print_matrix(&a)?;
                print_matrix(&b)?;
                print_matrix(&c)?;
            }
        }
        Command::Transpose { path, print } => {
            let a = load(&path)?;

            let start = Instant::now();
            let c = transpose_matrix(&a);
            log::info!("Transpose took {:?}", start.elapsed());

            if print {
                print_matrix(&a)?;
                print_matrix(&c)?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match Command::from_args(&cli.args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
