use anyhow::Context;
use clap::{Parser, Subcommand};
use smtx::{
    read_matrix, write_matrix, Error, ErrorCategory, IoConfig, MatrixOperations, MatrixSummary,
    Operation, SmtxError,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "smtx - add, subtract and multiply sparse integer matrix files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an operation to two matrix files and save the result
    Calc {
        /// File path of the first matrix
        lhs: PathBuf,

        /// File path of the second matrix
        rhs: PathBuf,

        /// 1 (addition), 2 (subtraction), 3 (multiplication), or the operation name
        #[arg(long, short = 'p')]
        op: String,

        /// File path to save the result
        #[arg(long, short)]
        output: PathBuf,

        /// Drop zero-valued entries from the result
        #[arg(long)]
        prune_zeros: bool,

        /// Create missing parent directories of the output path
        #[arg(long)]
        create_dirs: bool,
    },
    /// Show a JSON summary of a matrix file
    Info {
        /// File path of the matrix
        path: PathBuf,

        /// Also list the entries of this row
        #[arg(long)]
        row: Option<usize>,

        /// Also list the entries of this column
        #[arg(long)]
        col: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Calc {
            lhs,
            rhs,
            op,
            output,
            prune_zeros,
            create_dirs,
        } => {
            let config = IoConfig::default()
                .with_prune_zeros(*prune_zeros)
                .with_create_dirs(*create_dirs);
            handle_calc(lhs, rhs, op, output, &config)
        }
        Commands::Info { path, row, col } => handle_info(path, *row, *col),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Usage errors exit with 2, everything else with 1
fn exit_code(err: &anyhow::Error) -> u8 {
    let category = err
        .downcast_ref::<Error>()
        .map(Error::category)
        .or_else(|| err.downcast_ref::<SmtxError>().map(SmtxError::category));

    match category {
        Some(ErrorCategory::Usage) => 2,
        _ => 1,
    }
}

fn handle_calc(
    lhs: &Path,
    rhs: &Path,
    op: &str,
    output: &Path,
    config: &IoConfig,
) -> anyhow::Result<()> {
    let operation: Operation = op.parse()?;

    let first = read_matrix(lhs)
        .with_context(|| format!("loading first matrix {}", lhs.display()))?;
    let second = read_matrix(rhs)
        .with_context(|| format!("loading second matrix {}", rhs.display()))?;

    let result = operation.apply(&first, &second)?;
    println!("Output of {operation}");

    write_matrix(output, &result, config)
        .with_context(|| format!("saving result to {}", output.display()))?;
    println!("Output file saved to {}", output.display());

    Ok(())
}

fn handle_info(path: &Path, row: Option<usize>, col: Option<usize>) -> anyhow::Result<()> {
    let matrix = read_matrix(path)?;
    println!("{}", MatrixSummary::of(&matrix).to_json()?);

    if let Some(r) = row {
        println!("Entries in row {r}:");
        for (c, value) in matrix.get_row(r) {
            println!("({r}, {c}, {value})");
        }
    }

    if let Some(c) = col {
        println!("Entries in column {c}:");
        for (r, value) in matrix.get_col(c) {
            println!("({r}, {c}, {value})");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calc_arguments() {
        let cli = Cli::try_parse_from([
            "smtx", "calc", "a.txt", "b.txt", "-p", "3", "-o", "out.txt", "--prune-zeros",
        ])
        .unwrap();

        match cli.command {
            Commands::Calc {
                lhs,
                rhs,
                op,
                output,
                prune_zeros,
                create_dirs,
            } => {
                assert_eq!(lhs, PathBuf::from("a.txt"));
                assert_eq!(rhs, PathBuf::from("b.txt"));
                assert_eq!(op, "3");
                assert_eq!(output, PathBuf::from("out.txt"));
                assert!(prune_zeros);
                assert!(!create_dirs);
            }
            Commands::Info { .. } => panic!("expected calc"),
        }
    }

    #[test]
    fn test_invalid_operation_exits_with_usage_code() {
        let err = handle_calc(
            Path::new("a.txt"),
            Path::new("b.txt"),
            "4",
            Path::new("out.txt"),
            &IoConfig::default(),
        )
        .unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }
}
