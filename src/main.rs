use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use nqueens::{init_logging, Board, ConflictReport};

#[derive(Parser)]
#[command(author, version, about = "Check rook and queen placements for conflicts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct BoardSource {
    /// Literal board, rows separated by ';' and cells by ',' (e.g. "1,0;0,1").
    #[arg(long)]
    board: Option<String>,
    /// File holding one board row per line.
    #[arg(long)]
    file: Option<PathBuf>,
}

impl BoardSource {
    fn load(&self) -> anyhow::Result<Board> {
        let text = match (&self.board, &self.file) {
            (Some(literal), _) => literal.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            (None, None) => return Err(anyhow!("no board given")),
        };
        text.parse::<Board>().map_err(|e| anyhow!(e))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Report every conflict on the board; exits 1 if queens attack each other.
    Check {
        #[command(flatten)]
        source: BoardSource,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Check the four lines through one cell.
    Point {
        #[command(flatten)]
        source: BoardSource,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
    },
}

fn print_report(board: &Board, report: &ConflictReport) {
    println!("{}", board);
    println!();
    println!("rows:            {}", report.rows);
    println!("columns:         {}", report.columns);
    println!("major diagonals: {}", report.major_diagonals);
    println!("minor diagonals: {}", report.minor_diagonals);
    println!("rook conflicts:  {}", report.rooks);
    println!("queen conflicts: {}", report.queens);
    for line in &report.conflicting_lines {
        println!("  conflict on {}", line);
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { source, json } => {
            let board = source.load()?;
            log::info!(
                "checking {}x{} board with {} pieces",
                board.size(),
                board.size(),
                board.pieces().count()
            );
            let report = board.conflicts().report();
            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                print_report(&board, &report);
            }
            Ok(if report.queens {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Point { source, row, col } => {
            let board = source.load()?;
            let conflict = board
                .conflicts()
                .has_any_queen_conflicts_at_point(row, col)
                .map_err(|e| anyhow!(e))?;
            println!("({}, {}): {}", row, col, if conflict { "conflict" } else { "clear" });
            Ok(ExitCode::SUCCESS)
        }
    }
}
