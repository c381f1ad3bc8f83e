//! Command-line front end for the task board.
//!
//! Usage:
//!
//! ```text
//! taskboard [--store-dir <dir>] <command>
//! ```
//!
//! Each command applies one board operation, persists the result, and prints
//! the board. `move` without a destination reports a cancelled drag and
//! leaves the board unchanged.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `taskboard=info`).

use std::io::{self, Write};
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use taskboard::{
    board::{
        adapters::file::FileKeyValueStore,
        domain::{Board, BoardPosition, ColumnId, DragOutcome, TaskId},
        ports::KeyValueStoreError,
        services::{BoardPersistence, BoardStore},
    },
    config::{ConfigError, StoreConfig},
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "taskboard=info";

#[derive(Debug, Parser)]
#[command(name = "taskboard")]
#[command(about = "Kanban-style task board with a local snapshot store")]
struct Cli {
    /// Directory holding the board snapshot
    #[arg(long, global = true)]
    store_dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the board
    Show,
    /// Append a task to a column
    Add {
        /// Task text
        text: String,
        /// Target column (todo, inProgress, done)
        #[arg(short, long, default_value_t)]
        column: ColumnId,
    },
    /// Replace the text of a task
    Edit {
        /// Column holding the task
        column: ColumnId,
        /// Task identifier
        id: String,
        /// New text
        text: String,
    },
    /// Remove a task
    Delete {
        /// Column holding the task
        column: ColumnId,
        /// Task identifier
        id: String,
    },
    /// Flip the completion flag of a task
    Toggle {
        /// Column holding the task
        column: ColumnId,
        /// Task identifier
        id: String,
    },
    /// Move a task, as a completed drag gesture
    Move {
        /// Source column
        from: ColumnId,
        /// Index within the source column
        from_index: usize,
        /// Destination column; omit to report a cancelled drag
        #[arg(requires = "to_index")]
        to: Option<ColumnId>,
        /// Index within the destination column
        to_index: Option<usize>,
    },
}

/// Builds the drag event reported by `move`; a missing destination is a
/// cancelled gesture.
fn drag_outcome(
    from: ColumnId,
    from_index: usize,
    to: Option<ColumnId>,
    to_index: Option<usize>,
) -> DragOutcome {
    let source = BoardPosition::new(from, from_index);
    match to.zip(to_index) {
        Some((column, index)) => DragOutcome::dropped(source, BoardPosition::new(column, index)),
        None => DragOutcome::cancelled(source),
    }
}

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to open board store: {0}")]
    Store(#[from] KeyValueStoreError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let cli = Cli::parse();
    run(cli).map_err(Into::into)
}

/// Logs to stderr so stdout carries only the rendered board.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = StoreConfig::resolve(cli.store_dir)?;
    let file_store = FileKeyValueStore::open(config.store_dir())?;
    tracing::debug!(store_dir = %file_store.root(), "using board store");

    let mut store = BoardStore::open(BoardPersistence::new(Arc::new(file_store)));
    let board = apply(&mut store, cli.command.unwrap_or(Command::Show));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(board, &mut out)?;
    Ok(())
}

fn apply(store: &mut BoardStore<FileKeyValueStore>, command: Command) -> &Board {
    match command {
        Command::Show => store.board(),
        Command::Add { text, column } => store.add_task(column, &text),
        Command::Edit { column, id, text } => store.edit_task(column, &TaskId::new(id), &text),
        Command::Delete { column, id } => store.delete_task(column, &TaskId::new(id)),
        Command::Toggle { column, id } => store.toggle_complete(column, &TaskId::new(id)),
        Command::Move {
            from,
            from_index,
            to,
            to_index,
        } => store.apply_drag(drag_outcome(from, from_index, to, to_index)),
    }
}

/// Writes each column heading with its task count, then one line per task.
fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    for ((column_id, count), (_, column)) in board.task_counts().into_iter().zip(board.columns()) {
        writeln!(out, "{column_id} ({count})")?;
        for (index, task) in column.iter().enumerate() {
            let mark = if task.is_completed() { 'x' } else { ' ' };
            writeln!(out, "  [{mark}] {index} {} {}", task.id(), task.text())?;
        }
    }
    Ok(())
}
