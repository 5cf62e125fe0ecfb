//! trellis: outline and restructure heading-structured text from the command line.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trellis::{outline, Config, Document, Engine, TrellisError};

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Outline and restructure heading-structured text", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./trellis.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the outline of a document
    Outline {
        /// Document to read
        file: PathBuf,
        /// Print nodes as JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },
    /// Print the section segmentation of a document as JSON
    Sections {
        /// Document to read
        file: PathBuf,
    },
    /// Print one section together with its descendants
    Section {
        /// Document to read
        file: PathBuf,
        /// Zero-based line of the section heading
        #[arg(long)]
        line: usize,
    },
    /// Reorder sections to follow an outline given as JSON
    Reorder {
        /// Document to rewrite
        file: PathBuf,
        /// JSON file holding the desired outline
        #[arg(long, value_name = "JSON")]
        order: PathBuf,
        /// Write the result back instead of printing it
        #[arg(long, short = 'w')]
        write: bool,
    },
    /// Move one outline node (with its descendants) to a new position
    Move {
        /// Document to rewrite
        file: PathBuf,
        /// Current index of the node in the outline
        #[arg(long)]
        from: usize,
        /// Target index in the outline
        #[arg(long)]
        to: usize,
        /// Write the result back instead of printing it
        #[arg(long, short = 'w')]
        write: bool,
    },
    /// Change the level of a heading
    Level {
        /// Document to rewrite
        file: PathBuf,
        /// Zero-based line of the heading
        #[arg(long)]
        line: usize,
        /// Level the heading currently has
        #[arg(long)]
        from: u8,
        /// Level to give it
        #[arg(long)]
        to: u8,
        /// Shift descendant headings by the same amount
        #[arg(long)]
        cascade: bool,
        /// Write the result back instead of printing it
        #[arg(long, short = 'w')]
        write: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = args
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);
    let engine = Engine::new(cfg);

    match run(&engine, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "trellis=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(engine: &Engine, command: Command) -> trellis::Result<()> {
    match command {
        Command::Outline { file, json } => {
            let doc = engine.open(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(doc.outline())?);
            } else if doc.outline().is_empty() {
                eprintln!("No headings found in {}", file.display());
            } else {
                println!("{}", outline::render_tree(doc.outline()));
            }
        }
        Command::Sections { file } => {
            let doc = engine.open(&file)?;
            let sections = engine.segment_sections(doc.text());
            println!("{}", serde_json::to_string_pretty(&sections)?);
        }
        Command::Section { file, line } => {
            let doc = engine.open(&file)?;
            let lines = engine.section_content(doc.text(), line);
            if lines.is_empty() {
                return Err(TrellisError::InvalidArgument(format!(
                    "no section starts on line {line}"
                )));
            }
            println!("{}", lines.join("\n"));
        }
        Command::Reorder { file, order, write } => {
            let doc = engine.open(&file)?;
            let json = std::fs::read_to_string(&order).map_err(|e| TrellisError::io(&order, e))?;
            let desired = trellis::outline_from_json(&json)?;
            let outcome = engine.reorder_by_outline(doc.text(), doc.outline(), &desired);
            if !outcome.reordered {
                eprintln!("No outline entry matched a section; document unchanged");
            }
            emit(&file, &outcome.text, write)?;
        }
        Command::Move {
            file,
            from,
            to,
            write,
        } => {
            let doc = engine.open(&file)?;
            let len = doc.outline().len();
            if from >= len || to >= len {
                return Err(TrellisError::InvalidArgument(format!(
                    "outline has {len} nodes, cannot move {from} to {to}"
                )));
            }
            emit_snapshot(&file, &doc, doc.move_node(from, to), write)?;
        }
        Command::Level {
            file,
            line,
            from,
            to,
            cascade,
            write,
        } => {
            let doc = engine.open(&file)?;
            let text = engine.change_heading_level(doc.text(), line, from, to, cascade);
            emit(&file, &text, write)?;
        }
    }
    Ok(())
}

fn emit_snapshot(
    file: &Path,
    doc: &Document,
    next: Option<Document>,
    write: bool,
) -> trellis::Result<()> {
    match next {
        Some(next) => emit(file, next.text(), write),
        None => {
            eprintln!("Nothing to change");
            emit(file, doc.text(), false)
        }
    }
}

fn emit(file: &Path, text: &str, write: bool) -> trellis::Result<()> {
    if write {
        trellis::write_text(file, text)?;
        eprintln!("Wrote {}", file.display());
    } else {
        println!("{text}");
    }
    Ok(())
}
