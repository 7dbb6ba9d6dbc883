//! CLI tool for managing interchange files in an exchange directory.
//!
//! # Usage
//!
//! ```bash
//! # Save a file produced elsewhere as CB0001.txt (never overwrites)
//! remessa --dir /srv/edi --template 'CB%s' save --token 0001 --input batch.txt
//!
//! # Print records with their record type codes
//! remessa --dir /srv/edi --template 'CB%s' read --token 0001 --json
//!
//! # Archive it into a subdirectory, then clean up the directory
//! remessa --dir /srv/edi --template 'CB%s' move --token 0001 --to processed
//! remessa --dir /srv/edi purge --protect README
//! ```
//!
//! `--dir` and `--template` fall back to `REMESSA_DIR` / `REMESSA_TEMPLATE`,
//! which may also come from a `.env` file. Logging is controlled by `RUST_LOG`.

use std::{
    fs,
    io::{Read, Write, stdin, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use remessa::prelude::*;
use tracing::debug;

/// Manage fixed-width interchange files (remessa/retorno) in a directory.
#[derive(Parser, Debug)]
#[command(name = "remessa")]
#[command(version, about)]
struct Args {
    /// Directory holding the interchange files.
    #[arg(short, long, env = "REMESSA_DIR")]
    dir: PathBuf,

    /// File name template with one '%s' placeholder for the token.
    #[arg(short, long, env = "REMESSA_TEMPLATE", default_value = "%s")]
    template: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save content as a new file. Fails if the file already exists.
    Save {
        /// Token substituted into the template.
        #[arg(long)]
        token: String,

        /// Input file path. If not specified, reads from stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the non-empty lines of a file with their record type.
    Read {
        #[arg(long)]
        token: String,

        /// Print one JSON object per line.
        #[arg(long)]
        json: bool,
    },

    /// Remove a file.
    Remove {
        #[arg(long)]
        token: String,
    },

    /// Move a file to another directory (absolute, or relative to --dir).
    Move {
        #[arg(long)]
        token: String,

        /// Destination directory.
        #[arg(long)]
        to: PathBuf,
    },

    /// List the .txt files of the directory.
    List,

    /// Delete every file of the directory except protected ones.
    Purge {
        /// File name to keep. May be repeated.
        #[arg(long)]
        protect: Vec<String>,
    },
}

fn main() {
    // Before the subscriber: RUST_LOG may come from .env. A missing file is fine.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    debug!(?args, "parsed arguments");

    execute(&args.dir, &args.template, args.command, &mut stdout().lock())
}

/// Reads `save` input from a file, or from stdin when no path is given.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut content = String::new();
            stdin().lock().read_to_string(&mut content).context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn open(dir: &Path, template: &str) -> Result<RecordFile> {
    let template = FileNameTemplate::new(template)?;
    RecordFile::with_template(dir, template)
        .with_context(|| format!("Cannot use directory '{}'", dir.display()))
}

/// Runs one command, writing its results to `out`.
fn execute<W: Write>(dir: &Path, template: &str, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Save { token, input } => {
            let file = open(dir, template)?;
            let content = read_input(input.as_deref())?;
            let url = file.save(&content, &token)?;
            writeln!(out, "{}", url.display())?;
        }
        Command::Read { token, json } => {
            let file = open(dir, template)?;
            for record in file.read(&token)? {
                if json {
                    serde_json::to_writer(&mut *out, &record)?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}\t{}", record.record_type, record.raw_line)?;
                }
            }
        }
        Command::Remove { token } => {
            let file = open(dir, template)?;
            if !file.remove(&token) {
                bail!("Could not remove {}", file.url(&token)?.display());
            }
        }
        Command::Move { token, to } => {
            let mut file = open(dir, template)?;
            let url = file.move_to(&token, &to)?;
            writeln!(out, "{}", url.display())?;
        }
        Command::List => {
            let mut names = DirectoryGuard::new().list(dir);
            names.sort();
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        Command::Purge { protect } => {
            let mut guard = DirectoryGuard::new();
            for name in protect {
                guard.protect(name);
            }
            if !guard.purge(dir) {
                bail!("Failed to purge '{}'", dir.display());
            }
        }
    }
    Ok(())
}
