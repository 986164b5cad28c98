//! Veles CLI - Command-line tool for OTB item database files.
//!
//! This is the main entry point for the Veles command-line application.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use veles_otb::{ItemDatabase, Otb};

/// Veles - OTB item database decoding tool
#[derive(Parser)]
#[command(name = "veles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an OTB file and dump the node tree as JSON
    OtbDump {
        /// Input OTB file
        #[arg(short, long, env = "INPUT_OTB")]
        input: PathBuf,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print summary information about an OTB file
    OtbInfo {
        /// Input OTB file
        #[arg(short, long, env = "INPUT_OTB")]
        input: PathBuf,
    },

    /// Emit the server-id to item-record mapping as JSON
    ItemsMap {
        /// Input OTB file
        #[arg(short, long, env = "INPUT_OTB")]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::OtbDump { input, output } => {
            cmd_otb_dump(&input, output.as_deref())?;
        }
        Commands::OtbInfo { input } => {
            cmd_otb_info(&input)?;
        }
        Commands::ItemsMap { input, output } => {
            cmd_items_map(&input, &output)?;
        }
    }

    Ok(())
}

fn cmd_otb_dump(input: &PathBuf, output: Option<&std::path::Path>) -> Result<()> {
    let otb = Otb::open(input).context("Failed to decode OTB file")?;

    let json = serde_json::to_string_pretty(otb.root())?;
    match output {
        Some(path) => {
            fs::write(path, json).context("Failed to write output file")?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn cmd_otb_info(input: &PathBuf) -> Result<()> {
    println!("Loading OTB: {}", input.display());

    let start = Instant::now();
    let otb = Otb::open(input).context("Failed to decode OTB file")?;
    let database = ItemDatabase::from_otb(&otb);

    let server_ids: Vec<u16> = database.iter().map(|(id, _)| id).collect();
    let min = server_ids.iter().min().copied().unwrap_or(0);
    let max = server_ids.iter().max().copied().unwrap_or(0);

    println!(
        "Decoded in {:?}: {} nodes, {} items, server ids {}..{}",
        start.elapsed(),
        otb.root().count(),
        database.len(),
        min,
        max
    );

    Ok(())
}

fn cmd_items_map(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Loading OTB: {}", input.display());

    let otb = Otb::open(input).context("Failed to decode OTB file")?;
    let database = ItemDatabase::from_otb(&otb);

    // String keys so the output is a plain JSON object, the shape the
    // asset build tooling consumes.
    let map: std::collections::BTreeMap<String, _> = database
        .iter()
        .map(|(id, record)| (id.to_string(), record))
        .collect();

    fs::write(output, serde_json::to_string_pretty(&map)?)
        .context("Failed to write output file")?;
    println!("Wrote {} items to {}", map.len(), output.display());

    Ok(())
}
