//! CLI entry point for the `mgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use marker_graph::cli::commands;
use marker_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "mgraph: directed graphs with enumerable vertex and edge markers"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample graph, redirect and remove an edge, then exercise markers
    Demo,
    /// Build a graph from the command line and dump it
    Build {
        /// Vertex payload (repeatable)
        #[arg(long = "vertex")]
        vertices: Vec<u32>,
        /// Edge as SRC:DST payloads (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Comma-separated payloads to mark with a new marker (repeatable)
        #[arg(long = "mark")]
        marks: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Build {
            vertices,
            edges,
            marks,
        } => commands::cmd_build(&vertices, &edges, &marks, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidArgument(_) | GraphError::InvalidMarker(_) => 3,
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
