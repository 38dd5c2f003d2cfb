use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ragstore", about = "In-memory embedding store with cosine top-k retrieval")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chunk and embed files, then print the chunks closest to a query
    Search {
        query: String,
        /// Plain-text files to index (repeatable)
        #[arg(long = "file", short = 'f', required = true)]
        files: Vec<PathBuf>,
        /// Number of chunks to return
        #[arg(long, short = 'k', default_value = "3")]
        k: usize,
        /// Print matches joined by blank lines instead of a JSON list
        #[arg(long, conflicts_with = "scores")]
        join: bool,
        /// Include similarity scores
        #[arg(long)]
        scores: bool,
    },
    /// Print the embedding of a text as JSON
    Embed {
        text: String,
        /// Embed as a search query instead of as a document
        #[arg(long)]
        query: bool,
    },
    /// Print the chunks a file is split into
    Chunk { file: PathBuf },
    /// Index files once, then answer queries read line by line from stdin
    Repl {
        #[arg(long = "file", short = 'f', required = true)]
        files: Vec<PathBuf>,
        #[arg(long, short = 'k', default_value = "3")]
        k: usize,
    },
}
