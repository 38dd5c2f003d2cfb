use clap::Parser;
use ragstore::cli::commands::{Cli, Commands};
use ragstore::config::Config;
use ragstore::domain::ports::embedding_port::InputType;
use ragstore::domain::values::search_output::SearchOutput;
use ragstore::infrastructure::ingest::splitter::CharacterTextSplitter;
use ragstore::infrastructure::ingest::text_file::{load_text_file, load_text_files};
use ragstore::RagStore;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };
    ragstore::logging::init(config.log_level);

    let result = run_command(&config, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(config: &Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let splitter = config.splitter()?;

    match cmd {
        Commands::Search {
            query,
            files,
            k,
            join,
            scores,
        } => {
            let store = RagStore::new(config)?;
            index_files(&store, &splitter, &files).await?;
            if scores {
                let results = store.search_by_text_scored(&query, k).await?;
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                match store.search_by_text(&query, k, join).await? {
                    SearchOutput::Joined(text) => println!("{text}"),
                    ranked => println!("{}", serde_json::to_string_pretty(&ranked)?),
                }
            }
        }
        Commands::Embed { text, query } => {
            let store = RagStore::new(config)?;
            let input_type = if query { InputType::Query } else { InputType::Document };
            let vector = store.embed(&text, input_type).await?;
            println!("{}", serde_json::to_string(&vector)?);
        }
        Commands::Chunk { file } => {
            let text = load_text_file(&file)?;
            let chunks = splitter.split(&text);
            println!("{}", serde_json::to_string_pretty(&chunks)?);
        }
        Commands::Repl { files, k } => {
            let store = RagStore::new(config)?;
            let count = index_files(&store, &splitter, &files).await?;
            eprintln!("Indexed {count} chunks. Enter a query per line (Ctrl-D to quit).");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                match store.search_by_text_scored(query, k).await {
                    Ok(results) => println!("{}", serde_json::to_string_pretty(&results)?),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
        }
    }
    Ok(())
}

async fn index_files(
    store: &RagStore,
    splitter: &CharacterTextSplitter,
    files: &[PathBuf],
) -> Result<usize, Box<dyn std::error::Error>> {
    let documents = load_text_files(files)?;
    let chunks = splitter.split_all(&documents);
    let count = store.build(chunks).await?;
    Ok(count)
}
