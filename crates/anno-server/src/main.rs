//! Annotation backend server
//!
//! Stores uploaded documents and code files in memory, manages
//! annotations linking spans of one to spans of the other, persists
//! saved annotations as JSON files, and can ask an LLM to propose an
//! annotation for a document/code pair.

use clap::Parser;

/// Command line interface for the annotation backend
#[derive(Parser, Debug)]
#[command(name = "anno")]
#[command(about = "Document/code annotation backend")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    anno_server::run(cli.config.as_deref()).await?;
    Ok(())
}
