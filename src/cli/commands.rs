use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docrag", about = "Local document Q&A over an embedded vector store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a document to the store
    Add {
        /// Document text
        text: String,
    },
    /// List all stored documents
    List,
    /// Ask a question against the stored documents
    Ask {
        /// Question text
        question: String,
        /// Also print the document used as context
        #[arg(long)]
        show_context: bool,
    },
    /// Show store statistics
    Stats,
}
