use clap::Parser;
use docrag::cli::commands::{Cli, Commands};
use docrag::DocRag;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let db_path = std::env::var("DOCRAG_DB").unwrap_or_else(|_| "./docrag.db".into());

    let rag = match DocRag::new(&db_path) {
        Ok(rag) => rag,
        Err(e) => {
            eprintln!("Error initializing docrag: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(rag, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(rag: DocRag, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { text } => {
            let document = rag.ingest(&text).await?;
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Commands::List => {
            let documents = rag.list_documents()?;
            if documents.is_empty() {
                println!("No documents stored.");
            } else {
                println!("{}", serde_json::to_string_pretty(&documents)?);
            }
        }
        Commands::Ask {
            question,
            show_context,
        } => {
            let answer = rag.answer(&question).await?;
            if show_context {
                println!("[context {}] {}", answer.context.id, answer.context.content);
                println!();
            }
            println!("{}", answer.text);
        }
        Commands::Stats => {
            let stats = rag.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
