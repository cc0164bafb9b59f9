//! Run with: cargo run --bin popup -- --language Urdu "Good morning"

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pak_translate::config::client::ClientConfig;
use pak_translate::modules::translate::schema::Language;
use pak_translate::popup::handler::TranslateHandler;
use pak_translate::popup::view::ConsoleView;
use pak_translate::services::translation_client::TranslationClient;

#[derive(Parser, Debug)]
#[command(name = "popup", about = "Translate text through the local translation backend")]
struct Args {
    /// Text to translate. Read from stdin when omitted.
    text: Option<String>,

    /// Target language, e.g. Urdu, Pashto, Sindhi, Balochi. Read from stdin when omitted.
    #[arg(short, long)]
    language: Option<String>,

    /// Backend URL. Defaults to $TRANSLATE_ENDPOINT, then http://127.0.0.1:8000/translate
    #[arg(long)]
    endpoint: Option<String>,
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pak_translate=warn")),
        )
        .init();

    let args = Args::parse();

    let text = match args.text {
        Some(text) => text,
        None => prompt("Enter text to translate: ")?,
    };
    let language = match args.language {
        Some(language) => language,
        None => {
            let names: Vec<&str> = Language::all().iter().map(|l| l.as_str()).collect();
            let entered = prompt(&format!("Enter target language ({}): ", names.join(", ")))?;
            Language::selection(&entered)
        }
    };

    let config = args
        .endpoint
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);
    let client = TranslationClient::new(config);
    let handler = TranslateHandler::new(client, ConsoleView::new(text, language));

    match handler.on_click().await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
