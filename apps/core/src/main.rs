// Portfolio companion - terminal front end.
// Drives the page controller and chatbot session from stdin.

use anyhow::Context;
use portfolio_companion::config::AppConfig;
use portfolio_companion::engine::ResponseEngine;
use portfolio_companion::fs_manager::PortablePathManager;
use portfolio_companion::knowledge::{KnowledgeBase, RandomSource, ThreadRandom};
use portfolio_companion::logging::init_tracing;
use portfolio_companion::presentation::{
    ChatSession, JsonFileStore, KeyValueStore, NameSubmission, PresentationController, SystemClock,
    TerminalView,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "Type a question, a suggestion number, :theme to switch theme, or :quit.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to read configuration")?;
    init_tracing(config.log_format);

    PortablePathManager::init(&config.data_dir)?;
    let store: Arc<dyn KeyValueStore> =
        Arc::new(JsonFileStore::open(PortablePathManager::store_file(&config.data_dir))?);

    let knowledge = KnowledgeBase::load(config.knowledge_file.as_deref()).context("Failed to load knowledge base")?;
    info!(subject = %knowledge.profile.identity.name, "Knowledge base ready");

    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandom);
    let engine = Arc::new(ResponseEngine::new(knowledge, Arc::clone(&random))?);
    let view = Arc::new(TerminalView::new());

    let mut page = PresentationController::new(store, Arc::new(SystemClock), view.clone());
    page.init();

    let chat = ChatSession::new(engine, view.clone(), random, config.reply_delay);
    chat.start();
    chat.toggle();
    println!("{}", HELP);

    let mut awaiting_name = page.visitor_name().is_none();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if awaiting_name && !input.starts_with(':') {
            match page.submit_name(input) {
                Ok(NameSubmission::Accepted { .. }) => {
                    awaiting_name = false;
                    println!("{}", HELP);
                }
                Ok(NameSubmission::Rejected) => {}
                Err(e) => {
                    // Chat stays usable without a stored name.
                    warn!("Could not store visitor name: {}", e);
                    awaiting_name = false;
                    println!("{}", HELP);
                }
            }
            continue;
        }

        match input {
            ":quit" | ":q" => break,
            ":theme" => {
                if let Err(e) = page.toggle_theme() {
                    warn!("Could not save theme: {}", e);
                }
            }
            ":help" => println!("{}", HELP),
            _ => {
                let suggestion = input.parse::<usize>().ok().and_then(|n| view.suggestion(n));
                match suggestion {
                    Some(chip) => {
                        println!("> {}", chip);
                        chat.click_suggestion(&chip);
                    }
                    None => {
                        chat.submit(input);
                    }
                }
            }
        }
    }

    page.shutdown();
    info!("Goodbye");
    Ok(())
}
