//! Siteforge Engine - CLI driver.
//!
//! Generates website content from the command line and prints the
//! resulting artifact with its computed value as JSON.
//!
//! Usage:
//!   siteforge-engine site "<query>"
//!   siteforge-engine world <archetype-key> [slot-combination]
//!   siteforge-engine page "<website-context>" "<page-query>"

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siteforge_domain::{
    compute_value, format_value, Page, WalletAddress, Website, WorldArchetype,
};
use siteforge_engine::infrastructure::clock::SystemClock;
use siteforge_engine::infrastructure::offline::{OfflineLlm, UnconfiguredClassifier};
use siteforge_engine::infrastructure::ollama::OllamaClient;
use siteforge_engine::infrastructure::ports::{ClockPort, LlmPort};
use siteforge_engine::ContentGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from the repo root when present.
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siteforge_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Siteforge Engine");

    // The generative backend is an explicit dependency; SITEFORGE_OFFLINE
    // swaps in the adapter that routes every generation to the fallbacks.
    let llm: Arc<dyn LlmPort> = if std::env::var("SITEFORGE_OFFLINE").is_ok() {
        tracing::info!("Offline mode: generative backend disabled");
        Arc::new(OfflineLlm)
    } else {
        Arc::new(OllamaClient::from_env())
    };

    let clock = Arc::new(SystemClock::new());
    let generator = ContentGenerator::new(llm, Arc::new(UnconfiguredClassifier), clock.clone());

    let owner = WalletAddress::generate();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [mode, query] if mode == "site" => {
            let result = generator.create_site_content(query, &owner).await;

            let mut website = Website::new(
                result.title,
                result.description,
                result.content,
                owner,
                clock.now(),
            );
            for tool in result.tools {
                website.add_tool(tool);
            }

            print_website(&website)?;
        }
        [mode, key, ..] if mode == "world" => {
            let archetype: WorldArchetype = key.parse()?;
            let slot_combination = args.get(2).map(String::as_str);
            let result = generator
                .create_world_content(archetype, &owner, slot_combination)
                .await;

            let mut website = Website::new(
                result.title,
                result.description,
                result.content,
                owner,
                clock.now(),
            )
            .with_archetype(archetype);
            for tool in result.tools {
                website.add_tool(tool);
            }

            print_website(&website)?;
        }
        [mode, context, query] if mode == "page" => {
            let result = generator.create_page_content(context, query, &owner).await;

            let page = Page::new(
                result.title,
                result.content,
                result.tools,
                query.as_str(),
                owner,
                clock.now(),
            );

            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        _ => {
            anyhow::bail!(
                "usage: siteforge-engine site \"<query>\"\n       \
                 siteforge-engine world <archetype-key> [slot-combination]\n       \
                 siteforge-engine page \"<website-context>\" \"<page-query>\""
            );
        }
    }

    Ok(())
}

fn print_website(website: &Website) -> anyhow::Result<()> {
    let value = compute_value(website);
    tracing::info!(value = %format_value(Some(value)), "Computed website value");

    let record = serde_json::json!({
        "website": website,
        "value": value,
    });
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
