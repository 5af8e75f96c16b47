use anyhow::Context;
use aw_core::{
    generate_chat_response, get_feed, ArticleCatalog, ArticleProvider, ChatContext, ChatRequest,
    FeedFilters, SortKey, SummaryMode,
};
use aw_web::{create_app, AppState};
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "AI news feed and chat assistant", long_about = None)]
struct Cli {
    /// Path to a JSON article corpus; the bundled dataset is used when absent
    #[arg(long)]
    articles: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
    },
    /// Query the feed once and print the ranked stories
    Feed {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Freshness window such as 24h or 7d
        #[arg(long)]
        since: Option<String>,
        /// One of: latest, trending, research, policy
        #[arg(long)]
        sort: Option<String>,
    },
    /// Ask the assistant a question and print its answer
    Chat {
        message: String,
        #[arg(long)]
        expert: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let catalog = match &cli.articles {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read corpus {}", path))?;
            ArticleCatalog::from_json(&json).context("failed to parse corpus")?
        }
        None => ArticleCatalog::seeded(),
    };
    info!("📰 Article catalog seeded with {} stories", catalog.all().len());

    match cli.command {
        Commands::Serve { addr } => {
            let app = create_app(AppState::new(catalog)).await;
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("🌐 Listening on {}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Feed { search, tag, since, sort } => {
            let sort = match sort.as_deref() {
                Some(value) => {
                    let parsed = SortKey::parse(value);
                    if parsed.is_none() {
                        warn!("unknown sort {:?}, using latest", value);
                    }
                    parsed
                }
                None => None,
            };
            let result = get_feed(
                &catalog,
                &FeedFilters {
                    search,
                    tag,
                    since,
                    sort,
                    ..Default::default()
                },
            );
            info!("🔎 {} of {} stories matched", result.total, catalog.all().len());
            for item in &result.items {
                println!(
                    "- {} [{}] ({}, score {:.3})",
                    item.article.title,
                    item.article.tags.join(", "),
                    item.time_ago,
                    item.score,
                );
            }
        }
        Commands::Chat { message, expert } => {
            let response = generate_chat_response(
                &catalog,
                &ChatRequest {
                    message,
                    context: Some(ChatContext {
                        summary_mode: expert.then_some(SummaryMode::Expert),
                        ..Default::default()
                    }),
                },
            );
            println!("{}", response.answer);
            if !response.citations.is_empty() {
                println!("Citations:");
                for citation in &response.citations {
                    println!("  {} — {}", citation.domain, citation.url);
                }
            }
            info!("💬 Answered with {:?} confidence", response.confidence);
        }
    }

    Ok(())
}
