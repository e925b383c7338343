use boardgame_engine::{BoardGameEngine, EngineConfig, SearchQuery};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boardgame-cli")]
#[command(about = "Board game search and allow-list CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory the dataset is looked up from
    #[arg(short, long, env = "BOARDGAME_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Dataset file name
    #[arg(long, env = "BOARDGAME_DATASET_FILE")]
    dataset_file: Option<String>,

    /// Allow-list path
    #[arg(short, long, env = "BOARDGAME_ALLOW_LIST")]
    allow_list: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for games matching a description
    Search {
        /// Free-text query
        query: String,

        /// Maximum results
        #[arg(short = 'k', long, default_value = "5", allow_negative_numbers = true)]
        top_k: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check whether a game name is on the allow-list
    Validate {
        /// Name in English or Persian
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Load both tables and print cache statistics
    Stats,
}

impl Cli {
    fn config(&self) -> EngineConfig {
        let mut config = match &self.base_dir {
            Some(dir) => EngineConfig::with_base_dir(dir),
            None => EngineConfig::default(),
        };
        if let Some(file) = &self.dataset_file {
            config.dataset_file = file.clone();
        }
        if let Some(path) = &self.allow_list {
            config.allow_list_path = Some(path.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("boardgame_engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = BoardGameEngine::new(cli.config());

    match cli.command {
        Commands::Search { query, top_k, json } => {
            let response = engine.search(SearchQuery::new(query, top_k)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            println!("🔍 {} results for: {}", response.results_count, response.query);
            for (i, game) in response.games.iter().enumerate() {
                println!(
                    "\n{}. {} ({}) - similarity {}",
                    i + 1,
                    game.name,
                    game.year_published,
                    game.similarity
                );
                println!(
                    "   Players: {}-{}  Time: {} min  Complexity: {:.2}  Rating: {:.2}  Rank: {}",
                    game.min_players,
                    game.max_players,
                    game.play_time,
                    game.complexity_average,
                    game.rating_average,
                    game.bgg_rank
                );
                println!("   Mechanics: {}", game.mechanics);
                println!("   Domains: {}", game.domains);
            }
            println!("\n   Latency: {:.2}ms", response.latency_ms);
        }

        Commands::Validate { name, json } => {
            let response = engine.validate(&name).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if response.exists {
                println!("✅ Allowed: {}", name);
                println!("   English: {}", response.english_name.as_deref().unwrap_or("-"));
                println!("   Persian: {}", response.persian_name.as_deref().unwrap_or("-"));
            } else {
                println!("❌ Not on the allow-list: {}", name);
            }
        }

        Commands::Stats => {
            engine.warm_up().await?;
            let stats = engine.cache_stats();

            println!("📊 Cache Statistics:");
            if let Some(path) = &stats.dataset_path {
                println!("   Dataset: {}", path.display());
            }
            println!("   Games: {}", stats.games_loaded.unwrap_or(0));
            println!("   Skipped rows: {}", stats.skipped_rows.unwrap_or(0));
            println!("   Allow-list entries: {}", stats.allow_list_entries.unwrap_or(0));
        }
    }

    Ok(())
}
