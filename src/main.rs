use clap::Parser;
use etoile_api::RestApi;
use etoile_core::DataSources;
use etoile_engine::{EngineConfig, RecommendationEngine};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Cuisine-similarity recommendations for Michelin-starred restaurants
#[derive(Parser, Debug)]
#[command(name = "etoile")]
#[command(about = "Recommend restaurants with a similar cuisine", long_about = None)]
struct Args {
    /// Directory holding the one/two/three-star CSV files
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Recommendations returned when a request gives no top_n
    #[arg(long, default_value_t = etoile_engine::DEFAULT_TOP_N)]
    top_n: usize,

    /// Minimum fuzzy score (0-100) to accept a name match
    #[arg(long, default_value_t = etoile_engine::DEFAULT_MATCH_THRESHOLD)]
    match_threshold: u8,

    /// Minimum fuzzy score (0-100) for a name suggestion
    #[arg(long, default_value_t = etoile_engine::DEFAULT_SUGGESTION_THRESHOLD)]
    suggestion_threshold: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.top_n == 0 {
        anyhow::bail!("--top-n must be a positive integer");
    }

    info!("Starting Etoile v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);

    let config = EngineConfig {
        match_threshold: args.match_threshold,
        suggestion_threshold: args.suggestion_threshold,
        default_top_n: args.top_n,
        ..EngineConfig::default()
    };

    // Nothing is served unless the whole dataset loads
    let engine = Arc::new(RecommendationEngine::load(&DataSources::from_dir(&args.data_dir), config)?);

    let stats = engine.statistics();
    info!(
        "Loaded {} restaurants ({} one-star, {} two-star, {} three-star), {} cuisines, {} cities, {} regions",
        stats.total_restaurants,
        stats.one_star,
        stats.two_star,
        stats.three_star,
        stats.unique_cuisines,
        stats.unique_cities,
        stats.unique_regions,
    );

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
