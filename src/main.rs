use anyhow::Context;
use biobot_api::{AppState, RestApi};
use biobot_core::Dataset;
use biobot_similarity::Retriever;
use biobot_storage::{import_csv_file, SessionLimits, SessionManager};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Biology exam helper bot and quiz
#[derive(Parser, Debug)]
#[command(name = "biobot")]
#[command(about = "Biology exam helper bot and quiz server", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 8501)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Number of related questions returned with a match
    #[arg(long, default_value_t = biobot_similarity::DEFAULT_TOP_K)]
    top_k: usize,

    /// Minimum cosine score for a match
    #[arg(long, default_value_t = biobot_similarity::DEFAULT_THRESHOLD)]
    match_threshold: f32,

    /// CSV merged into the built-in mdcat table at startup
    #[arg(long)]
    import: Option<PathBuf>,

    /// Live sessions kept at most; the least recently used are evicted
    #[arg(long, default_value_t = biobot_storage::DEFAULT_MAX_SESSIONS)]
    max_sessions: usize,

    /// Seconds a session may stay idle before it is dropped
    #[arg(long, default_value_t = biobot_storage::DEFAULT_SESSION_TTL.as_secs())]
    session_ttl_secs: u64,

    /// Largest accepted CSV upload, in megabytes
    #[arg(long, default_value_t = 200)]
    max_upload_mb: usize,
}

impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.top_k == 0 {
            return Err(biobot_core::Error::InvalidConfig("--top-k must be at least 1".into()).into());
        }
        if !(0.0..1.0).contains(&self.match_threshold) {
            return Err(biobot_core::Error::InvalidConfig(
                "--match-threshold must be in [0, 1)".into(),
            )
            .into());
        }
        if self.max_sessions == 0 {
            return Err(biobot_core::Error::InvalidConfig("--max-sessions must be at least 1".into()).into());
        }
        if self.max_upload_mb == 0 {
            return Err(biobot_core::Error::InvalidConfig("--max-upload-mb must be at least 1".into()).into());
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.validate()?;

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

    info!("Starting BioBot v{}", env!("CARGO_PKG_VERSION"));
    info!("Top-k: {}, match threshold: {}", args.top_k, args.match_threshold);
    info!(
        "Max sessions: {}, session TTL: {}s, max upload: {} MB",
        args.max_sessions, args.session_ttl_secs, args.max_upload_mb
    );

    let extra = match &args.import {
        Some(path) => import_csv_file(path)
            .with_context(|| format!("failed to import {}", path.display()))?,
        None => Vec::new(),
    };
    let sessions = SessionManager::with_extra(Dataset::Mdcat, extra).with_limits(SessionLimits {
        max_sessions: args.max_sessions,
        idle_ttl: Duration::from_secs(args.session_ttl_secs),
    });
    for (dataset, rows) in sessions.datasets() {
        info!("Using built-in dataset {}: {} rows", dataset, rows);
    }

    let state = Arc::new(
        AppState::new(sessions, Retriever::new(args.top_k, args.match_threshold))
            .with_max_upload_bytes(args.max_upload_mb.saturating_mul(1024 * 1024)),
    );

    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, &host, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("BioBot started successfully");
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
