//! Dispute daemon — serves the transaction record contract over HTTP.

mod config;
mod shutdown;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use dispute_contract::RecordStore;
use dispute_nullables::NullStateStore;
use dispute_rpc::RpcServer;
use dispute_store::StateStore;
use dispute_store_lmdb::LmdbEnvironment;
use dispute_utils::LogFormat;

use crate::config::{BackendKind, DaemonConfig};
use crate::shutdown::ShutdownController;

type SharedState = Arc<dyn StateStore + Send + Sync>;

#[derive(Parser)]
#[command(name = "dispute-daemon", about = "Transaction dispute ledger daemon")]
struct Cli {
    /// World-state backend.
    #[arg(long, value_enum, env = "DISPUTE_BACKEND")]
    backend: Option<BackendKind>,

    /// Data directory for the LMDB environment.
    #[arg(long, env = "DISPUTE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// LMDB memory map size in MiB.
    #[arg(long, env = "DISPUTE_MAP_SIZE_MB")]
    map_size_mb: Option<usize>,

    /// Address for the HTTP server, e.g. "127.0.0.1:7051".
    #[arg(long, env = "DISPUTE_LISTEN")]
    listen: Option<SocketAddr>,

    /// Write the seed transactions before serving.
    #[arg(long, env = "DISPUTE_SEED_ON_START")]
    seed: bool,

    /// Log format: "human" or "json".
    #[arg(long, env = "DISPUTE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "DISPUTE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Serve the contract over HTTP until SIGINT/SIGTERM.
    Run,
    /// Write the seed transactions to world state and exit.
    Init,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<DaemonConfig> {
        let mut config = match &self.config {
            Some(path) => DaemonConfig::from_toml_file(path)?,
            None => DaemonConfig::default(),
        };
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(mb) = self.map_size_mb {
            config.map_size_mb = mb;
        }
        if let Some(addr) = self.listen {
            config.listen_addr = addr;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config.seed_on_start |= self.seed;
        Ok(config)
    }
}

fn open_state(config: &DaemonConfig) -> anyhow::Result<SharedState> {
    match config.backend {
        BackendKind::Lmdb => {
            let env = LmdbEnvironment::open(&config.data_dir, config.map_size_bytes())
                .with_context(|| {
                    format!("failed to open LMDB at {}", config.data_dir.display())
                })?;
            Ok(Arc::new(env.state_store()))
        }
        BackendKind::Memory => {
            warn!("using in-memory world state; records are lost on exit");
            Ok(Arc::new(NullStateStore::new()))
        }
    }
}

async fn seed(store: &Arc<RecordStore<SharedState>>) -> anyhow::Result<()> {
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || store.initialize())
        .await
        .context("seed task panicked")??;
    Ok(())
}

async fn run(config: DaemonConfig) -> anyhow::Result<()> {
    let store = Arc::new(RecordStore::new(open_state(&config)?));
    if config.seed_on_start {
        seed(&store).await?;
    }

    let server = RpcServer::bind(config.listen_addr).await?;
    let shutdown = Arc::new(ShutdownController::new());
    let mut shutdown_rx = shutdown.subscribe();

    let signals = {
        let shutdown = Arc::clone(&shutdown);
        tokio::spawn(async move {
            if let Err(e) = shutdown.wait_for_signal().await {
                warn!("failed to listen for shutdown signals: {e}");
            }
        })
    };

    server
        .serve(store, async move {
            let _ = shutdown_rx.recv().await;
        })
        .await?;
    signals.abort();

    info!("dispute daemon exited cleanly");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    dispute_utils::init_logging(config.log_format, &config.log_level);

    if let Some(path) = &cli.config {
        info!("Loaded config from {}", path.display());
    }
    info!(
        backend = ?config.backend,
        data_dir = %config.data_dir.display(),
        listen = %config.listen_addr,
        "starting dispute daemon"
    );

    match cli.command {
        Command::Run => run(config).await,
        Command::Init => {
            let store = Arc::new(RecordStore::new(open_state(&config)?));
            seed(&store).await?;
            info!("world state seeded");
            Ok(())
        }
    }
}
