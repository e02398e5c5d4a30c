use clap::Parser;
use magnet_trackers::domain::model::StreamDescriptor;
use magnet_trackers::utils::{logger, validation::Validate};
use magnet_trackers::{
    CliConfig, Command, GearTitleParser, InMemoryTorrentStore, MagnetUriCodec, RefreshScheduler,
    TomlConfig, TrackerContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置
    let config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
    tracing::debug!("Config: {:?}", config);

    let context = TrackerContext::new(&config.provider_registry());
    let refresher = context
        .refresher(config.tracker_source())
        .with_retry_attempts(config.retry_attempts());

    match cli.command {
        Command::Refresh => match refresher.refresh().await {
            Ok(_) => {
                let snapshot = context.store().snapshot();
                println!("✅ Tracker lists refreshed (version {})", snapshot.version);
                println!("best:    {}", snapshot.best.len());
                println!("anime:   {}", snapshot.all_anime.len());
                println!("russian: {}", snapshot.all_russian.len());
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        },
        Command::Magnet {
            info_hash,
            torrents,
        } => {
            // 更新失敗時沿用目前的 tracker 清單
            if let Err(e) = refresher.refresh().await {
                tracing::warn!("Continuing without fresh trackers: {}", e);
            }
            let store = match torrents {
                Some(path) => InMemoryTorrentStore::from_json_file(path)?,
                None => InMemoryTorrentStore::new(),
            };
            let builder = context.magnet_builder(store, MagnetUriCodec);
            println!("{}", builder.build_magnet(&info_hash).await);
        }
        Command::Enrich { stream } => {
            if let Err(e) = refresher.refresh().await {
                tracing::warn!("Continuing without fresh trackers: {}", e);
            }
            let content = std::fs::read_to_string(&stream)?;
            let descriptor: StreamDescriptor = serde_json::from_str(&content)?;
            let enriched = context.enricher(GearTitleParser).enrich(&descriptor);
            println!("{}", serde_json::to_string_pretty(&enriched)?);
        }
        Command::Watch => {
            tracing::info!("🚀 Starting tracker refresh scheduler");
            let scheduler = RefreshScheduler::new(refresher, config.refresh_interval());
            scheduler
                .run_until(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!("Failed to listen for shutdown signal: {}", e);
                    }
                })
                .await;
        }
    }

    Ok(())
}
