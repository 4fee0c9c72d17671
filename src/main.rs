use clap::Parser;
use digital_me::adapters::build_sink;
use digital_me::api::{self, AppState};
use digital_me::utils::error::ErrorSeverity;
use digital_me::utils::{logger, validation::Validate};
use digital_me::{AppError, CliConfig, ContactRelay, ProfileStore, TomlConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting digital-me server");

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(cli: CliConfig) -> Result<(), AppError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    // 套用命令列覆蓋設定
    if let Some(bind) = cli.bind {
        tracing::info!("🔧 Bind address overridden to: {}", bind);
        config.server.bind = bind;
    }

    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let profile = ProfileStore::load(config.profile.path.as_deref())?;
    let recipient = config
        .sink
        .recipient
        .clone()
        .unwrap_or_else(|| profile.personal.email.clone());

    let sink = build_sink(&config.sink)?;
    tracing::info!("📨 Notification sink: {} (recipient: {})", sink.name(), recipient);

    let relay = ContactRelay::new(sink, recipient, config.sink.sender.clone());
    let app = api::router(AppState {
        relay: Arc::new(relay),
    });

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
