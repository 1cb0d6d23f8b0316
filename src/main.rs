use anyhow::Result;
use proxy_sidecar::*;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    // Render the proxy config before anything else touches it.
    let vars = render::PlaceholderValues::from_env();
    render::render_config(
        Path::new(&app_config.proxy.template_path),
        Path::new(&app_config.proxy.output_path),
        &vars,
    )?;

    let stats_repo = Arc::new(stats_repo::StatsRepo::new(
        &app_config.stats.api_addr,
        Duration::from_secs(app_config.stats.timeout_secs),
    ));
    let bot_token = app_config.telegram.bot_token.clone().unwrap_or_default();
    let notifier: Arc<dyn notifier::Notify> = Arc::new(notifier::TelegramNotifier::new(
        bot_token,
        notifier::TelegramNotifier::DEFAULT_TIMEOUT,
    )?);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let reporter_handle = match app_config.telegram.credentials() {
        Some((_, chat_id)) => {
            let interval = Duration::from_secs(app_config.reporting.interval_secs);
            tracing::info!(interval_secs = interval.as_secs(), "periodic reporting enabled");
            Some(reporter::spawn(
                reporter::ReporterDeps {
                    stats_repo: stats_repo.clone(),
                    notifier: notifier.clone(),
                    chat_id: chat_id.to_string(),
                    shutdown_rx,
                },
                reporter::ReporterConfig { interval },
            ))
        }
        None => {
            tracing::info!("Telegram not configured, periodic reporting disabled");
            None
        }
    };

    let app = routes::app(stats_repo, notifier);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::warn!(error = %e, "HTTP server exited");
        }
    });

    let mut proxy = supervisor::ProxySupervisor::spawn(
        &app_config.proxy.binary,
        Path::new(&app_config.proxy.output_path),
    )?;

    let proxy_exited = tokio::select! {
        status = proxy.wait() => {
            match status {
                Ok(s) if s.success() => tracing::info!("proxy exited cleanly"),
                Ok(s) => tracing::warn!(status = %s, "proxy exited with error"),
                Err(e) => tracing::warn!(error = %e, "failed waiting on proxy"),
            }
            true
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            false
        }
    };

    let _ = shutdown_tx.send(());
    if !proxy_exited {
        proxy.shutdown().await;
    }
    if let Some(handle) = reporter_handle {
        let _ = handle.await;
    }

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
