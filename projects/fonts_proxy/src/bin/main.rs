use projects_fonts_proxy::{
	config::{ConfigError, ProxyConfig},
	router::{router, FONTS_PATH, NETLIFY_FONTS_PATH},
	state::{AppState, API_KEY_VAR},
};
use thiserror::Error;
use tokio::signal;
use tracing::{debug, info, warn};
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[source]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let dotenv = dotenvy::dotenv();

	let config = ProxyConfig::from_env()
		.map_err(|source| MainError::Config { source })?;

	tracing_init(&config.log_level, config.log_format)
		.map_err(|source| MainError::TracingInit { source })?;

	match dotenv {
		Ok(path) => debug!("Loaded environment from {}", path.display()),
		Err(err) if err.not_found() => {}
		Err(err) => warn!("Ignoring unreadable .env file: {err}"),
	}

	if std::env::var(API_KEY_VAR).map_or(true, |key| key.is_empty()) {
		// Not fatal: every request answers with a configuration error until it is set.
		warn!("{API_KEY_VAR} is not set");
	}

	let app = router(AppState::new(&config.upstream_endpoint));

	let listener = tokio::net::TcpListener::bind(config.addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!(
		"Server running on addr: {} ({}, {})",
		config.addr, NETLIFY_FONTS_PATH, FONTS_PATH
	);

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.map_err(|source| MainError::Serve { source })?;

	info!("Server stopped");

	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = signal::ctrl_c().await {
			warn!("Failed to listen for Ctrl-C: {err}");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut stream) => {
				stream.recv().await;
			}
			Err(err) => {
				warn!("Failed to listen for SIGTERM: {err}");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}

	info!("Shutdown signal received");
}
